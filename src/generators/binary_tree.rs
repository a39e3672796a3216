use rand::Rng;

use super::{Carver, Progress, pick};
use crate::maze::{Coord, Maze};

/// Single row-major pass carving each cell north or west.
pub struct BinaryTree {
    next: usize,
}

impl BinaryTree {
    pub fn new() -> Self {
        BinaryTree { next: 0 }
    }
}

impl Carver for BinaryTree {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        if self.next == maze.len() {
            return Progress::Done;
        }
        let (row, col) = (self.next / maze.cols(), self.next % maze.cols());
        self.next += 1;
        maze.mark_visited((row, col));

        let mut choices: Vec<Coord> = Vec::with_capacity(2);
        if row > 0 {
            choices.push((row - 1, col));
        }
        if col > 0 {
            choices.push((row, col - 1));
        }
        if !choices.is_empty() {
            let neighbor = pick(rng, &choices);
            maze.remove_walls((row, col), neighbor);
        }
        Progress::Stepped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::ZeroRng;

    #[test]
    fn test_zero_rng_prefers_north() {
        let mut maze = Maze::new(3, 3);
        let mut carver = BinaryTree::new();
        while carver.step(&mut maze, &mut ZeroRng) == Progress::Stepped {}
        // The top row can only go west, everything else goes north.
        assert!(maze.is_open_between((0, 0), (0, 1)));
        assert!(maze.is_open_between((0, 1), (0, 2)));
        for row in 1..3 {
            for col in 0..3 {
                assert!(maze.is_open_between((row, col), (row - 1, col)));
            }
        }
        assert_eq!(maze.open_passages(), 8);
    }

    #[test]
    fn test_one_step_per_cell() {
        let mut maze = Maze::new(4, 2);
        let mut carver = BinaryTree::new();
        let mut steps = 0;
        while carver.step(&mut maze, &mut rand::rng()) == Progress::Stepped {
            steps += 1;
        }
        assert_eq!(steps, 8);
        assert!(maze.cells().all(|c| c.visited));
    }
}
