use rand::Rng;

use super::{Carver, Progress, pick};
use crate::maze::{Coord, Maze, get_neighbors};

/// Unbiased random walk that carves whenever it steps onto a new cell.
pub struct AldousBroder {
    current: Coord,
    remaining: usize,
}

impl AldousBroder {
    pub fn new<R: Rng>(maze: &mut Maze, rng: &mut R) -> Self {
        let start: Coord = (
            rng.random_range(0..maze.rows()),
            rng.random_range(0..maze.cols()),
        );
        maze.mark_visited(start);
        AldousBroder {
            current: start,
            remaining: maze.len() - 1,
        }
    }
}

impl Carver for AldousBroder {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        if self.remaining == 0 {
            return Progress::Done;
        }
        let neighbors = get_neighbors(self.current, maze).collect::<Vec<_>>();
        let next = pick(rng, &neighbors);
        if !maze[next].visited {
            maze.remove_walls(self.current, next);
            maze.mark_visited(next);
            self.remaining -= 1;
        }
        self.current = next;
        Progress::Stepped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::ZeroRng;

    #[test]
    fn test_zero_rng_walk() {
        // Start (0, 0); the zero rng always takes the first neighbour,
        // which is up when there is one and down otherwise.
        let mut maze = Maze::new(3, 1);
        let mut carver = AldousBroder::new(&mut maze, &mut ZeroRng);
        assert_eq!(carver.remaining, 2);
        assert_eq!(carver.step(&mut maze, &mut ZeroRng), Progress::Stepped);
        assert_eq!(carver.current, (1, 0));
        // From (1, 0) up is (0, 0), already visited: a step without a carve.
        assert_eq!(carver.step(&mut maze, &mut ZeroRng), Progress::Stepped);
        assert_eq!(carver.current, (0, 0));
        assert_eq!(carver.remaining, 1);
        assert_eq!(maze.open_passages(), 1);
    }

    #[test]
    fn test_walks_until_every_cell_joined() {
        let mut maze = Maze::new(4, 4);
        let mut rng = rand::rng();
        let mut carver = AldousBroder::new(&mut maze, &mut rng);
        let mut steps = 0;
        while carver.step(&mut maze, &mut rng) == Progress::Stepped {
            steps += 1;
        }
        assert!(steps >= 15);
        assert!(maze.cells().all(|c| c.visited));
        assert_eq!(maze.open_passages(), 15);
    }
}
