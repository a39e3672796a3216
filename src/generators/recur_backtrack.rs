use rand::Rng;

use super::{Carver, Progress, pick};
use crate::maze::{Coord, Maze};

/// Randomized depth-first search with an explicit stack.
/// Every carve and every backtracking pop is a visible step.
pub struct RecurBacktrack {
    stack: Vec<Coord>,
}

impl RecurBacktrack {
    pub fn new(maze: &mut Maze) -> Self {
        let start = maze.entry();
        maze.mark_visited(start);
        RecurBacktrack { stack: vec![start] }
    }
}

impl Carver for RecurBacktrack {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        let Some(&cell) = self.stack.last() else {
            return Progress::Done;
        };

        let neighbors = maze.neighbors_with_visited(cell, false).collect::<Vec<_>>();
        if neighbors.is_empty() {
            // Dead end
            self.stack.pop();
        } else {
            let next = pick(rng, &neighbors);
            maze.remove_walls(cell, next);
            maze.mark_visited(next);
            self.stack.push(next);
        }
        Progress::Stepped
    }
}
