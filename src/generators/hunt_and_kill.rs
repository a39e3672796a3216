use rand::Rng;

use super::{Carver, Progress, pick};
use crate::maze::{Coord, Maze};

/// Random walk until stuck, then hunt for a fresh starting point.
pub struct HuntAndKill {
    current: Option<Coord>,
}

impl HuntAndKill {
    pub fn new(maze: &mut Maze) -> Self {
        let start = maze.entry();
        maze.mark_visited(start);
        HuntAndKill {
            current: Some(start),
        }
    }

    /// Scans in row-major order for the first unvisited cell touching the tree
    /// and links it to a random visited neighbour.
    fn hunt<R: Rng>(maze: &mut Maze, rng: &mut R) -> Option<Coord> {
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                let cell = (row, col);
                if maze[cell].visited {
                    continue;
                }
                let visited = maze.neighbors_with_visited(cell, true).collect::<Vec<_>>();
                if visited.is_empty() {
                    continue;
                }
                let next = pick(rng, &visited);
                maze.remove_walls(cell, next);
                maze.mark_visited(cell);
                tracing::trace!("[generate] hunt resumed at {:?}", cell);
                return Some(cell);
            }
        }
        None
    }
}

impl Carver for HuntAndKill {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        let Some(cell) = self.current else {
            return Progress::Done;
        };

        let neighbors = maze.neighbors_with_visited(cell, false).collect::<Vec<_>>();
        if !neighbors.is_empty() {
            let next = pick(rng, &neighbors);
            maze.remove_walls(cell, next);
            maze.mark_visited(next);
            self.current = Some(next);
            return Progress::Stepped;
        }

        self.current = HuntAndKill::hunt(maze, rng);
        match self.current {
            Some(_) => Progress::Stepped,
            None => Progress::Done,
        }
    }
}
