use std::collections::HashMap;

use rand::Rng;

use super::{Carver, Progress, pick};
use crate::maze::{Coord, Maze, get_neighbors};

/// Wilson's algorithm: loop-erased random walks grafted onto the tree one
/// edge per step.
pub struct Wilson {
    /// Cells not yet in the tree, in row-major order.
    unvisited: Vec<Coord>,
    /// Loop-free walk currently being carved; its last cell is in the tree.
    path: Vec<Coord>,
    /// Number of edges of `path` already carved.
    carved: usize,
}

impl Wilson {
    pub fn new<R: Rng>(maze: &mut Maze, rng: &mut R) -> Self {
        let mut unvisited = (0..maze.rows())
            .flat_map(|row| (0..maze.cols()).map(move |col| (row, col)))
            .collect::<Vec<_>>();
        let first = unvisited.remove(rng.random_range(0..unvisited.len()));
        maze.mark_visited(first);
        Wilson {
            unvisited,
            path: Vec::new(),
            carved: 0,
        }
    }

    /// Random walk from a random unvisited cell until it touches the tree.
    fn walk<R: Rng>(&self, maze: &Maze, rng: &mut R) -> Vec<Coord> {
        let mut cell = pick(rng, &self.unvisited);
        let mut path = vec![cell];
        // Position of every cell on the path; the path never repeats a cell.
        let mut positions = HashMap::from([(cell, 0)]);
        while !maze[cell].visited {
            let neighbors = get_neighbors(cell, maze).collect::<Vec<_>>();
            let next = pick(rng, &neighbors);
            match positions.get(&next) {
                Some(&pos) => erase_loop(&mut path, &mut positions, pos),
                None => {
                    positions.insert(next, path.len());
                    path.push(next);
                }
            }
            cell = next;
        }
        path
    }
}

/// Cuts the path back so that it ends at index `pos`.
fn erase_loop(path: &mut Vec<Coord>, positions: &mut HashMap<Coord, usize>, pos: usize) {
    tracing::trace!("[generate] erasing loop of {} cells", path.len() - pos - 1);
    for cell in path.drain(pos + 1..) {
        positions.remove(&cell);
    }
}

impl Carver for Wilson {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        if self.carved + 1 >= self.path.len() {
            if self.unvisited.is_empty() {
                return Progress::Done;
            }
            self.path = self.walk(maze, rng);
            self.carved = 0;
        }

        let (from, to) = (self.path[self.carved], self.path[self.carved + 1]);
        maze.remove_walls(from, to);
        maze.mark_visited(from);
        if let Some(idx) = self.unvisited.iter().position(|&c| c == from) {
            self.unvisited.remove(idx);
        }
        self.carved += 1;
        Progress::Stepped
    }
}
