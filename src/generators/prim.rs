use rand::Rng;

use super::{Carver, Progress};
use crate::maze::{Coord, Maze, get_neighbors};

/// Wall candidate between a tree cell and one of its neighbours
#[derive(Clone, Copy, Debug, PartialEq)]
struct Edge {
    from: Coord,
    to: Coord,
}

/// Randomized Prim's algorithm over a list of wall candidates.
///
/// The list is never deduplicated: a candidate whose far side joined the tree
/// through another edge is simply dropped when it comes up.
pub struct Prim {
    frontier: Vec<Edge>,
}

impl Prim {
    pub fn new<R: Rng>(maze: &mut Maze, rng: &mut R) -> Self {
        let start: Coord = (
            rng.random_range(0..maze.rows()),
            rng.random_range(0..maze.cols()),
        );
        maze.mark_visited(start);
        let mut prim = Prim {
            frontier: Vec::new(),
        };
        prim.add_candidates(start, maze);
        prim
    }

    fn add_candidates(&mut self, from: Coord, maze: &Maze) {
        self.frontier
            .extend(get_neighbors(from, maze).map(|to| Edge { from, to }));
    }
}

impl Carver for Prim {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        while !self.frontier.is_empty() {
            let Edge { from, to } = self.frontier.remove(rng.random_range(0..self.frontier.len()));
            let (from_visited, to_visited) = (maze[from].visited, maze[to].visited);
            if from_visited == to_visited {
                // Stale candidate
                continue;
            }
            let (visited, unvisited) = if from_visited { (from, to) } else { (to, from) };
            maze.remove_walls(visited, unvisited);
            maze.mark_visited(unvisited);
            self.add_candidates(unvisited, maze);
            return Progress::Stepped;
        }
        Progress::Done
    }
}
