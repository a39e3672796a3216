use rand::Rng;

use super::{Carver, Progress, pick};
use crate::maze::{Coord, Maze};

/// Row-by-row runs carved east, each closed by one random passage north.
pub struct Sidewinder {
    row: usize,
    col: usize,
    run: Vec<Coord>,
}

impl Sidewinder {
    pub fn new() -> Self {
        Sidewinder {
            row: 0,
            col: 0,
            run: Vec::new(),
        }
    }
}

impl Carver for Sidewinder {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        if self.row == maze.rows() {
            return Progress::Done;
        }
        let cell = (self.row, self.col);
        maze.mark_visited(cell);
        self.run.push(cell);

        let at_eastern_boundary = self.col == maze.cols() - 1;
        let at_northern_boundary = self.row == 0;
        // The first row never closes early: it has no row above to open into.
        let close_out = at_eastern_boundary || (!at_northern_boundary && rng.random_bool(0.5));

        if close_out {
            let member = pick(rng, &self.run);
            if member.0 > 0 {
                maze.remove_walls(member, (member.0 - 1, member.1));
            }
            self.run.clear();
        } else {
            maze.remove_walls(cell, (self.row, self.col + 1));
        }

        self.col += 1;
        if self.col == maze.cols() {
            self.col = 0;
            self.row += 1;
        }
        Progress::Stepped
    }
}
