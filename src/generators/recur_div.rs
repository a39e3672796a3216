use rand::Rng;

use super::{Carver, Progress};
use crate::maze::{Maze, Orientation};

/// Inclusive cell bounds of a chamber still to be divided.
#[derive(Clone, Copy, Debug)]
struct Chamber {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

/// Recursive division, unrolled onto an explicit stack so it can stop after
/// every wall it places. Chambers are processed in the same order the
/// recursive formulation would visit them.
pub struct RecurDiv {
    chambers: Vec<Chamber>,
}

impl RecurDiv {
    pub fn new(maze: &mut Maze) -> Self {
        // Clear all walls in the maze, except the boundary walls
        maze.clear_walls();
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                maze.mark_visited((row, col));
            }
        }
        RecurDiv {
            chambers: vec![Chamber {
                top: 0,
                left: 0,
                bottom: maze.rows() - 1,
                right: maze.cols() - 1,
            }],
        }
    }
}

impl Carver for RecurDiv {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        while let Some(chamber) = self.chambers.pop() {
            let Chamber {
                top,
                left,
                bottom,
                right,
            } = chamber;
            let width = right - left;
            let height = bottom - top;
            if width < 1 || height < 1 {
                continue;
            }

            // Cut across the longer side; square chambers are split vertically.
            let orientation = if width < height {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };

            match orientation {
                Orientation::Horizontal => {
                    let wall_row = top + rng.random_range(0..height);
                    let hole_col = left + rng.random_range(0..=width);

                    maze.insert_wall_line_after(wall_row, left, right, Orientation::Horizontal);
                    maze.remove_walls((wall_row, hole_col), (wall_row + 1, hole_col));

                    // Pushed in reverse so the upper chamber is divided first
                    self.chambers.push(Chamber {
                        top: wall_row + 1,
                        ..chamber
                    });
                    self.chambers.push(Chamber {
                        bottom: wall_row,
                        ..chamber
                    });
                }
                Orientation::Vertical => {
                    let wall_col = left + rng.random_range(0..width);
                    let hole_row = top + rng.random_range(0..=height);

                    maze.insert_wall_line_after(wall_col, top, bottom, Orientation::Vertical);
                    maze.remove_walls((hole_row, wall_col), (hole_row, wall_col + 1));

                    self.chambers.push(Chamber {
                        left: wall_col + 1,
                        ..chamber
                    });
                    self.chambers.push(Chamber {
                        right: wall_col,
                        ..chamber
                    });
                }
            }
            return Progress::Stepped;
        }
        Progress::Done
    }
}
