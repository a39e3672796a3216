pub mod error;
pub mod generators;
pub mod levels;
pub mod maze;
pub mod solvers;
pub mod walker;

pub use error::{MazeError, Result};
pub use generators::{Generation, Generator, generate, generate_maze, generate_with_rng};
pub use maze::{Cell, Coord, Direction, Maze, Walls};
pub use solvers::{Solver, solve_maze, solve_maze_with};
