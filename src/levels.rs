use crate::error::{MazeError, Result};
use crate::generators::{Generator, generate_maze};
use crate::maze::Maze;

/// A preset maze size and algorithm for one stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub generator: Generator,
}

pub const LEVELS: [Level; 5] = [
    Level {
        name: "Easy",
        rows: 8,
        cols: 10,
        generator: Generator::RecurBacktrack,
    },
    Level {
        name: "Medium",
        rows: 12,
        cols: 15,
        generator: Generator::Prim,
    },
    Level {
        name: "Hard",
        rows: 15,
        cols: 20,
        generator: Generator::HuntAndKill,
    },
    Level {
        name: "Expert",
        rows: 20,
        cols: 25,
        generator: Generator::BinaryTree,
    },
    Level {
        name: "Legend",
        rows: 25,
        cols: 30,
        generator: Generator::RecurBacktrack,
    },
];

impl Level {
    /// Looks up a preset by its zero-based index.
    ///
    /// # Errors
    /// [`MazeError::UnknownLevel`] past the last preset.
    pub fn get(index: usize) -> Result<Level> {
        LEVELS.get(index).copied().ok_or(MazeError::UnknownLevel {
            index,
            available: LEVELS.len(),
        })
    }

    /// Generates the finished maze for this level.
    pub fn generate(&self, seed: Option<u64>) -> Result<Maze> {
        generate_maze(self.generator, self.rows, self.cols, seed)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}x{}, {})",
            self.name, self.rows, self.cols, self.generator
        )
    }
}
