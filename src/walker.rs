use crate::maze::{Coord, Direction, Maze};

/// A player walking a finished maze from its entry towards its exit.
///
/// Moves are checked against the walls of the current cell, never assumed.
pub struct Walker {
    /// The maze being played
    maze: Maze,
    /// Tracks where the player currently is
    current: Coord,
    /// Goal position
    goal: Coord,
    /// Number of successful moves
    moves: usize,
    /// Every position the player stood on, starting with the entry
    trail: Vec<Coord>,
}

impl Walker {
    /// Places the player on the entry cell of `maze`.
    pub fn new(maze: Maze) -> Self {
        let start = maze.entry();
        let goal = maze.exit();
        Walker {
            maze,
            current: start,
            goal,
            moves: 0,
            trail: vec![start],
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn position(&self) -> Coord {
        self.current
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn trail(&self) -> &[Coord] {
        &self.trail
    }

    /// Check if the goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.current == self.goal
    }

    /// Attempt to move one cell in `direction`.
    /// Returns the new position if the move is legal, `None` if a wall or the
    /// maze boundary is in the way.
    pub fn try_move(&mut self, direction: Direction) -> Option<Coord> {
        let next = self.maze.can_move(self.current, direction)?;
        self.current = next;
        self.moves += 1;
        if self.trail.last() != Some(&next) {
            self.trail.push(next);
        }
        tracing::debug!("[walker] moved {:?} to {:?}", direction, next);
        if self.goal_reached() {
            tracing::info!("[walker] goal reached after {} moves", self.moves);
        }
        Some(next)
    }
}
