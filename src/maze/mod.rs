pub mod cell;
mod grid;

use std::collections::HashSet;
use std::fmt;

pub use cell::{Cell, Coord, Direction, Walls};
use grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A rectangular maze of `rows x cols` cells, each carrying its own four walls.
///
/// Walls are stored on both sides of every interior edge. All mutation goes
/// through methods that keep the two sides in agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze with every wall present and no cell visited.
    ///
    /// # Panics
    /// If either dimension is zero. Use [`crate::generators::generate`] for
    /// validated construction.
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            panic!("Maze dimensions must be at least 1x1, got {}x{}", rows, cols);
        }
        Maze {
            grid: Grid::new(rows, cols),
        }
    }

    /// Returns the number of cell rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of cell columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        self.grid.row(row)
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) {
        self.grid[coord].visited = true;
    }

    /// Coordinate of the entry cell (top-left corner).
    pub fn entry(&self) -> Coord {
        (0, 0)
    }

    /// Coordinate of the exit cell (bottom-right corner).
    pub fn exit(&self) -> Coord {
        (self.rows() - 1, self.cols() - 1)
    }

    /// Whether `coord` has a wall on `side`.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: Coord, side: Direction) -> bool {
        self.grid[coord].has_wall(side)
    }

    /// Whether `a` and `b` are grid-adjacent with no wall between them.
    pub fn is_open_between(&self, a: Coord, b: Coord) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        match Direction::between(a, b) {
            Some(side) => !self.grid[a].has_wall(side) && !self.grid[b].has_wall(side.opposite()),
            None => false,
        }
    }

    /// The neighbour reached by leaving `coord` through `side`, if that side is open
    /// and the neighbour lies inside the maze.
    pub fn can_move(&self, coord: Coord, side: Direction) -> Option<Coord> {
        if self.has_wall(coord, side) {
            return None;
        }
        side.step(coord).filter(|&next| self.is_in_bounds(next))
    }

    /// Neighbours reachable from `coord` in one move, in up, down, left, right order.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |side| self.can_move(coord, side))
    }

    /// In-bounds neighbours of `coord` whose visited flag equals `visited`.
    pub fn neighbors_with_visited(
        &self,
        coord: Coord,
        visited: bool,
    ) -> impl Iterator<Item = Coord> + '_ {
        get_neighbors(coord, self).filter(move |&c| self.grid[c].visited == visited)
    }

    /// Removes the wall between two adjacent cells, on both sides.
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    /// * If the cells are not grid-adjacent (row or column must differ by exactly one, not both)
    pub fn remove_walls(&mut self, a: Coord, b: Coord) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!("Cannot remove walls between {:?} and {:?}: out of bounds", a, b);
        }
        let side = match Direction::between(a, b) {
            Some(side) => side,
            None => panic!(
                "Cannot remove walls between non-adjacent cells {:?} and {:?}",
                a, b
            ),
        };
        self.grid[a].walls.set(side, false);
        self.grid[b].walls.set(side.opposite(), false);
    }

    /// Closes the wall between two adjacent cells, on both sides.
    fn insert_wall(&mut self, a: Coord, b: Coord) {
        let side = match Direction::between(a, b) {
            Some(side) => side,
            None => panic!(
                "Cannot insert a wall between non-adjacent cells {:?} and {:?}",
                a, b
            ),
        };
        self.grid[a].walls.set(side, true);
        self.grid[b].walls.set(side.opposite(), true);
    }

    /// Inserts a line of walls after the specified row or column, within a given range.
    ///
    /// # Arguments
    /// * `from` - The row or column index to insert walls after
    /// * `start` - The starting cell index for the wall line (inclusive)
    /// * `end` - The ending cell index for the wall line (inclusive)
    /// * `orientation` - Determines which type of wall line to insert:
    ///   - `Horizontal`: walls between rows `from` and `from+1`, spanning columns `start..=end`
    ///   - `Vertical`: walls between columns `from` and `from+1`, spanning rows `start..=end`
    ///
    /// # Panics
    /// * If there is no row below (`Horizontal`) or column to the right (`Vertical`) of `from`
    /// * If `start` or `end` is out of bounds
    pub fn insert_wall_line_after(
        &mut self,
        from: usize,
        start: usize,
        end: usize,
        orientation: Orientation,
    ) {
        match orientation {
            Orientation::Horizontal => {
                if from + 1 >= self.rows() {
                    panic!("Cannot insert wall line after the bottommost row");
                }
                if start >= self.cols() || end >= self.cols() {
                    panic!(
                        "The range for inserting walls (start={}, end={}) is out of bounds",
                        start, end
                    );
                }
                (start..=end).for_each(|col| self.insert_wall((from, col), (from + 1, col)));
            }
            Orientation::Vertical => {
                if from + 1 >= self.cols() {
                    panic!("Cannot insert wall line after the rightmost column");
                }
                if start >= self.rows() || end >= self.rows() {
                    panic!(
                        "The range for inserting walls (start={}, end={}) is out of bounds",
                        start, end
                    );
                }
                (start..=end).for_each(|row| self.insert_wall((row, from), (row, from + 1)));
            }
        }
    }

    /// Clears all interior walls. Boundary walls are preserved.
    pub fn clear_walls(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        self.grid.iter_mut().for_each(|cell| {
            cell.walls = Walls {
                top: cell.row == 0,
                right: cell.col == cols - 1,
                bottom: cell.row == rows - 1,
                left: cell.col == 0,
            };
        });
    }

    /// Marks the entry and exit cells and opens their outward boundary walls.
    /// Entry leaves through the left side of `(0, 0)`, exit through the right
    /// side of `(rows - 1, cols - 1)`.
    pub fn setup_entry_exit(&mut self) {
        let entry = self.entry();
        let exit = self.exit();
        let cell = &mut self.grid[entry];
        cell.is_entry = true;
        cell.walls.left = false;
        let cell = &mut self.grid[exit];
        cell.is_exit = true;
        cell.walls.right = false;
    }

    /// Number of open interior edges, counting each adjacent pair once.
    /// A perfect maze has exactly `rows * cols - 1` of them.
    pub fn open_passages(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter_map(|side| side.step(cell.coord()))
                    .filter(|&next| self.is_open_between(cell.coord(), next))
                    .count()
            })
            .sum()
    }

    /// Draws the maze as ASCII art, marking the cells of `path` with `*`.
    pub fn render_with_path(&self, path: &[Coord]) -> String {
        let on_path = path.iter().copied().collect::<HashSet<Coord>>();
        let mut out = String::new();
        for row in 0..self.rows() {
            for cell in self.row(row) {
                out.push('+');
                out.push_str(if cell.walls.top { "---" } else { "   " });
            }
            out.push_str("+\n");
            for cell in self.row(row) {
                out.push(if cell.walls.left { '|' } else { ' ' });
                let mark = if cell.is_entry {
                    'S'
                } else if cell.is_exit {
                    'G'
                } else if on_path.contains(&cell.coord()) {
                    '*'
                } else {
                    ' '
                };
                out.push(' ');
                out.push(mark);
                out.push(' ');
            }
            let last = &self.row(row)[self.cols() - 1];
            out.push(if last.walls.right { '|' } else { ' ' });
            out.push('\n');
        }
        for cell in self.row(self.rows() - 1) {
            out.push('+');
            out.push_str(if cell.walls.bottom { "---" } else { "   " });
        }
        out.push_str("+\n");
        out
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with_path(&[]))
    }
}

/// Get neighbors of a cell.
/// A neighbor is considered a cell that is one step away in the cardinal directions,
/// listed in up, down, left, right order, walls ignored.
pub fn get_neighbors(coord: Coord, maze: &Maze) -> impl Iterator<Item = Coord> + '_ {
    let in_bounds = maze.is_in_bounds(coord);
    Direction::ALL
        .into_iter()
        .filter(move |_| in_bounds)
        .filter_map(move |side| side.step(coord))
        .filter(move |&c| maze.is_in_bounds(c))
}
