/// A coordinate in the maze, as `(row, col)`.
pub type Coord = (usize, usize);

/// The four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Neighbour enumeration order used by every generator and solver.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// The side of the neighbouring cell that faces back at this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Steps one cell in this direction.
    /// Returns `None` when the step would leave the first row or column;
    /// the far edges have to be checked against the maze bounds by the caller.
    pub fn step(self, (row, col): Coord) -> Option<Coord> {
        match self {
            Direction::Top => row.checked_sub(1).map(|r| (r, col)),
            Direction::Bottom => Some((row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => Some((row, col + 1)),
        }
    }

    /// Direction leading from `from` to the grid-adjacent `to`, if they are adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        match (
            to.0 as isize - from.0 as isize,
            to.1 as isize - from.1 as isize,
        ) {
            (-1, 0) => Some(Direction::Top),
            (1, 0) => Some(Direction::Bottom),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Wall flags of a single cell; `true` means the side is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };
    pub const OPEN: Walls = Walls {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub fn get(&self, side: Direction) -> bool {
        match side {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Direction, closed: bool) {
        match side {
            Direction::Top => self.top = closed,
            Direction::Right => self.right = closed,
            Direction::Bottom => self.bottom = closed,
            Direction::Left => self.left = closed,
        }
    }

    /// Number of closed sides.
    pub fn count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .filter(|&&closed| closed)
            .count()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

/// One position of the maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub walls: Walls,
    /// Generator bookkeeping: set once the cell joined the spanning tree.
    pub visited: bool,
    pub is_entry: bool,
    pub is_exit: bool,
}

impl Cell {
    /// A fully walled, unvisited cell.
    pub fn new(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            walls: Walls::CLOSED,
            visited: false,
            is_entry: false,
            is_exit: false,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn has_wall(&self, side: Direction) -> bool {
        self.walls.get(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_closed() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.coord(), (2, 3));
        assert_eq!(cell.walls, Walls::CLOSED);
        assert_eq!(cell.walls.count(), 4);
        assert!(!cell.visited && !cell.is_entry && !cell.is_exit);
    }

    #[test]
    fn test_direction_step() {
        assert_eq!(Direction::Top.step((0, 0)), None);
        assert_eq!(Direction::Left.step((0, 0)), None);
        assert_eq!(Direction::Bottom.step((0, 0)), Some((1, 0)));
        assert_eq!(Direction::Right.step((4, 1)), Some((4, 2)));
        assert_eq!(Direction::Top.step((4, 1)), Some((3, 1)));
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Top));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::Right));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((0, 0), (0, 2)), None);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_walls_set_get() {
        let mut walls = Walls::default();
        walls.set(Direction::Left, false);
        assert!(!walls.get(Direction::Left));
        assert!(walls.get(Direction::Right));
        assert_eq!(walls.count(), 3);
        assert_eq!(Walls::OPEN.count(), 0);
    }
}
