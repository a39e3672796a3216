use super::cell::{Cell, Coord};

/// Row-major storage for the cells of a maze. Dimensions never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    fn ravel_index(&self, (row, col): Coord) -> usize {
        if !self.is_in_bounds((row, col)) {
            panic!(
                "Coordinate ({}, {}) is out of bounds for a {}x{} grid",
                row, col, self.rows, self.cols
            );
        }
        row * self.cols + col
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.data.iter_mut()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
