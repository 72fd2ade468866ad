//! Grid structure with dynamic dimensions

use super::Mark;

/// Rectangular grid of cells, each empty or holding a mark.
///
/// Coordinates are zero-based `(col, row)` pairs with `col < width` and
/// `row < height`. A set cell keeps its mark until [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Check signed coordinates against the grid bounds
    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as usize) < self.width && row >= 0 && (row as usize) < self.height
    }

    /// Get the mark at a cell, `None` if empty
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<Mark> {
        self.cells[self.index(col, row)]
    }

    /// Get the mark at signed coordinates, `None` if empty or out of bounds.
    ///
    /// Line scans probe past the grid edge; both cases break a run, so they
    /// collapse into one answer here.
    #[inline]
    pub fn mark_at(&self, col: i32, row: i32) -> Option<Mark> {
        if self.in_bounds(col, row) {
            self.get(col as usize, row as usize)
        } else {
            None
        }
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty_cell(&self, col: usize, row: usize) -> bool {
        self.get(col, row).is_none()
    }

    /// Place a mark on a cell
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, mark: Mark) {
        let idx = self.index(col, row);
        self.cells[idx] = Some(mark);
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.width && row < self.height);
        row * self.width + col
    }
}
