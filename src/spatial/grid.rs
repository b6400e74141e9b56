//! Row-bitmask occupancy grid
//!
//! One word per row, bit `c` set when column `c` is occupied. Bits at columns
//! at or beyond the width are never set, so a complemented row's trailing zero
//! count finds the first free column directly.

use crate::io::error::{PackingError, Result};
use crate::spatial::bitmask::{CompiledShape, RowMask};
use ndarray::Array2;

/// Mutable board state for a single region evaluation
#[derive(Clone, Debug)]
pub struct Grid<W: RowMask = u64> {
    width: usize,
    height: usize,
    rows: Vec<W>,
}

impl<W: RowMask> Default for Grid<W> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            rows: Vec::new(),
        }
    }
}

impl<W: RowMask> Grid<W> {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` when `width` exceeds the row word.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let mut grid = Self {
            width: 0,
            height: 0,
            rows: Vec::with_capacity(height),
        };
        grid.reset(width, height)?;
        Ok(grid)
    }

    /// Clear the grid and resize it, keeping the row allocation
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` when `width` exceeds the row word.
    pub fn reset(&mut self, width: usize, height: usize) -> Result<()> {
        if width > W::COLUMNS {
            return Err(PackingError::RegionTooWide {
                region: None,
                width,
                limit: W::COLUMNS,
            });
        }
        self.width = width;
        self.height = height;
        self.rows.clear();
        self.rows.resize(height, W::zero());
        Ok(())
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Occupied-column bitmask of every row
    pub fn rows(&self) -> &[W] {
        &self.rows
    }

    /// Test whether `shape` fits with its top-left corner at (`row`, `col`)
    ///
    /// Fails when any covered cell leaves the grid or lands on an occupied cell.
    pub fn can_place(&self, shape: &CompiledShape<W>, row: usize, col: usize) -> bool {
        if row + shape.max_row() >= self.height || col + shape.max_col() >= self.width {
            return false;
        }
        self.rows
            .iter()
            .skip(row)
            .zip(shape.row_masks())
            .all(|(&occupied, &mask)| (occupied & (mask << col)).is_zero())
    }

    /// Mark the cells of `shape` at (`row`, `col`) as occupied
    ///
    /// The placement must have passed `can_place`.
    pub fn place(&mut self, shape: &CompiledShape<W>, row: usize, col: usize) {
        for (occupied, &mask) in self.rows.iter_mut().skip(row).zip(shape.row_masks()) {
            *occupied = *occupied | (mask << col);
        }
    }

    /// Undo a matching `place`
    pub fn remove(&mut self, shape: &CompiledShape<W>, row: usize, col: usize) {
        for (occupied, &mask) in self.rows.iter_mut().skip(row).zip(shape.row_masks()) {
            *occupied = *occupied & !(mask << col);
        }
    }

    /// Lowest row, then lowest column, that is still free
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.first_empty_from(0)
    }

    /// First free cell in row-major order, scanning from `start_row`
    ///
    /// Rows above `start_row` are not examined; callers pass a row they know
    /// to be preceded only by full rows.
    pub fn first_empty_from(&self, start_row: usize) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .skip(start_row)
            .find_map(|(row, &occupied)| {
                let col = (!occupied).trailing_zeros() as usize;
                (col < self.width).then_some((row, col))
            })
    }

    /// Mark one cell as occupied
    pub fn set_cell(&mut self, row: usize, col: usize) {
        if let Some(occupied) = self.rows.get_mut(row) {
            *occupied = *occupied | W::bit(col);
        }
    }

    /// Mark one cell as free
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(occupied) = self.rows.get_mut(row) {
            *occupied = *occupied & !W::bit(col);
        }
    }

    /// Test whether one cell is occupied, treating outside cells as occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.rows
            .get(row)
            .is_none_or(|&occupied| !(occupied & W::bit(col)).is_zero())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .map(|occupied| occupied.count_ones() as usize)
            .sum()
    }

    /// Dense occupancy matrix, `true` marking an occupied cell
    pub fn to_occupancy(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            self.is_occupied(row, col)
        })
    }
}
