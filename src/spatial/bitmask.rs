//! Per-row bitmask form of oriented shapes
//!
//! Each occupied row of a shape becomes one integer with a bit per occupied
//! column, so an overlap or bounds test against the grid costs one shift and
//! one AND per covered row instead of a loop over cells.

use crate::io::error::{PackingError, Result};
use crate::spatial::shape::Shape;
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Unsigned integer word holding one grid row, bit `c` marking column `c`
///
/// The word width caps the widest representable region; `u128` rows trade
/// speed for twice the columns of `u64`.
pub trait RowMask: PrimInt + Unsigned + Send + Sync + Debug + 'static {
    /// Number of columns one row can represent
    const COLUMNS: usize;

    /// Word with only the bit for `col` set
    fn bit(col: usize) -> Self {
        Self::one() << col
    }

    /// Word with the lowest `count` bits set
    fn low_bits(count: usize) -> Self {
        if count >= Self::COLUMNS {
            Self::max_value()
        } else {
            (Self::one() << count) - Self::one()
        }
    }
}

impl RowMask for u32 {
    const COLUMNS: usize = 32;
}

impl RowMask for u64 {
    const COLUMNS: usize = 64;
}

impl RowMask for u128 {
    const COLUMNS: usize = 128;
}

/// One orientation of a shape in row bitmask form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledShape<W: RowMask = u64> {
    row_masks: Vec<W>,
    cells: Vec<(usize, usize)>,
    max_row: usize,
    max_col: usize,
}

impl<W: RowMask> CompiledShape<W> {
    /// Compile a normalized shape into row masks
    ///
    /// # Errors
    ///
    /// Returns `ShapeTooWide` when the shape spans more columns than `W`
    /// holds. The reported family is 0; catalog compilation fills in the
    /// real index.
    pub fn compile(shape: &Shape) -> Result<Self> {
        let width = shape.width();
        if width > W::COLUMNS {
            return Err(PackingError::ShapeTooWide {
                family: 0,
                width,
                limit: W::COLUMNS,
            });
        }

        let mut row_masks = vec![W::zero(); shape.height()];
        let mut cells = Vec::with_capacity(shape.cell_count());
        for cell in shape.cells() {
            let (row, col) = (cell.row as usize, cell.col as usize);
            if let Some(mask) = row_masks.get_mut(row) {
                *mask = *mask | W::bit(col);
            }
            cells.push((row, col));
        }

        Ok(Self {
            row_masks,
            cells,
            max_row: shape.height().saturating_sub(1),
            max_col: width.saturating_sub(1),
        })
    }

    /// Row masks indexed by row offset from the shape's top
    pub fn row_masks(&self) -> &[W] {
        &self.row_masks
    }

    /// Occupied `(row, col)` offsets in row-major order
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Largest row offset of any cell
    pub const fn max_row(&self) -> usize {
        self.max_row
    }

    /// Largest column offset of any cell
    pub const fn max_col(&self) -> usize {
        self.max_col
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total set bits across all row masks
    pub fn bit_count(&self) -> usize {
        self.row_masks
            .iter()
            .map(|mask| mask.count_ones() as usize)
            .sum()
    }
}
