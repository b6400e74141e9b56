//! First-fit heuristic packing
//!
//! Pieces are placed one at a time in input order. For each piece the
//! orientations are tried in catalog order, and for each orientation the
//! candidate top-left corners are scanned row-major; the first corner where
//! the piece fits wins. A piece that fits nowhere ends the attempt.

use crate::spatial::bitmask::{CompiledShape, RowMask};
use crate::spatial::catalog::ShapeCatalog;
use crate::spatial::grid::Grid;

/// Try to place every piece by first fit
///
/// Returns `true` when all pieces were placed, which proves the region
/// feasible. A `false` proves nothing, and the grid is left partially filled
/// for the caller to discard.
pub fn greedy_pack<W: RowMask>(
    grid: &mut Grid<W>,
    catalog: &ShapeCatalog<W>,
    pieces: &[usize],
) -> bool {
    for &family in pieces {
        let placement = catalog
            .orientations(family)
            .iter()
            .find_map(|shape| first_fit(grid, shape).map(|(row, col)| (shape, row, col)));
        let Some((shape, row, col)) = placement else {
            return false;
        };
        grid.place(shape, row, col);
    }
    true
}

/// Row-major first position where `shape` fits, if any
///
/// For each candidate row a single blocked mask is built: the OR over the
/// shape's cells `(dr, dc)` of `rows[row + dr] >> dc`. Bit `c` of it is set
/// exactly when placing the shape's corner at column `c` would cover an
/// occupied cell, so the lowest clear bit among the valid start columns is
/// the first fit in that row.
pub fn first_fit<W: RowMask>(grid: &Grid<W>, shape: &CompiledShape<W>) -> Option<(usize, usize)> {
    let last_row = grid.height().checked_sub(shape.max_row() + 1)?;
    let last_col = grid.width().checked_sub(shape.max_col() + 1)?;
    let valid_columns = W::low_bits(last_col + 1);
    let rows = grid.rows();

    (0..=last_row).find_map(|row| {
        let blocked = shape
            .cells()
            .iter()
            .fold(W::zero(), |blocked, &(dr, dc)| {
                rows.get(row + dr)
                    .map_or(blocked, |&occupied| blocked | (occupied >> dc))
            });
        let available = !blocked & valid_columns;
        (!available.is_zero()).then_some((row, available.trailing_zeros() as usize))
    })
}
