//! Polyomino shapes and their symmetry orientations
//!
//! A shape is a set of unit cells stored in normalized form: offsets are shifted
//! so the minimum row and column are zero, then sorted row-major. The sorted
//! cell list doubles as the canonical key used to deduplicate orientations.

use crate::io::configuration::{MAX_ORIENTATIONS, ROTATIONS};
use ndarray::Array2;
use std::collections::HashSet;

/// Cell position relative to a shape's own origin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellOffset {
    /// Row offset (ordered first so sorting is row-major)
    pub row: i32,
    /// Column offset
    pub col: i32,
}

impl CellOffset {
    /// Create an offset from a row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Quarter turn: (r, c) -> (c, -r)
    const fn rotated(self) -> Self {
        Self::new(self.col, -self.row)
    }

    /// Mirror across the vertical axis: (r, c) -> (r, -c)
    const fn mirrored(self) -> Self {
        Self::new(self.row, -self.col)
    }
}

/// Normalized polyomino
///
/// Immutable once built. Duplicate cells in the input collapse to one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    cells: Vec<CellOffset>,
}

impl Shape {
    /// Build a normalized shape from arbitrary cell offsets
    pub fn new(cells: impl IntoIterator<Item = CellOffset>) -> Self {
        let mut cells: Vec<CellOffset> = cells.into_iter().collect();
        normalize(&mut cells);
        Self { cells }
    }

    /// Build a shape from `(row, col)` pairs
    pub fn from_pairs(pairs: &[(i32, i32)]) -> Self {
        Self::new(pairs.iter().map(|&(row, col)| CellOffset::new(row, col)))
    }

    /// Build a shape from a dense occupancy matrix, `true` marking a cell
    ///
    /// This is the row-major form of a '#'-marked diagram.
    pub fn from_occupancy(occupancy: &Array2<bool>) -> Self {
        Self::new(
            occupancy
                .indexed_iter()
                .filter(|&(_, &occupied)| occupied)
                .map(|((row, col), _)| CellOffset::new(row as i32, col as i32)),
        )
    }

    /// Cells in canonical (sorted row-major) order
    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Test for a shape with no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows spanned by the shape
    pub fn height(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.row as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of columns spanned by the shape
    pub fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.col as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Enumerate the distinct rotations and reflections of this shape
    ///
    /// Applies every quarter turn to the shape and to its mirror image,
    /// normalizing each result and keeping the first occurrence of every
    /// canonical form. Yields between one and eight shapes for a non-empty
    /// input, and nothing for an empty one.
    pub fn orientations(&self) -> Vec<Self> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::with_capacity(MAX_ORIENTATIONS);
        let mut unique = Vec::with_capacity(MAX_ORIENTATIONS);

        let mirrored: Vec<CellOffset> = self.cells.iter().map(|cell| cell.mirrored()).collect();
        for base in [self.cells.clone(), mirrored] {
            let mut current = base;
            for _ in 0..ROTATIONS {
                let mut candidate = current.clone();
                normalize(&mut candidate);
                if seen.insert(candidate.clone()) {
                    unique.push(Self { cells: candidate });
                }
                for cell in &mut current {
                    *cell = cell.rotated();
                }
            }
        }

        unique
    }

    /// Dense occupancy matrix of the shape's bounding box
    pub fn to_occupancy(&self) -> Array2<bool> {
        let mut occupancy = Array2::from_elem((self.height(), self.width()), false);
        for cell in &self.cells {
            if let Some(slot) = occupancy.get_mut([cell.row as usize, cell.col as usize]) {
                *slot = true;
            }
        }
        occupancy
    }
}

/// Shift cells so the minimum row and column are zero, then sort and dedup
fn normalize(cells: &mut Vec<CellOffset>) {
    let min_row = cells.iter().map(|cell| cell.row).min().unwrap_or(0);
    let min_col = cells.iter().map(|cell| cell.col).min().unwrap_or(0);
    for cell in cells.iter_mut() {
        cell.row -= min_row;
        cell.col -= min_col;
    }
    cells.sort_unstable();
    cells.dedup();
}
