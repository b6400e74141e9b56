//! Exact backtracking search with a skip budget
//!
//! The search always works on the first empty cell of the grid. Either some
//! unplaced piece covers it, or (while budget remains) it is written off as
//! wasted. Since the choice point is deterministic, no partial grid state is
//! reached twice through a different cell order.
//!
//! Runs of wasted cells are taken in a loop at the same depth, so the
//! recursion only deepens per placed piece, never per skipped cell.

use crate::algorithm::family_set::FamilySet;
use crate::spatial::bitmask::RowMask;
use crate::spatial::catalog::ShapeCatalog;
use crate::spatial::grid::Grid;

/// Counters describing one search run
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of search steps taken
    pub nodes: u64,
    /// Number of speculative placements made
    pub placements: u64,
    /// Number of cells written off as wasted
    pub skips: u64,
}

/// Exact solver over one region's grid and placement list
///
/// The placement list is permuted during the search but every swap is undone
/// before the solver returns, whatever the verdict.
pub struct BacktrackSolver<'a, W: RowMask = u64> {
    grid: &'a mut Grid<W>,
    catalog: &'a ShapeCatalog<W>,
    pieces: &'a mut [usize],
    tried: Vec<FamilySet>,
    skipped: Vec<(usize, usize)>,

    /// Search statistics for the last run
    pub stats: SearchStats,
}

impl<'a, W: RowMask> BacktrackSolver<'a, W> {
    /// Create a solver placing `pieces` (family indices) into `grid`
    pub fn new(
        grid: &'a mut Grid<W>,
        catalog: &'a ShapeCatalog<W>,
        pieces: &'a mut [usize],
    ) -> Self {
        let tried = vec![FamilySet::new(catalog.len()); pieces.len()];
        Self {
            grid,
            catalog,
            pieces,
            tried,
            skipped: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Decide whether all pieces fit while wasting at most `skip_budget` cells
    ///
    /// On success the grid holds one arrangement (wasted cells included); on
    /// failure it is restored to the state it was handed in.
    pub fn solve(&mut self, skip_budget: usize) -> bool {
        self.stats = SearchStats::default();
        self.skipped.clear();
        self.search(0, skip_budget, 0)
    }

    /// Cover the first empty cell at or after `from_row` with piece `index`
    fn search(&mut self, index: usize, skip_budget: usize, from_row: usize) -> bool {
        if index == self.pieces.len() {
            return true;
        }

        let skipped_before = self.skipped.len();
        let mut skips_left = skip_budget;
        let mut scan_row = from_row;

        while let Some((row, col)) = self.grid.first_empty_from(scan_row) {
            self.stats.nodes += 1;
            if self.try_candidates(index, skips_left, row, col) {
                return true;
            }
            if skips_left == 0 {
                break;
            }

            skips_left -= 1;
            self.stats.skips += 1;
            self.grid.set_cell(row, col);
            self.skipped.push((row, col));
            scan_row = row;
        }

        self.unskip(skipped_before);
        false
    }

    /// Try each untried family of the remaining pieces on the target cell
    fn try_candidates(&mut self, index: usize, skips_left: usize, row: usize, col: usize) -> bool {
        if let Some(tried) = self.tried.get_mut(index) {
            tried.clear();
        }

        for candidate in index..self.pieces.len() {
            let Some(&family) = self.pieces.get(candidate) else {
                break;
            };
            let first_attempt = self
                .tried
                .get_mut(index)
                .is_none_or(|tried| tried.insert(family));
            if !first_attempt {
                continue;
            }

            self.pieces.swap(index, candidate);
            let solved = self.cover(index, skips_left, family, row, col);
            self.pieces.swap(index, candidate);
            if solved {
                return true;
            }
        }
        false
    }

    /// Try every orientation of `family` covering the target cell
    fn cover(
        &mut self,
        index: usize,
        skips_left: usize,
        family: usize,
        row: usize,
        col: usize,
    ) -> bool {
        let catalog = self.catalog;
        for shape in catalog.orientations(family) {
            for &(dr, dc) in shape.cells() {
                let (Some(start_row), Some(start_col)) = (row.checked_sub(dr), col.checked_sub(dc))
                else {
                    continue;
                };
                if !self.grid.can_place(shape, start_row, start_col) {
                    continue;
                }

                self.stats.placements += 1;
                self.grid.place(shape, start_row, start_col);
                // Every cell before the target is still occupied
                if self.search(index + 1, skips_left, row) {
                    return true;
                }
                self.grid.remove(shape, start_row, start_col);
            }
        }
        false
    }

    /// Free the cells skipped since the skip stack held `len` entries
    fn unskip(&mut self, len: usize) {
        let grid = &mut *self.grid;
        for (row, col) in self.skipped.drain(len..) {
            grid.clear_cell(row, col);
        }
    }
}
