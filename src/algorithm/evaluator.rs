//! Per-region orchestration of the packing strategies
//!
//! A region is decided by the cheapest check that settles it: nothing to
//! place, not enough area, a first-fit packing, and finally the exact search.

use crate::algorithm::backtrack::BacktrackSolver;
use crate::algorithm::greedy::greedy_pack;
use crate::io::configuration::PLACEMENT_LIST_CAPACITY;
use crate::io::error::Result;
use crate::spatial::bitmask::RowMask;
use crate::spatial::catalog::ShapeCatalog;
use crate::spatial::grid::Grid;
use crate::spatial::region::Region;

/// Which check settled a region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// No piece with any cells was required
    Empty,
    /// Required cells exceed the region's area
    AreaExceeded,
    /// First-fit packing placed every piece
    Greedy,
    /// Exact search delivered the verdict
    Backtracking,
}

/// Verdict for one region together with how it was reached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether the required pieces fit
    pub feasible: bool,
    /// The check that settled the verdict
    pub decided_by: Decision,
}

impl Evaluation {
    const fn new(feasible: bool, decided_by: Decision) -> Self {
        Self {
            feasible,
            decided_by,
        }
    }
}

/// Reusable buffers for evaluating regions one after another
///
/// An evaluator is never shared between threads; the dispatcher hands each
/// parallel job its own.
#[derive(Debug)]
pub struct RegionEvaluator<W: RowMask = u64> {
    grid: Grid<W>,
    pieces: Vec<usize>,
}

impl<W: RowMask> Default for RegionEvaluator<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: RowMask> RegionEvaluator<W> {
    /// Create an evaluator with empty buffers
    pub fn new() -> Self {
        Self {
            grid: Grid::default(),
            pieces: Vec::with_capacity(PLACEMENT_LIST_CAPACITY),
        }
    }

    /// Grid left behind by the last evaluation
    ///
    /// After a feasible verdict from the greedy or exact phase it holds one
    /// arrangement of the pieces (exact-search arrangements include the
    /// wasted cells).
    pub const fn grid(&self) -> &Grid<W> {
        &self.grid
    }

    /// Decide whether the region's pieces fit
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` or `UnknownFamily` when the region cannot be
    /// represented against this catalog.
    pub fn evaluate(&mut self, region: &Region, catalog: &ShapeCatalog<W>) -> Result<bool> {
        self.evaluate_detailed(region, catalog)
            .map(|evaluation| evaluation.feasible)
    }

    /// Decide whether the region's pieces fit and report which check decided
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` or `UnknownFamily` when the region cannot be
    /// represented against this catalog.
    pub fn evaluate_detailed(
        &mut self,
        region: &Region,
        catalog: &ShapeCatalog<W>,
    ) -> Result<Evaluation> {
        region.validate(catalog)?;

        let required = region.required_cells(catalog);
        if required == 0 {
            return Ok(Evaluation::new(true, Decision::Empty));
        }

        let area = region.area();
        if required > area {
            log::trace!(
                "{}x{} region needs {required} cells but has {area}",
                region.width,
                region.height
            );
            return Ok(Evaluation::new(false, Decision::AreaExceeded));
        }

        // One entry per piece, bounded by the area checked above
        region.fill_placement_list(catalog, &mut self.pieces);
        self.grid.reset(region.width, region.height)?;
        if greedy_pack(&mut self.grid, catalog, &self.pieces) {
            return Ok(Evaluation::new(true, Decision::Greedy));
        }

        log::debug!(
            "First fit failed for {}x{} region with {} pieces, searching with {} spare cells",
            region.width,
            region.height,
            self.pieces.len(),
            area - required
        );
        self.grid.reset(region.width, region.height)?;
        let feasible = self.run_exact(catalog, area - required);
        Ok(Evaluation::new(feasible, Decision::Backtracking))
    }

    /// Run only the first-fit packer on a region
    ///
    /// Pieces covering more cells than the region holds cannot all be placed,
    /// so such requests fail before any packing.
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` or `UnknownFamily` when the region cannot be
    /// represented against this catalog.
    pub fn pack_greedy(&mut self, region: &Region, catalog: &ShapeCatalog<W>) -> Result<bool> {
        region.validate(catalog)?;
        if region.required_cells(catalog) > region.area() {
            return Ok(false);
        }
        region.fill_placement_list(catalog, &mut self.pieces);
        self.grid.reset(region.width, region.height)?;
        Ok(greedy_pack(&mut self.grid, catalog, &self.pieces))
    }

    /// Run only the exact search on a region
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` or `UnknownFamily` when the region cannot be
    /// represented against this catalog.
    pub fn solve_exact(&mut self, region: &Region, catalog: &ShapeCatalog<W>) -> Result<bool> {
        region.validate(catalog)?;
        let Some(skip_budget) = region.area().checked_sub(region.required_cells(catalog)) else {
            return Ok(false);
        };
        region.fill_placement_list(catalog, &mut self.pieces);
        self.grid.reset(region.width, region.height)?;
        Ok(self.run_exact(catalog, skip_budget))
    }

    fn run_exact(&mut self, catalog: &ShapeCatalog<W>, skip_budget: usize) -> bool {
        let mut solver = BacktrackSolver::new(&mut self.grid, catalog, &mut self.pieces);
        let feasible = solver.solve(skip_budget);
        log::debug!(
            "Exact search {} after {} nodes ({} placements, {} skips)",
            if feasible { "succeeded" } else { "failed" },
            solver.stats.nodes,
            solver.stats.placements,
            solver.stats.skips
        );
        feasible
    }
}

/// Decide one region with a freshly allocated evaluator
///
/// # Errors
///
/// Returns `RegionTooWide` or `UnknownFamily` when the region cannot be
/// represented against this catalog.
pub fn evaluate<W: RowMask>(region: &Region, catalog: &ShapeCatalog<W>) -> Result<bool> {
    RegionEvaluator::new().evaluate(region, catalog)
}
