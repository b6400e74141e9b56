//! Feasibility solver for packing polyomino pieces into rectangular regions
//!
//! Shapes are normalized and expanded into their rotation/reflection variants,
//! compiled into per-row bitmasks, then packed into a row-bitmask grid: a cheap
//! first-fit pass runs first, and an exact backtracking search with a bounded
//! number of wasted cells decides whatever the heuristic could not.

#![forbid(unsafe_code)]

/// Packing strategies, per-region evaluation and parallel dispatch
pub mod algorithm;
/// Error types, configuration constants and progress display
pub mod io;
/// Shapes, bitmask compilation, regions and the occupancy grid
pub mod spatial;

pub use algorithm::dispatcher::{DispatchConfig, evaluate_all, evaluate_all_sequential};
pub use algorithm::evaluator::{Decision, Evaluation, RegionEvaluator, evaluate};
pub use io::error::{PackingError, Result};
pub use spatial::catalog::{ShapeCatalog, compile};
pub use spatial::region::Region;
pub use spatial::shape::{CellOffset, Shape};
