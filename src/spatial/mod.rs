//! Spatial data structures for polyomino packing
//!
//! This module contains:
//! - Shape normalization and orientation enumeration
//! - Row bitmask compilation of oriented shapes
//! - The compiled shape catalog and region descriptions
//! - The row-bitmask occupancy grid

/// Per-row bitmask form of oriented shapes
pub mod bitmask;
/// Compiled orientation table indexed by shape family
pub mod catalog;
/// Row-bitmask occupancy grid
pub mod grid;
/// Packing problem instances
pub mod region;
/// Shape normalization and symmetry orientations
pub mod shape;

pub use bitmask::{CompiledShape, RowMask};
pub use grid::Grid;
