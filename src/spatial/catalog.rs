//! Compiled orientation table indexed by shape family

use crate::io::error::{PackingError, Result};
use crate::spatial::bitmask::{CompiledShape, RowMask};
use crate::spatial::shape::Shape;

/// A base shape's distinct orientations in bitmask form
#[derive(Clone, Debug)]
pub struct ShapeFamily<W: RowMask = u64> {
    cell_count: usize,
    orientations: Vec<CompiledShape<W>>,
}

impl<W: RowMask> ShapeFamily<W> {
    /// Cells covered by every orientation of the family
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Compiled orientations, at most eight
    pub fn orientations(&self) -> &[CompiledShape<W>] {
        &self.orientations
    }

    /// Test for a zero-cell family, which never takes part in placement
    pub fn is_empty(&self) -> bool {
        self.orientations.is_empty()
    }
}

/// Per-family table of compiled orientations
///
/// Built once from the base shapes and shared read-only by every region
/// evaluation.
#[derive(Clone, Debug)]
pub struct ShapeCatalog<W: RowMask = u64> {
    families: Vec<ShapeFamily<W>>,
}

impl<W: RowMask> ShapeCatalog<W> {
    /// Normalize, orient and compile every base shape
    ///
    /// # Errors
    ///
    /// Returns `ShapeTooWide` if any orientation spans more columns than a
    /// row word holds.
    pub fn compile(shapes: &[Shape]) -> Result<Self> {
        let families = shapes
            .iter()
            .enumerate()
            .map(|(family, shape)| {
                let orientations = shape
                    .orientations()
                    .iter()
                    .map(CompiledShape::compile)
                    .collect::<Result<Vec<_>>>()
                    .map_err(|error| match error {
                        PackingError::ShapeTooWide { width, limit, .. } => {
                            PackingError::ShapeTooWide {
                                family,
                                width,
                                limit,
                            }
                        }
                        other => other,
                    })?;

                Ok(ShapeFamily {
                    cell_count: shape.cell_count(),
                    orientations,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { families })
    }

    /// Number of shape families
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Test for a catalog with no families
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Look up one family
    pub fn family(&self, index: usize) -> Option<&ShapeFamily<W>> {
        self.families.get(index)
    }

    /// Compiled orientations of one family, empty for unknown indices
    pub fn orientations(&self, family: usize) -> &[CompiledShape<W>] {
        self.families
            .get(family)
            .map(|entry| entry.orientations.as_slice())
            .unwrap_or_default()
    }

    /// Cells per piece of one family, zero for unknown indices
    pub fn cell_count(&self, family: usize) -> usize {
        self.families.get(family).map_or(0, |entry| entry.cell_count)
    }

    /// Iterate over all families in index order
    pub fn families(&self) -> impl Iterator<Item = &ShapeFamily<W>> {
        self.families.iter()
    }
}

/// Compile base shapes into a catalog with the default `u64` row word
///
/// # Errors
///
/// Returns `ShapeTooWide` if any shape spans more than 64 columns.
pub fn compile(shapes: &[Shape]) -> Result<ShapeCatalog> {
    ShapeCatalog::compile(shapes)
}
