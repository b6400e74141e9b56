//! Packing problem instances

use crate::io::error::{PackingError, Result};
use crate::spatial::bitmask::RowMask;
use crate::spatial::catalog::ShapeCatalog;

/// One packing problem: region dimensions plus required piece counts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Required pieces per shape family (0 = unused)
    pub counts: Vec<usize>,
}

impl Region {
    /// Create a region
    pub const fn new(width: usize, height: usize, counts: Vec<usize>) -> Self {
        Self {
            width,
            height,
            counts,
        }
    }

    /// Number of cells in the region, saturating at `usize::MAX`
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Check the region against the catalog and the row word
    ///
    /// # Errors
    ///
    /// Returns `RegionTooWide` when the width exceeds the row word, and
    /// `UnknownFamily` when a non-zero count names a family beyond the catalog.
    pub fn validate<W: RowMask>(&self, catalog: &ShapeCatalog<W>) -> Result<()> {
        if self.width > W::COLUMNS {
            return Err(PackingError::RegionTooWide {
                region: None,
                width: self.width,
                limit: W::COLUMNS,
            });
        }

        if let Some((family, _)) = self
            .counts
            .iter()
            .enumerate()
            .find(|&(family, &count)| count > 0 && family >= catalog.len())
        {
            return Err(PackingError::UnknownFamily {
                region: None,
                family,
                families: catalog.len(),
            });
        }

        Ok(())
    }

    /// Total cells the required pieces cover
    ///
    /// Zero-cell families and families outside the catalog contribute nothing.
    /// A total beyond `usize::MAX` saturates, so it still exceeds any area.
    pub fn required_cells<W: RowMask>(&self, catalog: &ShapeCatalog<W>) -> usize {
        self.counts
            .iter()
            .enumerate()
            .try_fold(0usize, |total, (family, &count)| {
                count
                    .checked_mul(catalog.cell_count(family))
                    .and_then(|cells| total.checked_add(cells))
            })
            .unwrap_or(usize::MAX)
    }

    /// Flatten the count vector into a list of family indices
    ///
    /// Families without orientations are skipped. The list is written into
    /// `pieces`, which is cleared first so callers can reuse the allocation.
    /// It holds one entry per piece, so callers check `required_cells` against
    /// the area before flattening.
    pub fn fill_placement_list<W: RowMask>(
        &self,
        catalog: &ShapeCatalog<W>,
        pieces: &mut Vec<usize>,
    ) {
        pieces.clear();
        for (family, &count) in self.counts.iter().enumerate() {
            if count > 0 && !catalog.orientations(family).is_empty() {
                pieces.extend(std::iter::repeat_n(family, count));
            }
        }
    }
}
