//! Error types and context management for packing operations

use std::fmt;

/// Main error type for all packing operations
///
/// Search exhaustion is never an error: an infeasible region is a normal
/// `Ok(false)` verdict. Only inputs the solver cannot represent faithfully
/// end up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackingError {
    /// Region is wider than the row word can hold
    RegionTooWide {
        /// Index of the region within its batch, when known
        region: Option<usize>,
        /// Requested region width
        width: usize,
        /// Number of columns a row word can represent
        limit: usize,
    },

    /// Shape extends over more columns than the row word can hold
    ShapeTooWide {
        /// Index of the shape family in the catalog
        family: usize,
        /// Column extent of the offending orientation
        width: usize,
        /// Number of columns a row word can represent
        limit: usize,
    },

    /// Count vector requests pieces of a family the catalog does not contain
    UnknownFamily {
        /// Index of the region within its batch, when known
        region: Option<usize>,
        /// Requested family index
        family: usize,
        /// Number of families in the catalog
        families: usize,
    },

    /// Solver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Worker pool could not be started
    WorkerPool {
        /// Description of the failure
        reason: String,
    },
}

fn region_label(region: Option<usize>) -> String {
    region.map_or_else(|| "region".to_string(), |index| format!("region #{index}"))
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionTooWide {
                region,
                width,
                limit,
            } => {
                write!(
                    f,
                    "{} is {width} columns wide but rows hold at most {limit}",
                    region_label(*region)
                )
            }
            Self::ShapeTooWide {
                family,
                width,
                limit,
            } => {
                write!(
                    f,
                    "Shape family {family} spans {width} columns but rows hold at most {limit}"
                )
            }
            Self::UnknownFamily {
                region,
                family,
                families,
            } => {
                write!(
                    f,
                    "{} requires shape family {family} but the catalog has {families} families",
                    region_label(*region)
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WorkerPool { reason } => {
                write!(f, "Failed to start worker pool: {reason}")
            }
        }
    }
}

impl std::error::Error for PackingError {}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackingError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorContext {
    /// Index of the region being evaluated
    pub region: Option<usize>,
}

/// Enriches error messages with batch position information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the region index
    ///
    /// # Errors
    ///
    /// Propagates the original error with the region index applied
    fn with_region(self, region: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PackingError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only region-scoped errors carry a region slot
            if let PackingError::RegionTooWide { region, .. }
            | PackingError::UnknownFamily { region, .. } = &mut error
            {
                if context.region.is_some() {
                    *region = context.region;
                }
            }
            error
        })
    }

    fn with_region(self, region: usize) -> Result<T> {
        self.with_context(ErrorContext {
            region: Some(region),
        })
    }
}

impl From<rayon::ThreadPoolBuildError> for PackingError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackingError {
    PackingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
