//! Worker pool evaluating independent regions
//!
//! Regions share nothing but the read-only catalog, so they are spread over a
//! fixed-size rayon pool. Each rayon job builds a private `RegionEvaluator`
//! and reuses it for every region in its split of the batch; the only shared
//! mutable state is the feasible-region counter.

use crate::algorithm::evaluator::RegionEvaluator;
use crate::io::configuration::DEFAULT_WORKER_STACK_SIZE;
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::progress::RegionProgress;
use crate::spatial::bitmask::RowMask;
use crate::spatial::catalog::ShapeCatalog;
use crate::spatial::region::Region;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Worker pool settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Number of worker threads, `None` for one per available core
    pub workers: Option<usize>,
    /// Stack size of each worker thread in bytes
    pub stack_size: usize,
    /// Whether to draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            workers: None,
            stack_size: DEFAULT_WORKER_STACK_SIZE,
            show_progress: false,
        }
    }
}

impl DispatchConfig {
    /// Use a fixed number of worker threads
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the worker thread stack size
    #[must_use]
    pub const fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Enable or disable the progress bar
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the settings before a pool is built
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero worker count or stack size.
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(invalid_parameter(
                "workers",
                &0,
                &"at least one worker is required",
            ));
        }
        if self.stack_size == 0 {
            return Err(invalid_parameter(
                "stack_size",
                &0,
                &"worker threads need a non-empty stack",
            ));
        }
        Ok(())
    }
}

/// Count the feasible regions, evaluating them in parallel
///
/// Blocks until every region has been decided. The count does not depend on
/// the number of workers or on the order regions are processed in.
///
/// # Errors
///
/// Returns the first invalid region (tagged with its index) before any search
/// starts, `InvalidParameter` for bad settings, and `WorkerPool` if the
/// threads cannot be spawned. A region failing during evaluation stops the
/// batch with its error rather than being counted as infeasible.
pub fn evaluate_all<W: RowMask>(
    regions: &[Region],
    catalog: &ShapeCatalog<W>,
    config: &DispatchConfig,
) -> Result<usize> {
    config.validate()?;
    validate_regions(regions, catalog)?;

    let mut builder = rayon::ThreadPoolBuilder::new()
        .stack_size(config.stack_size)
        .thread_name(|index| format!("polypack-worker-{index}"));
    if let Some(workers) = config.workers {
        builder = builder.num_threads(workers);
    }
    let pool = builder.build()?;

    let progress = RegionProgress::new(regions.len(), config.show_progress);
    let feasible = AtomicUsize::new(0);

    let outcome = pool.install(|| {
        regions.par_iter().enumerate().try_for_each_init(
            RegionEvaluator::<W>::new,
            |evaluator, (index, region)| -> Result<()> {
                let verdict = evaluator.evaluate(region, catalog).with_region(index)?;
                if verdict {
                    feasible.fetch_add(1, Ordering::Relaxed);
                }
                progress.record(verdict);
                Ok(())
            },
        )
    });
    progress.finish();
    outcome?;

    let count = feasible.into_inner();
    log::info!(
        "{count} of {} regions feasible ({} workers)",
        regions.len(),
        pool.current_num_threads()
    );
    Ok(count)
}

/// Count the feasible regions on the calling thread
///
/// Reuses a single evaluator for every region; the result always matches
/// `evaluate_all`.
///
/// # Errors
///
/// Returns the first invalid region, tagged with its index.
pub fn evaluate_all_sequential<W: RowMask>(
    regions: &[Region],
    catalog: &ShapeCatalog<W>,
) -> Result<usize> {
    let mut evaluator = RegionEvaluator::<W>::new();
    let mut count = 0;
    for (index, region) in regions.iter().enumerate() {
        if evaluator.evaluate(region, catalog).with_region(index)? {
            count += 1;
        }
    }
    log::info!("{count} of {} regions feasible", regions.len());
    Ok(count)
}

fn validate_regions<W: RowMask>(regions: &[Region], catalog: &ShapeCatalog<W>) -> Result<()> {
    regions
        .iter()
        .enumerate()
        .try_for_each(|(index, region)| region.validate(catalog).with_region(index))
}
