use invnewton_core::Function;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    newton::{self, Config},
    seed::SeedTable,
};

use super::{BatchResult, ElementStatus};

/// Errors that can occur when building a [`Dispatcher`].
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to build worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Worker pool settings for a [`Dispatcher`].
///
/// Construct with [`DispatchConfig::new`] and chain builder methods as needed.
/// The number of workers affects throughput only, never results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    num_threads: usize,
    min_len: usize,
    name_prefix: String,
}

impl DispatchConfig {
    /// Creates a config that uses rayon's global pool with no chunking hint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            num_threads: 0,
            min_len: 1,
            name_prefix: "invnewton".to_string(),
        }
    }

    /// Sets the number of dedicated worker threads.
    ///
    /// Zero keeps rayon's global pool.
    #[must_use]
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Sets the minimum number of elements a worker processes per task.
    ///
    /// Larger values reduce scheduling overhead for very cheap functions.
    #[must_use]
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    /// Sets the prefix for worker thread names.
    #[must_use]
    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs batches of independent Newton solves on a rayon pool.
#[derive(Debug)]
pub struct Dispatcher {
    pool: Option<rayon::ThreadPool>,
    min_len: usize,
}

impl Dispatcher {
    /// Creates a dispatcher from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a dedicated pool was requested and could not be
    /// built.
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        let pool = if config.num_threads == 0 {
            None
        } else {
            let prefix = config.name_prefix;
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .thread_name(move |idx| format!("{prefix}-{idx}"))
                .build()?;
            Some(pool)
        };

        Ok(Self {
            pool,
            min_len: config.min_len,
        })
    }

    /// Creates a dispatcher that runs on rayon's global pool.
    #[must_use]
    pub fn global() -> Self {
        Self {
            pool: None,
            min_len: 1,
        }
    }

    /// Returns the number of worker threads batches run on.
    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, rayon::ThreadPool::current_num_threads)
    }

    /// Inverts every element of `ys` in parallel.
    ///
    /// Each element is solved exactly as [`newton::solve_unobserved`] would
    /// solve it alone, with step history recording disabled. The call never
    /// fails as a whole; per-element failures are reported in the result.
    #[must_use]
    pub fn solve_batch<F>(
        &self,
        function: &F,
        table: &SeedTable,
        ys: &[f64],
        config: &Config,
    ) -> BatchResult
    where
        F: Function + Sync + ?Sized,
    {
        let config = config.without_history();
        let min_len = self.min_len;

        debug!(
            len = ys.len(),
            threads = self.num_threads(),
            "dispatching batch"
        );

        let run = || -> Vec<(f64, ElementStatus)> {
            ys.par_iter()
                .with_min_len(min_len)
                .map(|&y| ElementStatus::slot(newton::solve_unobserved(function, table, y, &config)))
                .collect()
        };
        let slots = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let result = BatchResult::from_slots(slots);
        match result.failure() {
            Some(first) => warn!(
                failed = result.failures().count(),
                first,
                len = result.len(),
                "batch finished with unconverged elements"
            ),
            None => debug!(len = result.len(), "batch converged"),
        }
        result
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::global()
    }
}
