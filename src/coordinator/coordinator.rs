//! Dual-Mode Pipeline Implementation
//!
//! Owns the result store reference and runs the five statistics engine
//! operations in both execution modes, recording wall-clock timings.
//!
//! ## Responsibilities
//! - **Sequential pass**: invoking the metrics one after another on the calling
//!   task, writing each result under its fixed key as it completes.
//! - **Concurrent pass**: spawning five independent tasks (one per metric, one
//!   disjoint key each) and joining all of them before reporting.
//! - **Failure aggregation**: collecting every task failure after the join and
//!   surfacing the first to the caller instead of logging and continuing.

use super::types::{Metric, KEY_SEQUENTIAL_TIME, KEY_SPEEDUP, KEY_THREADED_TIME};
use crate::analysis::metrics::AnalysisError;
use crate::store::memory::ResultStore;

use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Failure raised by the coordinator's pipeline.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// A statistics operation rejected the document during the sequential pass.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// A concurrent task faulted. Reported only after all five tasks joined,
    /// so one failure never leaves the others hanging or abandoned.
    #[error("task '{metric}' failed: {reason}")]
    TaskFailure {
        metric: &'static str,
        reason: String,
    },
}

/// Tuning knobs for the pipeline. Defaults to strict error propagation with
/// no per-task deadline.
#[derive(Debug, Clone, Default)]
pub struct CoordinatorOptions {
    /// Legacy continue-on-error behavior: failures are logged and skipped
    /// instead of propagated.
    pub lenient: bool,
    /// Optional deadline applied to each task of the concurrent pass. `None`
    /// applies no timeout at all.
    pub task_deadline: Option<Duration>,
}

/// Runs the statistics engine in both execution modes and times each pass.
pub struct ExecutionCoordinator {
    /// Shared result store both passes write into.
    store: Arc<ResultStore>,
    options: CoordinatorOptions,
}

impl ExecutionCoordinator {
    /// Creates a coordinator with default (strict, no-deadline) options.
    pub fn new(store: Arc<ResultStore>) -> Self {
        Self::with_options(store, CoordinatorOptions::default())
    }

    pub fn with_options(store: Arc<ResultStore>, options: CoordinatorOptions) -> Self {
        Self { store, options }
    }

    /// Runs the full pipeline for one document: sequential pass, concurrent
    /// pass, then the speedup ratio. All eight store keys are written on
    /// success.
    ///
    /// The concurrent pass overwrites the metric values the sequential pass
    /// just wrote; both compute the same deterministic results, so the final
    /// stored values are identical regardless of order.
    pub async fn set_data(&self, text: &str) -> Result<(), CoordinatorError> {
        let sequential = self.run_sequential(text)?;
        tracing::info!("Sequential pass finished in {} ns", sequential.as_nanos());
        self.store
            .set(KEY_SEQUENTIAL_TIME, sequential.as_nanos().to_string());

        let threaded = self.run_concurrent(text).await?;
        tracing::info!("Concurrent pass finished in {} ns", threaded.as_nanos());
        self.store
            .set(KEY_THREADED_TIME, threaded.as_nanos().to_string());

        let ratio = speedup(sequential, threaded);
        tracing::info!("Speedup: {}", ratio);
        self.store.set(KEY_SPEEDUP, ratio.to_string());

        Ok(())
    }

    /// Invokes the five metrics one after another on the calling task, writing
    /// each result into the store as it completes. Returns the elapsed
    /// wall-clock time of the whole sequence.
    ///
    /// Keys written before a failing metric keep their fresh values; keys after
    /// it retain whatever the store held before.
    pub fn run_sequential(&self, text: &str) -> Result<Duration, CoordinatorError> {
        let started = Instant::now();

        for metric in Metric::ALL {
            match metric.compute(text) {
                Ok(value) => self.store.set(metric.key(), value),
                Err(e) if self.options.lenient => {
                    tracing::error!("Metric '{}' failed: {}", metric.key(), e);
                }
                Err(e) => return Err(CoordinatorError::Analysis(e)),
            }
        }

        Ok(started.elapsed())
    }

    /// Launches five independent tasks, one per metric, each computing exactly
    /// one operation and writing to exactly one disjoint store key. Blocks
    /// until all five tasks complete, then reports the elapsed wall-clock time.
    ///
    /// Failures are collected across the join and the first one is surfaced;
    /// the remainder are logged. No task is ever left running unobserved.
    pub async fn run_concurrent(&self, text: &str) -> Result<Duration, CoordinatorError> {
        let started = Instant::now();
        let text: Arc<str> = Arc::from(text);

        let mut handles = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            let store = self.store.clone();
            let text = text.clone();
            handles.push((
                metric,
                tokio::spawn(async move {
                    let value = metric.compute(&text)?;
                    store.set(metric.key(), value);
                    Ok::<(), AnalysisError>(())
                }),
            ));
        }

        let mut failures = Vec::new();
        for (metric, mut handle) in handles {
            let joined = match self.options.task_deadline {
                Some(limit) => match tokio::time::timeout(limit, &mut handle).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        handle.abort();
                        failures.push(CoordinatorError::TaskFailure {
                            metric: metric.key(),
                            reason: format!("deadline of {:?} elapsed", limit),
                        });
                        continue;
                    }
                },
                None => handle.await,
            };

            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => failures.push(CoordinatorError::TaskFailure {
                    metric: metric.key(),
                    reason: e.to_string(),
                }),
                Err(e) => failures.push(CoordinatorError::TaskFailure {
                    metric: metric.key(),
                    reason: format!("join error: {}", e),
                }),
            }
        }

        let mut failures = failures.into_iter();
        match failures.next() {
            None => Ok(started.elapsed()),
            Some(first) if self.options.lenient => {
                tracing::error!("Continuing after task failure: {}", first);
                for extra in failures {
                    tracing::error!("Continuing after task failure: {}", extra);
                }
                Ok(started.elapsed())
            }
            Some(first) => {
                for extra in failures {
                    tracing::error!("Further task failure: {}", extra);
                }
                Err(first)
            }
        }
    }
}

/// Ratio of the sequential duration to the concurrent duration.
///
/// The division is undefined for a zero concurrent duration; the result is
/// defined as positive infinity rather than a fault.
pub fn speedup(sequential: Duration, threaded: Duration) -> f64 {
    if threaded.is_zero() {
        return f64::INFINITY;
    }
    sequential.as_nanos() as f64 / threaded.as_nanos() as f64
}
