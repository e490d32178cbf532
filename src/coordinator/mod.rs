//! Execution Coordinator Module
//!
//! Drives the dual-mode statistics pipeline: the same five metrics are computed
//! once sequentially on the calling task and once as five concurrent tasks, and
//! both passes are timed against a monotonic clock.
//!
//! ## Pipeline
//! 1. **Sequential pass**: the metrics run one after another, each result
//!    written to the store as it completes; the elapsed time lands under
//!    `sequentialTime`.
//! 2. **Concurrent pass**: five tasks are spawned, one per metric. Each task
//!    writes exactly one disjoint store key, and the coordinator joins all five
//!    before reading the clock (`threadedTime`). Failures are collected after
//!    the join and surfaced, never dropped.
//! 3. **Speedup**: the ratio `sequentialTime / threadedTime` lands under
//!    `speedup`; a zero denominator resolves to positive infinity instead of a
//!    fault.
//!
//! Both passes compute the same deterministic values, so the concurrent pass
//! overwriting the sequential results leaves the final stored values identical
//! regardless of order.
//!
//! ## Submodules
//! - **`types`**: The `Metric` enum binding each statistic to its fixed store
//!   key and rendered string form.
//! - **`coordinator`**: The `ExecutionCoordinator` running and timing both passes.

pub mod coordinator;
pub mod types;
