//! Text Metrics Service Library
//!
//! This library crate defines the core modules of the remote text-analysis service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`analysis`**: The statistics engine. Pure functions computing the five lexical
//!   metrics (letter count, longest/shortest word, repeated words, word frequency)
//!   from a single document.
//! - **`coordinator`**: The execution layer. Runs the five computations either
//!   sequentially or as concurrent tasks, measures both passes with a monotonic
//!   clock, and derives the speedup ratio.
//! - **`store`**: The shared state layer. A concurrency-safe key/value store
//!   (`ResultStore`) holding the latest results; it lives for the whole process
//!   and is never reset between calls.
//! - **`service`**: The HTTP facade. Exposes `setData`, `getData` and
//!   `generateText` over Axum, plus the canned-text corpus backing the generator.

pub mod analysis;
pub mod coordinator;
pub mod service;
pub mod store;
