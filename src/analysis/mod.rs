//! Statistics Engine Module
//!
//! Pure text-analysis functions operating on one document per call.
//!
//! ## Overview
//! A document is tokenized by splitting on runs of whitespace; every metric is
//! derived from either the raw character stream or that word sequence. The
//! functions are stateless, so the coordinator can invoke them from the calling
//! task or from five independent concurrent tasks without coordination.
//!
//! ## Metrics
//! - **Letter count**: characters excluding all whitespace, internal whitespace included.
//! - **Word frequency**: occurrences per word, keys in first-seen order.
//! - **Longest / shortest word**: strict comparisons, so the first word of
//!   maximal/minimal length wins ties.
//! - **Repeated words**: the words occurring more than once, in table order.

pub mod metrics;
