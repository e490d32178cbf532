//! Result Store Module
//!
//! Implements the process-wide, concurrency-safe key/value store that both
//! execution passes write their results into.
//!
//! ## Core Concepts
//! - **Retention**: the store is owned by the service handle and lives for the
//!   whole process. A new document overwrites existing keys in place; keys not
//!   touched by a failed computation keep their stale prior value.
//! - **Concurrent writes**: the five parallel tasks of the concurrent pass each
//!   own a disjoint key, so no application-level locking is needed; the map
//!   itself must stay consistent under mutation from different tasks.

pub mod memory;

#[cfg(test)]
mod tests;
