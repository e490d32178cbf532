//! Remote Facade Module
//!
//! Exposes the three service operations over HTTP and owns the canned-text
//! generator backing `generateText`.
//!
//! ## Operations
//! - **`setData`**: runs the full sequential-then-concurrent pipeline for one
//!   document; internal task failures are returned to the caller rather than
//!   swallowed.
//! - **`getData`**: returns a point-in-time snapshot of the result store.
//! - **`generateText`**: returns one sample document drawn at random from a
//!   fixed corpus. The requested length is accepted but never applied to the
//!   result.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Endpoint constants and Data Transfer Objects (DTOs).
//! - **`corpus`**: The fixed sample texts and the seedable generator.

pub mod corpus;
pub mod handlers;
pub mod protocol;
