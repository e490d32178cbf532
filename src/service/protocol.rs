//! Service Wire Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) exposed by the
//! HTTP facade. These structures are serialized via JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- API Endpoints ---

/// Client endpoint for document submission (POST) and result reads (GET).
pub const ENDPOINT_DATA: &str = "/data";
/// Client endpoint for drawing a sample document from the corpus.
pub const ENDPOINT_GENERATE_TEXT: &str = "/text";

// --- Data Transfer Objects ---

/// Client request carrying one document to analyze.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetDataRequest {
    /// The raw document text, tokenized by whitespace on the server.
    pub data: String,
}

/// Acknowledgment for a document submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetDataResponse {
    /// Indicates whether the whole pipeline completed.
    pub success: bool,
    /// The failure description when the pipeline did not complete. Task
    /// failures are surfaced here instead of being logged and dropped.
    pub error: Option<String>,
}

/// Point-in-time view of the result store.
///
/// After at least one successful submission this holds exactly the eight fixed
/// keys: the five metrics, both pass timings, and the speedup ratio.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub entries: HashMap<String, String>,
}

/// Query parameters for text generation.
#[derive(Debug, Deserialize)]
pub struct GenerateTextParams {
    /// Requested length. Accepted for interface compatibility only: the
    /// returned sample is never trimmed or padded to it, so the response
    /// length is independent of this value.
    pub length: usize,
}

/// One sample document drawn from the fixed corpus.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTextResponse {
    pub text: String,
}
