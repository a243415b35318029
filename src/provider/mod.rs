//! Client for the upstream text-generation provider.
//!
//! One prompt-completion call per request, no retry, no streaming. Failures
//! are surfaced as [`ProviderError`] and flattened to an error string at the
//! agent boundary.

mod gemini;

pub use gemini::GenerationClient;

use thiserror::Error;

/// Errors that can occur during a generation call.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("response contained no generated content")]
    NoContent,
}
