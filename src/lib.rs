//! Docsmith - docstring generation service.
//!
//! Accepts a Python snippet over a small web API, asks a text-generation
//! model to insert Google-style docstrings, and post-processes the raw
//! output before returning it: plain-text extraction from heterogeneous
//! response shapes, syntax validation, sentinel-marker cleanup, and
//! docstring indentation fixes.
//!
//! # Architecture
//!
//! - `postprocess`: pure text transforms applied to raw generated output
//! - `provider`: client for the upstream text-generation API
//! - `agent`: prompt construction and the single call-and-transform step
//! - `server`: axum HTTP layer and static frontend serving
//! - `config`: environment-driven configuration

pub mod agent;
pub mod config;
pub mod postprocess;
pub mod provider;
pub mod server;

pub use agent::{is_error_output, DocstringAgent, EMPTY_INPUT_ERROR, ERROR_PREFIX};
pub use config::{Config, ConfigError};
pub use postprocess::{
    clean_output, extract_text, fix_docstring_indentation, is_valid_python, process,
    ResponseValue, SYNTAX_ERROR_MARKER,
};
pub use provider::{GenerationClient, ProviderError};
pub use server::{router, GenerateRequest, GenerateResponse};
