//! Error types for the holiday/workday MCP implementation.
//!
//! This module contains the custom error type shared by the date-range
//! expander, the HTTP client and the tools. It provides:
//! - `WorkdayError`: The main error enum that covers all possible error cases
//! - Conversions from the HTTP client error types (`reqwest`, middleware)
//!
//! None of these variants ever surfaces as an MCP protocol error: the tool
//! layer folds every one of them into the `message` field of an otherwise
//! normal structured reply.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkdayError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("start date {start} is later than end date {end}")]
    InvalidRange { start: String, end: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("holiday service error: {0}")]
    Provider(String),

    #[error("internal error: {0}")]
    Internal(String),
}
