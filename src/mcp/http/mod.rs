//! HTTP client and provider communication layer.
//!
//! This module handles all HTTP communication with the public holiday lookup
//! API, including request construction, tracing and response handling.

mod client;

// Re-export client's public API
pub use client::holiday_api_call;
