//! HTTP client configuration and the shared provider call.
//!
//! This module provides:
//! - Environment-based configuration of the provider endpoint
//! - A shared HTTP client with a bounded per-call timeout
//! - OpenTelemetry integration for request tracing
//! - The batch lookup call used by both tools

use std::{env, sync::LazyLock, time::Duration};

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use tracing::Span;

use crate::mcp::error::WorkdayError;

// Batch endpoint of the public holiday lookup service. Overridable so tests
// and deployments behind a mirror can point elsewhere.
pub static HOLIDAY_API_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("HOLIDAY_API_URL")
        .unwrap_or_else(|_| "https://timor.tech/api/holiday/batch".to_string())
});

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Custom Tracing Backend for Reqwest to integrate with OpenTelemetry
// Note: This struct is used via TracingMiddleware<CustomTracing>, but Rust can't
// detect this usage statically, hence the dead_code attribute.
#[allow(dead_code)]
struct CustomTracing;

impl ReqwestOtelSpanBackend for CustomTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "holiday-api-request",
            req,
            request_headers = ?req.headers(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Perform the batch holiday lookup for every date in `dates`.
///
/// The provider takes the batch as repeated `d` query parameters plus a
/// fixed `type=Y` flag requesting year-aware day classification. Each call
/// issues exactly one GET with a bounded timeout; there are no retries.
///
/// # Arguments
/// * `dates` - Every `YYYY-MM-DD` date to classify
/// * `set_timeout` - Custom timeout duration; defaults to 10 seconds
///
/// # Errors
/// Returns `WorkdayError::Http` / `WorkdayError::HttpMiddleware` when the
/// request cannot complete (connect failure, timeout, non-2xx status) or
/// the body is not valid JSON.
pub async fn holiday_api_call(
    dates: &[String],
    set_timeout: Option<Duration>,
) -> Result<serde_json::Value, WorkdayError> {
    let client = ClientBuilder::new(
        reqwest::Client::builder()
            .timeout(set_timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(USER_AGENT)
            .build()?,
    )
    .with(TracingMiddleware::<CustomTracing>::new())
    .build();

    // One `d` key per date; the provider's batch endpoint reads repeated keys.
    let mut params: Vec<(&str, &str)> = Vec::with_capacity(dates.len() + 1);
    params.push(("type", "Y"));
    params.extend(dates.iter().map(|date| ("d", date.as_str())));

    let response = client
        .get(HOLIDAY_API_URL.as_str())
        .query(&params)
        .send()
        .await?
        .error_for_status()?;

    let json_value = response.json().await?;
    Ok(json_value)
}
