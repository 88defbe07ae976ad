//! The shared workday query routine.
//!
//! Both exposed tools answer the same underlying question over the same
//! provider call; they differ only in the shape of the reply. This module
//! holds the shared request type, the interpretation of the provider's
//! per-date entries and the error-to-message mapping, so the two
//! response-shaping paths cannot drift apart.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::mcp::{date_range, error::WorkdayError, http::holiday_api_call};

/// Day type code the provider uses for a regular workday.
pub const WORKDAY_TYPE: i64 = 0;

/// Sentinel for dates the provider did not classify.
pub const UNKNOWN_TYPE: i64 = -1;

const UNKNOWN_NAME: &str = "unknown";

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct WorkdayRangeRequest {
    #[schemars(description = "Start of the date range in YYYY-MM-DD format, e.g. 2025-10-01")]
    pub start_date: String,
    #[schemars(
        description = "End of the date range (inclusive) in YYYY-MM-DD format, e.g. 2025-10-07"
    )]
    pub end_date: String,
}

/// Classification of a single day, as reported by the provider.
#[derive(Debug)]
pub struct DayStatus {
    pub type_code: i64,
    pub name: String,
}

impl DayStatus {
    pub fn is_workday(&self) -> bool {
        self.type_code == WORKDAY_TYPE
    }
}

/// Expand the requested range and classify every day in it.
///
/// This is the whole pipeline shared by both tools: it expands the range,
/// performs the single batch call and interprets each day of the reply.
/// The result keeps the expanded order, one entry per requested date.
pub async fn classified_range(
    args: &WorkdayRangeRequest,
    set_timeout: Option<Duration>,
) -> Result<Vec<(String, DayStatus)>, WorkdayError> {
    let dates = date_range::expand(&args.start_date, &args.end_date)?;
    if dates.is_empty() {
        // expand guarantees a non-empty range on success
        return Err(WorkdayError::Internal(
            "expanded date range is empty".to_string(),
        ));
    }

    let payload = holiday_api_call(&dates, set_timeout).await?;
    let statuses = interpret_response(&dates, &payload)?;
    debug!(
        days = statuses.len(),
        workdays = statuses.iter().filter(|(_, s)| s.is_workday()).count(),
        "classified date range"
    );
    Ok(statuses)
}

/// Map a provider payload onto the requested dates.
///
/// A non-zero top-level `code` is a provider-side failure and carries the
/// provider's own message. Dates missing from the `type` map are kept with
/// the unknown sentinel; the provider does not guarantee an entry for every
/// requested date.
fn interpret_response(
    dates: &[String],
    payload: &Value,
) -> Result<Vec<(String, DayStatus)>, WorkdayError> {
    if payload["code"].as_i64() != Some(0) {
        let message = payload["message"].as_str().unwrap_or("unknown error");
        return Err(WorkdayError::Provider(message.to_string()));
    }

    let day_types = &payload["type"];
    Ok(dates
        .iter()
        .map(|date| {
            let info = &day_types[date.as_str()];
            let status = DayStatus {
                type_code: info["type"].as_i64().unwrap_or(UNKNOWN_TYPE),
                name: info["name"].as_str().unwrap_or(UNKNOWN_NAME).to_string(),
            };
            (date.clone(), status)
        })
        .collect())
}

/// The message a tool puts in its reply when the query fails.
///
/// Every failure is reported this way instead of as an MCP protocol error;
/// callers distinguish success from failure by the reply contents.
pub fn failure_message(err: &WorkdayError) -> String {
    match err {
        WorkdayError::InvalidFormat(_) | WorkdayError::InvalidRange { .. } => {
            format!("parameter error: {err}")
        }
        WorkdayError::Http(_) | WorkdayError::HttpMiddleware(_) => {
            format!("holiday service call failed: {err}")
        }
        WorkdayError::Provider(_) | WorkdayError::Internal(_) => err.to_string(),
    }
}
