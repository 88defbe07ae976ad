//! Tool reporting how many days in a range are workdays.
//!
//! This module answers with the total workday count plus a per-date
//! breakdown carrying:
//! - The provider's day type code (`0` workday, holiday/weekend otherwise)
//! - The provider's display name for the day
//! - A plain workday flag
//!
//! Failures never escape as protocol errors; the reply's `message` carries
//! the error text and the count drops to zero.

use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use serde_json::{Value, json};
use tracing::warn;

use crate::mcp::tools::query::{self, DayStatus, WorkdayRangeRequest};

pub async fn count_workdays(
    Parameters(args): Parameters<WorkdayRangeRequest>,
) -> Result<CallToolResult, ErrorData> {
    let result = match query::classified_range(&args, None).await {
        Ok(statuses) => build_result(&args, &statuses),
        Err(err) => {
            warn!(error = %err, "count_workdays query failed");
            json!({ "message": query::failure_message(&err), "workday_count": 0 })
        }
    };
    Ok(CallToolResult::structured(result))
}

fn build_result(args: &WorkdayRangeRequest, statuses: &[(String, DayStatus)]) -> Value {
    let workday_count = statuses
        .iter()
        .filter(|(_, status)| status.is_workday())
        .count();

    let date_details: serde_json::Map<String, Value> = statuses
        .iter()
        .map(|(date, status)| {
            (
                date.clone(),
                json!({
                    "type": status.type_code,
                    "name": status.name,
                    "is_workday": status.is_workday(),
                }),
            )
        })
        .collect();

    json!({
        "message": "query successful",
        "start_date": args.start_date,
        "end_date": args.end_date,
        "workday_count": workday_count,
        "date_details": date_details,
    })
}
