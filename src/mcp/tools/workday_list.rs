//! Tool listing the workdays in a range.
//!
//! The flat counterpart of `count_workdays`: the reply carries only the
//! ascending list of dates the provider classifies as workdays, plus a
//! message reporting how many were found.

use std::time::Duration;

use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use serde_json::{Value, json};
use tracing::warn;

use crate::mcp::tools::query::{self, DayStatus, WorkdayRangeRequest};

pub async fn workday_list(
    Parameters(args): Parameters<WorkdayRangeRequest>,
) -> Result<CallToolResult, ErrorData> {
    let result = match query::classified_range(&args, Some(Duration::from_secs(100))).await {
        Ok(statuses) => build_result(&statuses),
        Err(err) => {
            warn!(error = %err, "workday_list query failed");
            json!({ "message": query::failure_message(&err), "workday_list": [] })
        }
    };
    Ok(CallToolResult::structured(result))
}

fn build_result(statuses: &[(String, DayStatus)]) -> Value {
    let workday_list: Vec<&str> = statuses
        .iter()
        .filter(|(_, status)| status.is_workday())
        .map(|(date, _)| date.as_str())
        .collect();

    json!({
        "message": format!("found {} workday(s) in the range", workday_list.len()),
        "workday_list": workday_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(type_code: i64) -> DayStatus {
        DayStatus {
            type_code,
            name: if type_code == 0 { "工作日" } else { "周末" }.to_string(),
        }
    }

    #[test]
    fn lists_only_workdays_in_order() {
        let statuses = vec![
            ("2025-10-03".to_string(), status(0)),
            ("2025-10-04".to_string(), status(2)),
            ("2025-10-05".to_string(), status(2)),
            ("2025-10-06".to_string(), status(0)),
        ];
        let result = build_result(&statuses);

        assert_eq!(
            result["workday_list"],
            serde_json::json!(["2025-10-03", "2025-10-06"])
        );
        assert!(
            result["message"]
                .as_str()
                .unwrap_or_default()
                .contains("2 workday(s)")
        );
    }

    #[test]
    fn all_holidays_yield_empty_list() {
        let statuses = vec![
            ("2025-10-01".to_string(), status(1)),
            ("2025-10-02".to_string(), status(1)),
        ];
        let result = build_result(&statuses);

        assert_eq!(result["workday_list"], serde_json::json!([]));
        assert!(
            result["message"]
                .as_str()
                .unwrap_or_default()
                .contains("0 workday(s)")
        );
    }

    #[tokio::test]
    async fn reversed_range_returns_structured_empty_list() {
        let args = WorkdayRangeRequest {
            start_date: "2025-10-10".to_string(),
            end_date: "2025-10-01".to_string(),
        };
        let result = workday_list(Parameters(args))
            .await
            .expect("tool must not raise");

        let payload = result.structured_content.expect("structured payload");
        assert_eq!(payload["workday_list"], serde_json::json!([]));
        assert!(
            payload["message"]
                .as_str()
                .unwrap_or_default()
                .contains("parameter error")
        );
    }
}
