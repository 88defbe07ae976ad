//! Holiday/workday counter Model Context Protocol implementation.
//!
//! This crate provides MCP tools that classify a calendar date range into
//! workdays and holidays/weekends using a public holiday lookup API.
//! The implementation is organized into:
//!
//! - `error`: Error types and conversions
//! - `date_range`: Expansion of a date range into its individual days
//! - `http`: HTTP client and provider communication
//! - `tools`: The two exposed workday tools
//!
//! The main entry point is the `HolidayWorkdayFactory` which provides the MCP
//! server implementation and manages both tools.

pub mod date_range;
pub mod error;
pub mod http;
pub mod tools;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, InitializeRequestParam, InitializeResult, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::info;

// Tool modules and the request type they share
use crate::mcp::tools::{count_workdays, query::WorkdayRangeRequest, workday_list};

#[derive(Clone)]
pub struct HolidayWorkdayFactory {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HolidayWorkdayFactory {
    pub fn new() -> Self {
        // Initialize with tool router loaded from macro-generated code
        Self {
            tool_router: Self::tool_router(),
        }
    }

    // Thin delegating methods so the `tool_router` proc-macro (which scans
    // this impl block) can discover and register the tools. These simply
    // forward to the actual implementations in `mcp::tools::*` so the
    // implementation remains modular.

    #[tool(
        description = "Count the workdays between start_date and end_date (both inclusive, YYYY-MM-DD), with a per-date breakdown of workdays, weekends and public holidays."
    )]
    async fn count_workdays(
        &self,
        params: Parameters<WorkdayRangeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        count_workdays::count_workdays(params).await
    }

    #[tool(
        description = "List every workday between start_date and end_date (both inclusive, YYYY-MM-DD), skipping weekends and public holidays."
    )]
    async fn workday_list(
        &self,
        params: Parameters<WorkdayRangeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        workday_list::workday_list(params).await
    }
}

#[tool_handler]
impl ServerHandler for HolidayWorkdayFactory {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Workday counter MCP server: given a start date and an end date, reports which days in the range are workdays according to a public holiday calendar"
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }
}
