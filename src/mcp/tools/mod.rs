//! MCP tools for the workday counter.
//!
//! Each module implements one side of the surface:
//! - `query`: the shared request type, provider-response interpretation and
//!   the single query routine both tools run
//! - `count_workdays`: workday count with a per-date breakdown
//! - `workday_list`: flat list of the workdays in the range
//!
//! Both tools use the shared HTTP client and error handling.

pub mod count_workdays;
pub mod query;
pub mod workday_list;
