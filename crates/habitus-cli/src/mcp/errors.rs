//! Error handling utilities for MCP server

use habitus_core::{Failure, FailureKind};
use rmcp::ErrorData;

/// Helper to convert engine failures to MCP errors
///
/// Rejected input is reported as invalid parameters so the client can correct
/// its call; store failures are internal errors.
pub fn to_mcp_error(failure: Failure) -> ErrorData {
    match failure.kind {
        FailureKind::Validation => ErrorData::invalid_params(failure.message, None),
        FailureKind::StoreRead | FailureKind::StoreWrite => {
            ErrorData::internal_error(failure.message, None)
        }
    }
}
