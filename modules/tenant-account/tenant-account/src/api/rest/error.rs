use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::domain::error::DomainError;

use super::problem::Problem;

pub const CODE_TENANT_NOT_FOUND: &str = "TENANT_NOT_FOUND";
pub const CODE_OPERATION_FAILED: &str = "TENANT_ACCOUNT_OPERATION_FAILED";
pub const CODE_UNAUTHENTICATED: &str = "TENANT_ACCOUNT_UNAUTHENTICATED";

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

/// Map a domain error to an RFC 9457 Problem.
///
/// Clients only ever see the two public kinds: a missing tenant (404) or a
/// failed operation (500) carrying the underlying message. This mirrors the
/// `DomainError -> TenantAccountError` conversion used by the local client.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = if e.is_not_found() {
        tracing::debug!(error = %e, "Tenant not found");
        Problem::new(StatusCode::NOT_FOUND, "Tenant not found", e.to_string())
            .with_code(CODE_TENANT_NOT_FOUND)
    } else {
        tracing::error!(error = ?e, "Tenant account operation failed");
        Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Operation failed",
            e.to_string(),
        )
        .with_code(CODE_OPERATION_FAILED)
    };

    problem
        .with_instance(instance)
        .with_trace_id(current_trace_id())
}

/// Request bodies that fail to parse are failed operations, like any other input fault.
pub fn json_rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    tracing::error!(error = %rejection, "Rejected request body");
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Operation failed",
        rejection.body_text(),
    )
    .with_code(CODE_OPERATION_FAILED)
    .with_instance(instance)
    .with_trace_id(current_trace_id())
}

pub fn unauthenticated_problem(instance: &str) -> Problem {
    Problem::new(
        StatusCode::UNAUTHORIZED,
        "Unauthorized",
        "Caller tenant identity is missing or malformed",
    )
    .with_code(CODE_UNAUTHENTICATED)
    .with_instance(instance)
    .with_trace_id(current_trace_id())
}
