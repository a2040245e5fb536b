//! Caller identity plumbing.
//!
//! The upstream authentication layer forwards the authenticated tenant in a
//! request header. [`resolve_caller`] parses it into a [`CallerContext`]
//! extension and [`Caller`] hands that to handlers. No authentication happens here.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderName;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tenant_account_sdk::CallerContext;
use uuid::Uuid;

use super::error::unauthenticated_problem;
use super::problem::Problem;

/// Header carrying the caller's tenant id unless configured otherwise.
pub const DEFAULT_TENANT_HEADER: &str = "x-tenant-id";

/// Middleware: attach a [`CallerContext`] when the tenant header holds a UUID.
///
/// Requests without a usable header pass through untouched and are rejected
/// by the [`Caller`] extractor on routes that need an identity.
pub async fn resolve_caller(
    State(header): State<HeaderName>,
    mut req: Request,
    next: Next,
) -> Response {
    let tenant_id = req
        .headers()
        .get(&header)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok());

    match tenant_id {
        Some(id) => {
            req.extensions_mut().insert(CallerContext::new(id));
        }
        None => tracing::debug!(header = %header, "No valid caller tenant header"),
    }

    next.run(req).await
}

/// Extractor for the caller identity established by [`resolve_caller`].
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub CallerContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerContext>()
            .copied()
            .map(Caller)
            .ok_or_else(|| unauthenticated_problem(parts.uri.path()))
    }
}
