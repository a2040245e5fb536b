use std::sync::Arc;

use axum::http::HeaderName;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Router};

use crate::domain::service::Service;

use super::{caller, handlers};

/// Mount point of every tenant-account route.
pub const BASE_PATH: &str = "/tenant-account/v1";

/// Build the tenant-account router.
///
/// `tenant_header` names the request header the upstream authentication
/// layer uses to forward the caller's tenant id.
pub fn register_routes(router: Router, service: Arc<Service>, tenant_header: HeaderName) -> Router {
    let api = Router::new()
        .route("/tenant", get(handlers::get_current))
        .route("/tenant/settings", put(handlers::update_settings))
        .route("/tenant/integrations", post(handlers::upsert_integration))
        .route("/tenant/webhooks", post(handlers::add_webhook))
        .route("/tenant/webhooks/{id}", delete(handlers::remove_webhook))
        .route("/tenant/api-keys", post(handlers::generate_api_key))
        .layer(axum::middleware::from_fn_with_state(
            tenant_header,
            caller::resolve_caller,
        ))
        .layer(Extension(service));

    router.nest(BASE_PATH, api)
}
