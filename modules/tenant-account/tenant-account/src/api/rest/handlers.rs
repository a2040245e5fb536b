use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, OriginalUri, Path};
use axum::http::Uri;

use crate::domain::service::Service;

use super::caller::Caller;
use super::dto::{
    AddWebhookRequest, ApiKeyDto, GenerateApiKeyRequest, IntegrationDto, TenantDto,
    UpdateSettingsRequest, UpsertIntegrationRequest, WebhookDto,
};
use super::error::{domain_error_to_problem, json_rejection_to_problem};
use super::problem::Problem;

pub type ApiResult<T> = Result<T, Problem>;

fn body<T>(payload: Result<Json<T>, JsonRejection>, uri: &Uri) -> ApiResult<T> {
    payload
        .map(|Json(v)| v)
        .map_err(|rej| json_rejection_to_problem(&rej, uri.path()))
}

/// Get the caller's tenant. API key values are never included.
#[utoipa::path(
    get,
    path = "/tenant-account/v1/tenant",
    tag = "Tenant Account",
    responses(
        (status = 200, description = "Current tenant", body = TenantDto),
        (status = 401, description = "Missing caller identity", body = Problem),
        (status = 404, description = "Tenant not found", body = Problem),
        (status = 500, description = "Operation failed", body = Problem),
    ),
    security(("tenantHeader" = []))
)]
pub async fn get_current(
    Caller(ctx): Caller,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Json<TenantDto>> {
    let tenant = svc
        .get_current(ctx.tenant_id())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(tenant.into()))
}

#[utoipa::path(
    put,
    path = "/tenant-account/v1/tenant/settings",
    tag = "Tenant Account",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Updated tenant", body = TenantDto),
        (status = 401, description = "Missing caller identity", body = Problem),
        (status = 500, description = "Operation failed", body = Problem),
    ),
    security(("tenantHeader" = []))
)]
pub async fn update_settings(
    Caller(ctx): Caller,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> ApiResult<Json<TenantDto>> {
    let req = body(payload, &uri)?;
    let tenant = svc
        .update_settings(ctx.tenant_id(), req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(tenant.into()))
}

#[utoipa::path(
    post,
    path = "/tenant-account/v1/tenant/integrations",
    tag = "Tenant Account",
    request_body = UpsertIntegrationRequest,
    responses(
        (status = 200, description = "All integrations after the upsert", body = [IntegrationDto]),
        (status = 401, description = "Missing caller identity", body = Problem),
        (status = 500, description = "Operation failed", body = Problem),
    ),
    security(("tenantHeader" = []))
)]
pub async fn upsert_integration(
    Caller(ctx): Caller,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<UpsertIntegrationRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<IntegrationDto>>> {
    let req = body(payload, &uri)?;
    let integrations = svc
        .upsert_integration(ctx.tenant_id(), req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(integrations.into_iter().map(Into::into).collect()))
}

/// Subscribe a webhook. The response lists every webhook with its secret.
#[utoipa::path(
    post,
    path = "/tenant-account/v1/tenant/webhooks",
    tag = "Tenant Account",
    request_body = AddWebhookRequest,
    responses(
        (status = 200, description = "All webhooks after the insert", body = [WebhookDto]),
        (status = 401, description = "Missing caller identity", body = Problem),
        (status = 500, description = "Operation failed", body = Problem),
    ),
    security(("tenantHeader" = []))
)]
pub async fn add_webhook(
    Caller(ctx): Caller,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<AddWebhookRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<WebhookDto>>> {
    let req = body(payload, &uri)?;
    let webhooks = svc
        .add_webhook(ctx.tenant_id(), req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(webhooks.into_iter().map(Into::into).collect()))
}

/// Remove a webhook by id. Unknown ids leave the list unchanged.
#[utoipa::path(
    delete,
    path = "/tenant-account/v1/tenant/webhooks/{id}",
    tag = "Tenant Account",
    params(("id" = String, Path, description = "Webhook id")),
    responses(
        (status = 200, description = "Remaining webhooks", body = [WebhookDto]),
        (status = 401, description = "Missing caller identity", body = Problem),
        (status = 500, description = "Operation failed", body = Problem),
    ),
    security(("tenantHeader" = []))
)]
pub async fn remove_webhook(
    Caller(ctx): Caller,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<WebhookDto>>> {
    let webhooks = svc
        .remove_webhook(ctx.tenant_id(), &id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(webhooks.into_iter().map(Into::into).collect()))
}

/// Mint an API key. The response lists every key with its value.
#[utoipa::path(
    post,
    path = "/tenant-account/v1/tenant/api-keys",
    tag = "Tenant Account",
    request_body(content = GenerateApiKeyRequest, description = "Optional key name"),
    responses(
        (status = 200, description = "All API keys after the insert", body = [ApiKeyDto]),
        (status = 401, description = "Missing caller identity", body = Problem),
        (status = 500, description = "Operation failed", body = Problem),
    ),
    security(("tenantHeader" = []))
)]
pub async fn generate_api_key(
    Caller(ctx): Caller,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    raw: Bytes,
) -> ApiResult<Json<Vec<ApiKeyDto>>> {
    // An empty body, whatever its content type, means "use the default name".
    let req = if raw.is_empty() {
        GenerateApiKeyRequest::default()
    } else {
        body(Json::from_bytes(&raw), &uri)?
    };
    let keys = svc
        .generate_api_key(ctx.tenant_id(), req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(keys.into_iter().map(Into::into).collect()))
}
