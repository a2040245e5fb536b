use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::caller::DEFAULT_TENANT_HEADER;
use super::{dto, handlers, problem};

/// Registers the header-based caller identity scheme under the default header.
struct TenantHeaderAddon;

impl Modify for TenantHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        set_tenant_header(openapi, DEFAULT_TENANT_HEADER);
    }
}

/// Point the `tenantHeader` security scheme at `header`.
pub fn set_tenant_header(openapi: &mut utoipa::openapi::OpenApi, header: &str) {
    let value = ApiKeyValue::with_description(
        header,
        "Tenant id forwarded by the upstream authentication layer",
    );
    let components = openapi.components.get_or_insert_with(Default::default);
    components.add_security_scheme(
        "tenantHeader",
        SecurityScheme::ApiKey(ApiKey::Header(value)),
    );
}

/// OpenAPI document for the tenant-account REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tenant Account API",
        description = "Tenant settings, branding, integrations, webhooks and API keys"
    ),
    paths(
        handlers::get_current,
        handlers::update_settings,
        handlers::upsert_integration,
        handlers::add_webhook,
        handlers::remove_webhook,
        handlers::generate_api_key,
    ),
    components(schemas(
        dto::TenantDto,
        dto::TenantSettingsDto,
        dto::BrandingDto,
        dto::IntegrationDto,
        dto::WebhookDto,
        dto::ApiKeyDto,
        dto::UpdateSettingsRequest,
        dto::SettingsPatchDto,
        dto::BrandingPatchDto,
        dto::UpsertIntegrationRequest,
        dto::AddWebhookRequest,
        dto::GenerateApiKeyRequest,
        problem::Problem,
    )),
    modifiers(&TenantHeaderAddon),
    tags((name = "Tenant Account", description = "Account aggregate of the calling tenant"))
)]
pub struct TenantAccountApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = TenantAccountApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/tenant-account/v1/tenant"));
        assert!(paths.contains(&"/tenant-account/v1/tenant/settings"));
        assert!(paths.contains(&"/tenant-account/v1/tenant/integrations"));
        assert!(paths.contains(&"/tenant-account/v1/tenant/webhooks"));
        assert!(paths.contains(&"/tenant-account/v1/tenant/webhooks/{id}"));
        assert!(paths.contains(&"/tenant-account/v1/tenant/api-keys"));
    }

    #[test]
    fn document_declares_problem_schema_and_tenant_header() {
        let json = serde_json::to_value(TenantAccountApiDoc::openapi()).unwrap();

        assert!(json["components"]["schemas"]["Problem"].is_object());
        assert_eq!(
            json["components"]["securitySchemes"]["tenantHeader"]["name"],
            DEFAULT_TENANT_HEADER
        );
    }

    #[test]
    fn tenant_header_scheme_follows_configured_header() {
        let mut doc = TenantAccountApiDoc::openapi();
        set_tenant_header(&mut doc, "x-org-id");

        let json = serde_json::to_value(doc).unwrap();
        assert_eq!(
            json["components"]["securitySchemes"]["tenantHeader"]["name"],
            "x-org-id"
        );
    }
}
