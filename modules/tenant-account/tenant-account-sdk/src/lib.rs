//! Tenant Account SDK
//!
//! This crate provides the public API for the `tenant_account` module:
//! - `TenantAccountApi` trait
//! - Model types for the tenant aggregate and its sub-collections
//! - Error type (`TenantAccountError`)
//! - `CallerContext` carrying the trusted tenant identity of a request
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_account_sdk::TenantAccountApi;
//!
//! let tenant = client.get_current(ctx.tenant_id()).await?;
//! let keys = client.generate_api_key(ctx.tenant_id(), NewApiKey::default()).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod context;
pub mod errors;
pub mod models;

pub use api::TenantAccountApi;
pub use context::CallerContext;
pub use errors::TenantAccountError;
pub use models::{
    ApiKey, Branding, BrandingPatch, FULL_ACCESS_SCOPE, Integration, IntegrationUpsert, NewApiKey,
    NewWebhook, SettingsPatch, Tenant, TenantSettings, TenantSettingsUpdate, Webhook,
};
