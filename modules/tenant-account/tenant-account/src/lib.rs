//! Tenant Account Module
//!
//! Manages the account aggregate of a tenant: display settings and branding,
//! third-party integrations, webhook subscriptions and API keys. Every operation
//! loads the whole tenant document, applies one mutation and writes it back.
//!
//! ## Public API
//!
//! The public API is defined in the `tenant-account-sdk` crate and re-exported here:
//! - `TenantAccountApi` - trait for in-process consumers
//! - `Tenant`, `TenantSettingsUpdate`, `IntegrationUpsert`, ... - data models
//! - `TenantAccountError` - error types
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use tenant_account_sdk::{
    ApiKey, CallerContext, Integration, IntegrationUpsert, NewApiKey, NewWebhook, Tenant,
    TenantAccountApi, TenantAccountError, TenantSettingsUpdate, Webhook,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::TenantAccountModule;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests and the server binary; use the SDK types for stable APIs.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
