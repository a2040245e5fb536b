//! Secret token generation for API keys and webhook signing secrets.
//!
//! Tokens are hex-encoded bytes read from the operating system CSPRNG.

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::error::DomainError;

/// Prefix of every generated API key.
pub const API_KEY_PREFIX: &str = "sk_";

/// Prefix of every generated webhook secret.
pub const WEBHOOK_SECRET_PREFIX: &str = "whsec_";

const API_KEY_BYTES: usize = 16;
const WEBHOOK_SECRET_BYTES: usize = 32;

/// Generate a new API key: `sk_` followed by 32 hex characters.
///
/// # Errors
/// Returns `DomainError::TokenGeneration` if the OS entropy source fails.
pub fn generate_api_key() -> Result<String, DomainError> {
    Ok(format!("{API_KEY_PREFIX}{}", random_hex(API_KEY_BYTES)?))
}

/// Generate a new webhook secret: `whsec_` followed by 64 hex characters.
///
/// # Errors
/// Returns `DomainError::TokenGeneration` if the OS entropy source fails.
pub fn generate_webhook_secret() -> Result<String, DomainError> {
    Ok(format!(
        "{WEBHOOK_SECRET_PREFIX}{}",
        random_hex(WEBHOOK_SECRET_BYTES)?
    ))
}

fn random_hex(len: usize) -> Result<String, DomainError> {
    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| DomainError::token_generation(e.to_string()))?;
    Ok(hex::encode(bytes))
}
