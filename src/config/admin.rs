//! Administrative endpoint configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

const MIN_TOKEN_LEN: usize = 16;

/// Settings for operator-only endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Bearer token for `/admin/*`; the endpoints are disabled when unset
    pub admin_token: Option<Secret<String>>,
}

impl AdminConfig {
    pub fn token(&self) -> Option<&Secret<String>> {
        self.admin_token.as_ref()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.admin_token {
            Some(token) if token.expose_secret().len() < MIN_TOKEN_LEN => {
                Err(ValidationError::AdminTokenTooShort(MIN_TOKEN_LEN))
            }
            _ => Ok(()),
        }
    }
}
