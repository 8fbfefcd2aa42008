use std::sync::{Arc, OnceLock};

use anyhow::Context;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by the auth service's access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(rename = "tenantId", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub exp: i64,
}

/// Parses a PEM public key. Env files often carry the PEM on one line with
/// literal `\n` sequences.
pub fn decoding_key_from_pem(raw: &str) -> anyhow::Result<DecodingKey> {
    let pem = raw.trim().replace("\\n", "\n");
    DecodingKey::from_rsa_pem(pem.as_bytes()).context("JWT_PUBLIC_KEY is not a valid RSA public key")
}

pub fn verify_session_token(token: &str, key: &DecodingKey) -> anyhow::Result<SessionClaims> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(token, key, &validation)?;
    Ok(data.claims)
}

/// Lazily parsed verification key, shared by every request once loaded.
#[derive(Clone, Default)]
pub struct PublicKeyCache {
    pem: Option<Arc<str>>,
    key: Arc<OnceLock<DecodingKey>>,
}

impl PublicKeyCache {
    pub fn new(pem: Option<String>) -> Self {
        Self {
            pem: pem.map(Arc::from),
            key: Arc::new(OnceLock::new()),
        }
    }

    pub fn get(&self) -> Result<DecodingKey, AppError> {
        if let Some(key) = self.key.get() {
            return Ok(key.clone());
        }
        let pem = self
            .pem
            .as_deref()
            .ok_or(AppError::Configuration("JWT_PUBLIC_KEY"))?;
        let key = decoding_key_from_pem(pem)?;
        Ok(self.key.get_or_init(|| key).clone())
    }
}
