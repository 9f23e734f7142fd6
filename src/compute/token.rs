//! Service account token exchange
//!
//! Trades the service account key for a short-lived access token: signs a
//! JWT bearer grant with the key's RSA private key and posts it to the
//! key's token endpoint.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compute::model::credentials::ServiceAccountKey;

/// OAuth scope granting access to the compute API
pub const COMPUTE_SCOPE: &str = "https://www.googleapis.com/auth/compute";

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed grant
const GRANT_TTL_SECS: i64 = 3600;

/// Failure to mint an access token from the service account key.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("cannot sign token grant: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),

    #[error("token endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint returned {code}: {body}")]
    Endpoint { code: u16, body: String },
}

/// JWT bearer grant claims
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Mints access tokens for a service account.
pub struct TokenProvider {
    key: ServiceAccountKey,
    client: Client,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey, client: Client) -> Self {
        Self { key, client }
    }

    /// Fetch an access token for the given scope.
    ///
    /// One signed grant, one exchange. The token is neither cached nor
    /// refreshed: this program performs a single API call per execution,
    /// well within the grant's lifetime.
    pub async fn fetch(&self, scope: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.key.client_email,
            scope,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + GRANT_TTL_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();
        let signing_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        let assertion = jsonwebtoken::encode(&header, &claims, &signing_key)?;

        tracing::debug!(
            endpoint = %self.key.token_uri,
            issuer = %self.key.client_email,
            "exchanging token grant"
        );

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Endpoint {
                code: status.as_u16(),
                body,
            });
        }

        let data: TokenResponse = response.json().await?;
        Ok(data.access_token)
    }
}
