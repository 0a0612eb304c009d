//! Bearer token sources for Azure Resource Manager.

use super::DirectoryError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Management API scope requested for every token.
pub const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Supplies bearer tokens for management calls.
#[async_trait]
pub trait TokenCredential: Send + Sync + 'static {
    async fn token(&self) -> Result<String, DirectoryError>;
}

/// A fixed, externally obtained token.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenCredential for StaticToken {
    async fn token(&self) -> Result<String, DirectoryError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Service principal (OAuth2 client credentials) token source.
pub struct ClientSecretCredential {
    token_url: String,
    client_id: String,
    client_secret: String,
    client: Arc<Client>,
    cache: Mutex<Option<CachedToken>>,
}

impl ClientSecretCredential {
    pub fn new(
        authority_host: &str,
        tenant_id: &str,
        client_id: String,
        client_secret: String,
        client: Arc<Client>,
    ) -> Self {
        Self {
            token_url: format!(
                "{}/{}/oauth2/v2.0/token",
                authority_host.trim_end_matches('/'),
                tenant_id
            ),
            client_id,
            client_secret,
            client,
            cache: Mutex::new(None),
        }
    }

    async fn request_token(&self) -> Result<CachedToken, DirectoryError> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", MANAGEMENT_SCOPE),
            ])
            .send()
            .await
            .map_err(|e| DirectoryError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::Auth(format!("malformed token response: {}", e)))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN);
        tracing::debug!(expires_in = token.expires_in, "Acquired management token");

        Ok(CachedToken {
            value: token.access_token,
            refresh_at: Instant::now() + lifetime,
        })
    }
}

#[async_trait]
impl TokenCredential for ClientSecretCredential {
    async fn token(&self) -> Result<String, DirectoryError> {
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if Instant::now() < cached.refresh_at {
                return Ok(cached.value.clone());
            }
        }

        let fresh = self.request_token().await?;
        let value = fresh.value.clone();
        *cache = Some(fresh);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_static_token() {
        let credential = StaticToken::new("abc");
        assert_eq!(credential.token().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_client_secret_token_is_cached() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/tenant-1/oauth2/v2.0/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
                Matcher::UrlEncoded("client_id".into(), "app-1".into()),
                Matcher::UrlEncoded("scope".into(), MANAGEMENT_SCOPE.into()),
            ]))
            .with_status(200)
            .with_body(r#"{"access_token":"tok-1","expires_in":3600,"token_type":"Bearer"}"#)
            .expect(1)
            .create_async()
            .await;

        let credential = ClientSecretCredential::new(
            &server.url(),
            "tenant-1",
            "app-1".to_string(),
            "secret".to_string(),
            Arc::new(Client::new()),
        );

        assert_eq!(credential.token().await.unwrap(), "tok-1");
        assert_eq!(credential.token().await.unwrap(), "tok-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_client_secret_rejected() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/tenant-1/oauth2/v2.0/token")
            .with_status(401)
            .with_body(r#"{"error":"invalid_client"}"#)
            .create_async()
            .await;

        let credential = ClientSecretCredential::new(
            &server.url(),
            "tenant-1",
            "app-1".to_string(),
            "wrong".to_string(),
            Arc::new(Client::new()),
        );

        let result = credential.token().await;
        assert!(matches!(result, Err(DirectoryError::Auth(ref m)) if m.contains("401")));
    }
}
