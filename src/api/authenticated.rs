//! Authenticated API client with stored credentials.
//!
//! This module provides `AuthenticatedClient`, a wrapper around `ApiClient` that
//! stores the registry URL and access token for the lifetime of the process.
//!
//! Benefits:
//! - No need to pass credentials to every API call
//! - HTTP/2 connection reuse (same Client instance = connection pooling)
//! - Cleaner API signatures

use std::sync::Arc;

use super::client::ApiClient;
use super::error::RegistryResult;
use super::types::{MaterialBatch, Site, SyncResponse, UserProfile};

/// Authenticated API client with stored credentials.
///
/// Created once per command after token resolution, then used for all
/// registry calls the command makes.
#[derive(Clone)]
pub struct AuthenticatedClient {
    inner: Arc<ApiClient>,
    base_url: String,
    access_token: String,
}

impl AuthenticatedClient {
    /// Create a new authenticated client.
    ///
    /// # Arguments
    /// * `base_url` - Registry base URL
    /// * `access_token` - Access token from login or environment
    pub fn new(base_url: String, access_token: String) -> Self {
        Self {
            inner: Arc::new(ApiClient::new(None)),
            base_url,
            access_token,
        }
    }

    /// Create from an existing ApiClient (for testing or custom configuration).
    pub fn from_client(client: ApiClient, base_url: String, access_token: String) -> Self {
        Self {
            inner: Arc::new(client),
            base_url,
            access_token,
        }
    }

    /// Get the registry base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    // ========== API Methods ==========

    /// Upload one batch of materials to a site.
    pub async fn sync_materials(
        &self,
        site_id: &str,
        batch: &MaterialBatch,
    ) -> RegistryResult<SyncResponse> {
        self.inner
            .sync_materials(&self.base_url, &self.access_token, site_id, batch)
            .await
    }

    /// Fetch a site by id. `Ok(None)` when the registry does not know it.
    pub async fn fetch_site(&self, site_id: &str) -> RegistryResult<Option<Site>> {
        self.inner
            .fetch_site(&self.base_url, &self.access_token, site_id)
            .await
    }

    /// Fetch the profile of the token's owner.
    pub async fn fetch_profile(&self) -> RegistryResult<UserProfile> {
        self.inner
            .fetch_profile(&self.base_url, &self.access_token)
            .await
    }
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_client_creation() {
        let client = AuthenticatedClient::new(
            "https://atelier.design".to_string(),
            "test-token".to_string(),
        );

        assert_eq!(client.base_url(), "https://atelier.design");
        assert_eq!(client.access_token(), "test-token");
    }

    #[test]
    fn test_from_client_keeps_credentials() {
        let client = AuthenticatedClient::from_client(
            ApiClient::new(Some("custom-agent/1.0".to_string())),
            "https://registry.example.com".to_string(),
            "tok".to_string(),
        );

        assert_eq!(client.base_url(), "https://registry.example.com");
        assert_eq!(client.access_token(), "tok");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = AuthenticatedClient::new(
            "https://atelier.design".to_string(),
            "secret-token-123".to_string(),
        );

        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("secret-token-123"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
