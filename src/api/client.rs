use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::error::{RegistryError, RegistryResult};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default CLI version (from Cargo.toml)
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the User-Agent string
fn build_user_agent() -> String {
    let version = std::env::var("ATELIER_VERSION").unwrap_or_else(|_| DEFAULT_VERSION.to_string());
    std::env::var("ATELIER_USER_AGENT").unwrap_or_else(|_| format!("atelier.cli/{}", version))
}

/// HTTP client for the design registry
pub struct ApiClient {
    client: Client,
    user_agent: String,
    session_id: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(user_agent: Option<String>) -> Self {
        let user_agent = user_agent.unwrap_or_else(build_user_agent);
        let session_id = Uuid::new_v4().to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            user_agent,
            session_id,
        }
    }

    fn build_url(base_url: &str, endpoint: &str) -> RegistryResult<Url> {
        let base = Url::parse(base_url).map_err(|err| RegistryError::InvalidUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        base.join(endpoint).map_err(|err| RegistryError::InvalidUrl {
            url: endpoint.to_string(),
            reason: err.to_string(),
        })
    }

    fn prepare(&self, method: Method, url: Url, access_token: &str) -> reqwest::RequestBuilder {
        let request_id = Uuid::new_v4().to_string();
        self.client
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("x-request-id", request_id)
            .header("x-request-session-id", &self.session_id)
            .header("x-auth-token", access_token)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> RegistryResult<reqwest::Response> {
        debug!("=== Registry Request ===");
        debug!("URL: {}", url);

        let response = request
            .send()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!("=== Registry Response ===");
        debug!("Status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RegistryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn execute_json<R>(&self, request: reqwest::RequestBuilder, url: &Url) -> RegistryResult<R>
    where
        R: for<'de> Deserialize<'de>,
    {
        let response = self.execute(request, url).await?;
        response
            .json()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.to_string(),
                source,
            })
    }

    async fn execute_text(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> RegistryResult<String> {
        let response = self.execute(request, url).await?;
        response
            .text()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.to_string(),
                source,
            })
    }

    /// Make an authenticated GET request and parse the JSON response
    pub(super) async fn get_json<R>(
        &self,
        base_url: &str,
        endpoint: &str,
        access_token: &str,
    ) -> RegistryResult<R>
    where
        R: for<'de> Deserialize<'de>,
    {
        let url = Self::build_url(base_url, endpoint)?;
        let request = self.prepare(Method::GET, url.clone(), access_token);
        self.execute_json(request, &url).await
    }

    /// Make an authenticated PATCH request and return the raw response body
    ///
    /// Callers that tolerate off-shape bodies parse the text themselves.
    pub(super) async fn patch_text<T>(
        &self,
        base_url: &str,
        endpoint: &str,
        access_token: &str,
        body: &T,
    ) -> RegistryResult<String>
    where
        T: Serialize,
    {
        let url = Self::build_url(base_url, endpoint)?;
        let request = self.prepare(Method::PATCH, url.clone(), access_token).json(body);
        self.execute_text(request, &url).await
    }
}
