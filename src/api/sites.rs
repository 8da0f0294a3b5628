use super::client::ApiClient;
use super::error::{RegistryError, RegistryResult};
use super::types::{Site, UserProfile};

impl ApiClient {
    /// Fetch a site by id.
    ///
    /// Returns `Ok(None)` when the registry answers 404, so callers can
    /// treat an unknown site the same way as a missing configuration.
    pub async fn fetch_site(
        &self,
        base_url: &str,
        access_token: &str,
        site_id: &str,
    ) -> RegistryResult<Option<Site>> {
        let endpoint = format!("api/v1/sites/{}", site_id);
        match self.get_json(base_url, &endpoint, access_token).await {
            Ok(site) => Ok(Some(site)),
            Err(RegistryError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Fetch the profile of the token's owner.
    pub async fn fetch_profile(
        &self,
        base_url: &str,
        access_token: &str,
    ) -> RegistryResult<UserProfile> {
        self.get_json(base_url, "api/v1/user", access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_site_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/sites/site-1"))
            .and(header("x-auth-token", "tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "site-1",
                "url": "https://atelier.design/sites/site-1",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(None);
        let site = client
            .fetch_site(&server.uri(), "tok-123", "site-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(site.id, "site-1");
        assert_eq!(site.url, "https://atelier.design/sites/site-1");
    }

    #[tokio::test]
    async fn test_fetch_site_missing_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such site"))
            .mount(&server)
            .await;

        let client = ApiClient::new(None);
        let site = client
            .fetch_site(&server.uri(), "tok-123", "nope")
            .await
            .unwrap();
        assert!(site.is_none());
    }

    #[tokio::test]
    async fn test_fetch_site_other_errors_propagate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .mount(&server)
            .await;

        let client = ApiClient::new(None);
        let err = client
            .fetch_site(&server.uri(), "tok-123", "site-1")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_fetch_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/user"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "rax"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(None);
        let profile = client.fetch_profile(&server.uri(), "tok-123").await.unwrap();
        assert_eq!(profile.name.as_deref(), Some("rax"));
    }
}
