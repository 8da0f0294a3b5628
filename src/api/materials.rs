use super::client::ApiClient;
use super::error::RegistryResult;
use super::types::{MaterialBatch, SyncResponse};

impl ApiClient {
    /// Call the materials endpoint to sync one batch of identifiers.
    ///
    /// The response body is parsed leniently: only the documented
    /// `{success: false, data: [..]}` shape produces failure descriptors.
    /// Anything else, including a body that is not JSON at all, counts as
    /// an accepted batch.
    pub async fn sync_materials(
        &self,
        base_url: &str,
        access_token: &str,
        site_id: &str,
        batch: &MaterialBatch,
    ) -> RegistryResult<SyncResponse> {
        let endpoint = format!("api/v1/sites/{}/materials", site_id);
        let body = self
            .patch_text(base_url, &endpoint, access_token, batch)
            .await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
