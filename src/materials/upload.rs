//! Single-batch upload for materials.
//!
//! One call sends one PATCH request. Item-level rejections are reported
//! and swallowed here; transport errors propagate to the driver, which
//! stops the run.

use async_trait::async_trait;
use tracing::debug;

use crate::api::{AuthenticatedClient, MaterialBatch, RegistryResult, SyncResponse};

use super::sync::SyncReporter;

/// Transport seam for sending one batch to the registry.
///
/// Tests substitute scripted implementations to exercise the driver
/// without a network.
#[async_trait]
pub trait BatchTransport: Send + Sync {
    async fn send_batch(&self, batch: &MaterialBatch) -> RegistryResult<SyncResponse>;
}

/// Transport bound to an authenticated client and a destination site.
pub struct SiteTransport<'a> {
    client: &'a AuthenticatedClient,
    site_id: &'a str,
}

impl<'a> SiteTransport<'a> {
    pub fn new(client: &'a AuthenticatedClient, site_id: &'a str) -> Self {
        Self { client, site_id }
    }
}

#[async_trait]
impl BatchTransport for SiteTransport<'_> {
    async fn send_batch(&self, batch: &MaterialBatch) -> RegistryResult<SyncResponse> {
        self.client.sync_materials(self.site_id, batch).await
    }
}

/// Upload one batch and surface its per-item failures as warnings.
pub async fn upload_batch(
    transport: &dyn BatchTransport,
    batch: &MaterialBatch,
    reporter: &dyn SyncReporter,
) -> RegistryResult<()> {
    debug!(
        "Uploading batch: {} blocks, {} scaffolds",
        batch.blocks.len(),
        batch.scaffolds.len()
    );

    let response = transport.send_batch(batch).await?;
    for failure in response.failures() {
        reporter.on_item_failure(&failure.name, &failure.reason);
    }
    Ok(())
}
