//! Materials synchronization driver.
//!
//! Orchestrates a run: resolve the database, token and site, reshape
//! the inventory into batches, then upload the batches strictly in
//! order while reporting progress. Batches are never sent concurrently
//! and an aborted run leaves already-uploaded batches applied.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::api::{AuthenticatedClient, MaterialBatch, RegistryError, Site};
use crate::config;
use crate::session;

use super::database::{load_database, load_project_config};
use super::reshape::reshape;
use super::upload::{upload_batch, BatchTransport, SiteTransport};

/// Options for a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Registry base URL override. Defaults to the configured registry.
    pub registry: Option<String>,
}

/// Terminal state of a sync run.
#[derive(Debug)]
pub enum SyncOutcome {
    /// Database, token or site was absent; nothing was attempted.
    NothingToSync,
    /// Every batch was uploaded. Item-level failures may still have
    /// been reported along the way.
    Completed { batches: usize },
    /// A transport error stopped the run partway through.
    Aborted,
    /// An unexpected error was caught at the top boundary.
    Failed,
}

/// Callback for reporting sync progress and failures.
pub trait SyncReporter: Send + Sync {
    fn on_start(&self, total_batches: usize);
    fn on_progress(&self, completed: usize, total: usize, percent: u32);
    fn on_item_failure(&self, name: &str, reason: &str);
    fn on_completed(&self, materials_url: &str);
    fn on_aborted(&self, error: &RegistryError);
    fn on_failed(&self, error: &anyhow::Error);
}

/// Integer progress percentage, rounded up.
pub fn progress_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (completed * 100).div_ceil(total) as u32
}

/// Upload every batch in order, reporting progress after each one.
///
/// Stops at the first transport error; earlier batches are not undone.
pub async fn upload_all(
    transport: &dyn BatchTransport,
    batches: &[MaterialBatch],
    site: &Site,
    reporter: &dyn SyncReporter,
) -> SyncOutcome {
    let total = batches.len();
    reporter.on_start(total);

    for (index, batch) in batches.iter().enumerate() {
        match upload_batch(transport, batch, reporter).await {
            Ok(()) => {
                let completed = index + 1;
                let percent = progress_percent(completed, total);
                debug!("Batch {}/{} uploaded ({}%)", completed, total, percent);
                reporter.on_progress(completed, total, percent);
            }
            Err(err) => {
                debug!("Sync aborted after {} of {} batches: {}", index, total, err);
                reporter.on_aborted(&err);
                return SyncOutcome::Aborted;
            }
        }
    }

    reporter.on_completed(&site.url);
    SyncOutcome::Completed { batches: total }
}

/// Resolve the destination site for a project.
///
/// Absent project config, a config without a site id, or a site the
/// registry does not know all come back as `Ok(None)`.
async fn resolve_site(project_dir: &Path, client: &AuthenticatedClient) -> Result<Option<Site>> {
    let config = match load_project_config(project_dir)? {
        Some(config) => config,
        None => return Ok(None),
    };

    let site_id = match config.site {
        Some(id) => id,
        None => {
            debug!("Project config has no site id");
            return Ok(None);
        }
    };

    Ok(client.fetch_site(&site_id).await?)
}

/// Synchronize a project's materials to its registry site.
///
/// Never returns an error: anything unexpected is caught here and
/// reported through the callback as an overall failure.
pub async fn sync(
    project_dir: &Path,
    options: &SyncOptions,
    reporter: &dyn SyncReporter,
) -> SyncOutcome {
    match run(project_dir, options, reporter).await {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!("Sync failed: {:?}", err);
            reporter.on_failed(&err);
            SyncOutcome::Failed
        }
    }
}

async fn run(
    project_dir: &Path,
    options: &SyncOptions,
    reporter: &dyn SyncReporter,
) -> Result<SyncOutcome> {
    let database = match load_database(project_dir)? {
        Some(database) => database,
        None => {
            debug!("No materials database, nothing to sync");
            return Ok(SyncOutcome::NothingToSync);
        }
    };

    let token = match session::prepare_token()? {
        Some(token) => token,
        None => {
            debug!("No access token, nothing to sync");
            return Ok(SyncOutcome::NothingToSync);
        }
    };

    let registry = options
        .registry
        .clone()
        .unwrap_or_else(config::registry_base_url);
    let client = AuthenticatedClient::new(registry, token);

    let site = match resolve_site(project_dir, &client).await? {
        Some(site) => site,
        None => {
            debug!("No destination site, nothing to sync");
            return Ok(SyncOutcome::NothingToSync);
        }
    };

    let materials = database.materials();
    let batches: Vec<MaterialBatch> = reshape(&materials);
    debug!(
        "Reshaped {} materials into {} batches",
        materials.len(),
        batches.len()
    );

    let transport = SiteTransport::new(&client, &site.id);
    Ok(upload_all(&transport, &batches, &site, reporter).await)
}
