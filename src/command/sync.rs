use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};
use url::Url;

use crate::api::RegistryError;
use crate::cli::resolve_project_dir;
use crate::config;
use crate::materials::{sync, SyncOptions, SyncOutcome, SyncReporter};
use crate::metadata::MetadataManager;

/// Reduce a registry URL to its origin for progress lines.
///
/// Falls back to the raw string when the URL does not parse, so the
/// user still sees where the sync was headed.
fn display_origin(registry_url: &str) -> String {
    Url::parse(registry_url)
        .map(|u| u.origin().ascii_serialization())
        .unwrap_or_else(|_| registry_url.to_string())
}

/// Terminal frontend for a sync run: spinner with batch progress,
/// warnings for rejected items, and a one-line verdict at the end.
struct TerminalReporter {
    spinner: ProgressBar,
    registry: String,
}

impl TerminalReporter {
    fn new(registry_url: &str) -> Self {
        // Hidden until on_start; a run with nothing to sync must stay silent.
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("Failed to build progress style"),
        );
        Self {
            spinner,
            registry: display_origin(registry_url),
        }
    }
}

impl SyncReporter for TerminalReporter {
    fn on_start(&self, _total_batches: usize) {
        self.spinner
            .set_message(format!("Sync to {}, Now: 0%", self.registry));
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_progress(&self, _completed: usize, _total: usize, percent: u32) {
        self.spinner
            .set_message(format!("Sync to {}, Now: {}%", self.registry, percent));
    }

    fn on_item_failure(&self, name: &str, reason: &str) {
        self.spinner
            .println(format!("⚠️  {} sync fail for reason: {}", name, reason));
    }

    fn on_completed(&self, materials_url: &str) {
        self.spinner.finish_and_clear();
        println!("✅ done, if there may some failure, fix them and sync again");
        println!("materials url: {}", materials_url);
    }

    fn on_aborted(&self, error: &RegistryError) {
        self.spinner.finish_and_clear();
        println!("❌ fail to sync, please try atelier --help");
        debug!("Sync aborted: {}", error);
    }

    fn on_failed(&self, error: &anyhow::Error) {
        self.spinner.finish_and_clear();
        println!("❌ sync fail");
        debug!("Sync failed: {:#}", error);
    }
}

/// Handle the sync command
pub async fn run_sync(dir: Option<String>, registry: Option<String>) -> Result<()> {
    let project_dir = resolve_project_dir(dir)?;
    let registry_url = config::resolve_registry_url(registry);

    let reporter = TerminalReporter::new(&registry_url);
    let options = SyncOptions {
        registry: Some(registry_url),
    };

    let outcome = sync(&project_dir, &options, &reporter).await;

    if let SyncOutcome::Completed { batches } = outcome {
        debug!("Sync completed with {} batches", batches);
        // Metadata is best-effort bookkeeping, never a reason to fail a sync.
        let recorded = MetadataManager::new(None).and_then(|m| m.record_sync());
        if let Err(e) = recorded {
            warn!("Failed to record sync metadata: {}", e);
        }
    }

    Ok(())
}
