//! Materials inventory and registry synchronization.
//!
//! This module owns the sync pipeline: load the local inventory,
//! reshape it into bounded batches, and upload the batches one by one
//! to the project's site on the design registry.

mod database;
mod reshape;
mod sync;
mod types;
mod upload;

// Re-exports
pub use database::{load_database, load_project_config, DesignDatabase};
pub use reshape::{reshape, MAX_BATCH_ITEMS};
pub use sync::{sync, SyncOptions, SyncOutcome, SyncReporter};
pub use types::{MaterialKind, MaterialRef};
