//! HTTP client for the design registry.
//!
//! This module provides the request plumbing shared by all registry
//! endpoints plus typed wrappers for the ones the CLI calls.

mod authenticated;
mod client;
mod error;
mod materials;
mod sites;
mod types;

pub use authenticated::AuthenticatedClient;
pub use client::ApiClient;
pub use error::{RegistryError, RegistryResult};
pub use types::{MaterialBatch, Site, SyncFailure, SyncResponse, UserProfile};
