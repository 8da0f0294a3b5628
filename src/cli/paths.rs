use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the project directory a command operates on.
pub fn resolve_project_dir(dir: Option<String>) -> Result<PathBuf> {
    if let Some(path) = dir {
        PathBuf::from(&path)
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize provided project directory: {}", path))
    } else {
        std::env::current_dir().context("Failed to get current directory")
    }
}
