//! Local project files: the materials database and the project config.
//!
//! Both live at the root of the project directory. A missing file is an
//! ordinary "nothing to do" answer; a file that exists but cannot be
//! parsed is an error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::types::{MaterialKind, MaterialRef};

/// File holding the materials inventory of a project.
pub const DATABASE_FILE: &str = "db.json";

/// File holding per-project settings, including the target site.
pub const PROJECT_CONFIG_FILE: &str = "atelier.json";

/// Materials inventory as persisted on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesignDatabase {
    #[serde(default)]
    pub blocks: Vec<DatabaseEntry>,
    #[serde(default)]
    pub scaffolds: Vec<DatabaseEntry>,
}

/// One inventory entry. Only the package coordinates matter for sync;
/// whatever else the generator wrote alongside them is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseEntry {
    pub source: ArtifactSource,
}

/// Package coordinates of a published artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSource {
    pub npm: String,
    pub version: String,
}

impl DesignDatabase {
    /// Flatten into one ordered sequence: all blocks first, then all
    /// scaffolds, each kind keeping its original order.
    pub fn materials(&self) -> Vec<MaterialRef> {
        let blocks = self
            .blocks
            .iter()
            .map(|entry| entry.as_material(MaterialKind::Block));
        let scaffolds = self
            .scaffolds
            .iter()
            .map(|entry| entry.as_material(MaterialKind::Scaffold));
        blocks.chain(scaffolds).collect()
    }
}

impl DatabaseEntry {
    fn as_material(&self, kind: MaterialKind) -> MaterialRef {
        MaterialRef::new(&self.source.npm, &self.source.version, kind)
    }
}

/// Per-project settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Id of the site this project publishes to.
    #[serde(default)]
    pub site: Option<String>,
}

/// Load the materials database of a project, if it has one.
pub fn load_database(project_dir: &Path) -> Result<Option<DesignDatabase>> {
    let path = project_dir.join(DATABASE_FILE);
    if !path.exists() {
        debug!("No materials database at {:?}", path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read database file: {:?}", path))?;
    let database = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse database file: {:?}", path))?;
    Ok(Some(database))
}

/// Load the project config, if the project has one.
pub fn load_project_config(project_dir: &Path) -> Result<Option<ProjectConfig>> {
    let path = project_dir.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        debug!("No project config at {:?}", path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read project config: {:?}", path))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse project config: {:?}", path))?;
    Ok(Some(config))
}
