//! Request and response types for the design registry API.

use serde::{Deserialize, Serialize};

/// One sync request body: fully-qualified identifiers (`name@version`)
/// grouped by artifact kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterialBatch {
    pub blocks: Vec<String>,
    pub scaffolds: Vec<String>,
}

impl MaterialBatch {
    /// Total identifiers across both kinds.
    pub fn len(&self) -> usize {
        self.blocks.len() + self.scaffolds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.scaffolds.is_empty()
    }
}

/// Response of the materials sync endpoint.
///
/// The registry answers `{success: false, data: [{name, reason}, ..]}` when
/// it rejects individual artifacts. Every field is optional on the wire;
/// a response without this shape means nothing was rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Vec<SyncFailure>,
}

impl SyncResponse {
    /// Rejected artifacts carried by this response, if any.
    pub fn failures(&self) -> &[SyncFailure] {
        if self.success == Some(false) {
            &self.data
        } else {
            &[]
        }
    }
}

/// One rejected artifact in a sync response.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncFailure {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

/// A site on the registry: the destination that owns uploaded materials.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub id: String,
    /// Public URL where the synchronized materials are browsable.
    pub url: String,
}

/// Profile of the authenticated user, used to validate tokens at login.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
}
