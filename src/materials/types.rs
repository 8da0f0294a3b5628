//! Core types for the materials inventory.

/// Artifact category tracked by the local inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Block,
    Scaffold,
}

/// One design artifact, pinned to a published package version.
///
/// Read-only snapshot taken from the database at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRef {
    pub name: String,
    pub version: String,
    pub kind: MaterialKind,
}

impl MaterialRef {
    pub fn new(name: impl Into<String>, version: impl Into<String>, kind: MaterialKind) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind,
        }
    }

    /// The `name@version` form the registry expects.
    pub fn qualified_name(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
