use std::path::{Path, PathBuf};

/// Directory under the lab root that holds one markdown file per note.
///
/// Index entries link into it, so it is fixed rather than configurable.
pub const MECHANICS_DIR: &str = "mechanics";

/// Index file at the lab root.
pub const INDEX_FILE: &str = "README.md";

/// Where a lab lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabConfig {
    /// Directory holding the index file and the mechanics directory.
    pub root: PathBuf,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl LabConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mechanics_dir(&self) -> PathBuf {
        self.root.join(MECHANICS_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }
}
