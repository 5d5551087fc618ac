use std::fs;
use std::path::{Path, PathBuf};

use super::{IndexLog, INDEX_HEADER};
use crate::error::{LabError, Result};

/// Index stored as a markdown file on disk.
#[derive(Debug, Clone)]
pub struct FileIndex {
    path: PathBuf,
}

impl FileIndex {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| LabError::io(&self.path, e))
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| LabError::io(&self.path, e))
    }
}

impl IndexLog for FileIndex {
    fn ensure_exists(&mut self) -> Result<()> {
        let exists = self
            .path
            .try_exists()
            .map_err(|e| LabError::io(&self.path, e))?;
        if !exists {
            tracing::info!(path = %self.path.display(), "Creating index");
            self.write(INDEX_HEADER)?;
        }
        Ok(())
    }

    fn contains_entry(&self, line: &str) -> Result<bool> {
        Ok(self.read()?.contains(line))
    }

    fn append_entry(&mut self, line: &str) -> Result<()> {
        let mut content = self.read()?;
        content.push_str(line);
        self.write(&content)
    }
}
