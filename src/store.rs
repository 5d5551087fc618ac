//! Persistence for composed notes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LabError, Result};

/// Where note bodies are written, keyed by filename.
pub trait MechanicStore {
    /// Create the backing directory if needed.
    fn ensure_dir(&mut self) -> Result<()>;

    fn exists(&self, filename: &str) -> Result<bool>;

    fn write(&mut self, filename: &str, body: &str) -> Result<()>;
}

/// Notes stored as files in a directory.
#[derive(Debug, Clone)]
pub struct FsMechanicStore {
    dir: PathBuf,
}

impl FsMechanicStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MechanicStore for FsMechanicStore {
    fn ensure_dir(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| LabError::io(&self.dir, e))
    }

    fn exists(&self, filename: &str) -> Result<bool> {
        let path = self.dir.join(filename);
        path.try_exists().map_err(|e| LabError::io(path, e))
    }

    fn write(&mut self, filename: &str, body: &str) -> Result<()> {
        let path = self.dir.join(filename);
        fs::write(&path, body).map_err(|e| LabError::io(path, e))
    }
}

/// Notes kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryMechanicStore {
    files: BTreeMap<String, String>,
}

impl MemoryMechanicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl MechanicStore for MemoryMechanicStore {
    fn ensure_dir(&mut self) -> Result<()> {
        Ok(())
    }

    fn exists(&self, filename: &str) -> Result<bool> {
        Ok(self.files.contains_key(filename))
    }

    fn write(&mut self, filename: &str, body: &str) -> Result<()> {
        self.files.insert(filename.to_string(), body.to_string());
        Ok(())
    }
}
