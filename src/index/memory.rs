use super::{IndexLog, INDEX_HEADER};
use crate::error::Result;

/// Index kept in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    content: Option<String>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an index that already exists with `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Current content, or `None` if the index was never created.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl IndexLog for MemoryIndex {
    fn ensure_exists(&mut self) -> Result<()> {
        self.content.get_or_insert_with(|| INDEX_HEADER.to_string());
        Ok(())
    }

    fn contains_entry(&self, line: &str) -> Result<bool> {
        Ok(self
            .content
            .as_deref()
            .is_some_and(|content| content.contains(line)))
    }

    fn append_entry(&mut self, line: &str) -> Result<()> {
        self.content
            .get_or_insert_with(|| INDEX_HEADER.to_string())
            .push_str(line);
        Ok(())
    }
}
