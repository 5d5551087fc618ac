//! The running index: a markdown file linking every generated note.
//!
//! The index is an append-only log. Entries are only ever added, and an entry
//! whose exact line is already present is never added again.

mod file;
mod memory;

use serde::Serialize;

use crate::clock::{format_date, Clock};
use crate::config::MECHANICS_DIR;
use crate::error::Result;

pub use file::FileIndex;
pub use memory::MemoryIndex;

/// Written once, when the index does not exist yet.
pub const INDEX_HEADER: &str = "# AI Game Idea Lab\n\
\n\
Daily AI-flavoured game mechanics in Python, JS, and Go.\n\
\n\
## Daily log\n\
\n";

/// Storage behind the index.
///
/// Callers check [`IndexLog::contains_entry`] before [`IndexLog::append_entry`];
/// the pair is not atomic, so only one writer may run at a time.
pub trait IndexLog {
    /// Create the index with [`INDEX_HEADER`] if it does not exist.
    fn ensure_exists(&mut self) -> Result<()>;

    /// Whether `line` already occurs anywhere in the index.
    fn contains_entry(&self, line: &str) -> Result<bool>;

    /// Append `line` to the end of the index.
    fn append_entry(&mut self, line: &str) -> Result<()>;
}

/// What [`update_index`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexUpdate {
    Appended,
    AlreadyPresent,
}

/// Build the log line for a note, including the trailing newline.
///
/// `- 2024-01-15: [Invert Gravity Roguelike](mechanics/2024-01-15-invert-gravity-roguelike.md)`
pub fn entry_line(date: &str, title: &str, filename: &str) -> String {
    format!("- {}: [{}]({}/{})\n", date, title, MECHANICS_DIR, filename)
}

/// Record a note in the index, dated by `clock`, unless it is already listed.
pub fn update_index<L, C>(
    log: &mut L,
    clock: &C,
    title: &str,
    filename: &str,
) -> Result<IndexUpdate>
where
    L: IndexLog + ?Sized,
    C: Clock + ?Sized,
{
    log.ensure_exists()?;

    let entry = entry_line(&format_date(clock.today()), title, filename);
    if log.contains_entry(&entry)? {
        tracing::debug!(filename, "Index already lists this note");
        return Ok(IndexUpdate::AlreadyPresent);
    }

    log.append_entry(&entry)?;
    tracing::info!(title, filename, "Added index entry");
    Ok(IndexUpdate::Appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_entry_line_format() {
        assert_eq!(
            entry_line(
                "2024-01-15",
                "Invert Gravity Roguelike",
                "2024-01-15-invert-gravity-roguelike.md"
            ),
            "- 2024-01-15: [Invert Gravity Roguelike](mechanics/2024-01-15-invert-gravity-roguelike.md)\n"
        );
    }

    #[test]
    fn test_update_creates_header_then_entry() {
        let mut log = MemoryIndex::new();
        let update = update_index(
            &mut log,
            &clock(),
            "Pause Time Roguelike",
            "2024-01-15-pause-time-roguelike.md",
        )
        .unwrap();

        assert_eq!(update, IndexUpdate::Appended);
        assert_eq!(
            log.content(),
            Some(
                "# AI Game Idea Lab\n\nDaily AI-flavoured game mechanics in Python, JS, and Go.\n\n## Daily log\n\n\
                 - 2024-01-15: [Pause Time Roguelike](mechanics/2024-01-15-pause-time-roguelike.md)\n"
            )
        );
    }

    #[test]
    fn test_update_twice_appends_once() {
        let mut log = MemoryIndex::new();
        let filename = "2024-01-15-pause-time-roguelike.md";

        update_index(&mut log, &clock(), "Pause Time Roguelike", filename).unwrap();
        let second = update_index(&mut log, &clock(), "Pause Time Roguelike", filename).unwrap();

        assert_eq!(second, IndexUpdate::AlreadyPresent);
        let content = log.content().unwrap();
        assert_eq!(content.matches(filename).count(), 1);
    }

    #[test]
    fn test_existing_content_is_kept() {
        let mut log =
            MemoryIndex::with_content("# My lab\n\n- 2024-01-14: [Old](mechanics/old.md)\n");
        update_index(&mut log, &clock(), "New", "new.md").unwrap();

        assert_eq!(
            log.content(),
            Some(
                "# My lab\n\n- 2024-01-14: [Old](mechanics/old.md)\n\
                 - 2024-01-15: [New](mechanics/new.md)\n"
            )
        );
    }
}
