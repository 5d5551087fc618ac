//! Top-level generation run: compose, persist once per day, then index.

use rand::Rng;
use serde::Serialize;

use crate::clock::{format_date, Clock};
use crate::compose::{compose, possible_filenames};
use crate::config::LabConfig;
use crate::error::Result;
use crate::index::{update_index, FileIndex, IndexLog, IndexUpdate, MemoryIndex};
use crate::models::{Flavor, MechanicDocument};
use crate::store::{FsMechanicStore, MechanicStore, MemoryMechanicStore};

/// Result of a single [`Lab::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// A new note was written and the index was updated.
    Created {
        document: MechanicDocument,
        index: IndexUpdate,
    },
    /// A note of this flavor already exists for today; nothing was written.
    AlreadyGenerated { filename: String },
}

/// A lab: a note store, an index and a clock.
pub struct Lab<S, L, C> {
    store: S,
    index: L,
    clock: C,
}

impl<C: Clock> Lab<FsMechanicStore, FileIndex, C> {
    /// Open the lab rooted at `config.root`.
    pub fn open(config: &LabConfig, clock: C) -> Self {
        Self::new(
            FsMechanicStore::new(config.mechanics_dir()),
            FileIndex::new(config.index_path()),
            clock,
        )
    }
}

impl<C: Clock> Lab<MemoryMechanicStore, MemoryIndex, C> {
    pub fn in_memory(clock: C) -> Self {
        Self::new(MemoryMechanicStore::new(), MemoryIndex::new(), clock)
    }
}

impl<S, L, C> Lab<S, L, C>
where
    S: MechanicStore,
    L: IndexLog,
    C: Clock,
{
    pub fn new(store: S, index: L, clock: C) -> Self {
        Self {
            store,
            index,
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &L {
        &self.index
    }

    /// Generate today's note of `flavor`.
    ///
    /// At most one note per flavor is kept per calendar day. If the composed
    /// filename, or any other filename this flavor can produce for today,
    /// already exists, the run stops before writing anything. Other files in
    /// the mechanics directory are ignored.
    pub fn run<R: Rng + ?Sized>(&mut self, flavor: Flavor, rng: &mut R) -> Result<RunOutcome> {
        self.store.ensure_dir()?;

        let document = compose(flavor, rng, &self.clock);
        if let Some(existing) = self.todays_note(flavor, &document.filename)? {
            tracing::info!(
                flavor = %flavor,
                filename = %existing,
                "Note already generated today, skipping"
            );
            return Ok(RunOutcome::AlreadyGenerated { filename: existing });
        }

        self.store.write(&document.filename, &document.body)?;
        tracing::info!(
            flavor = %flavor,
            title = %document.title,
            filename = %document.filename,
            "Wrote mechanic note"
        );

        let index = update_index(
            &mut self.index,
            &self.clock,
            &document.title,
            &document.filename,
        )?;
        Ok(RunOutcome::Created { document, index })
    }

    fn todays_note(&self, flavor: Flavor, filename: &str) -> Result<Option<String>> {
        if self.store.exists(filename)? {
            return Ok(Some(filename.to_string()));
        }
        let today = format_date(self.clock.today());
        for candidate in possible_filenames(flavor, &today) {
            if self.store.exists(&candidate)? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}
