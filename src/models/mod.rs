//! Domain models for the idea lab.
//!
//! # Core Concepts
//!
//! - [`VocabularySet`]: A fixed, non-empty list of phrases for one template slot.
//! - [`Vocabulary`]: The six slot vocabularies used by one note [`Flavor`].
//! - [`Selection`]: The phrases drawn for a single generation run.
//! - [`MechanicDocument`]: The composed note, with its title, slug, dated
//!   filename and markdown body. Created once per run and never mutated.

mod mechanic;
mod vocabulary;

pub use mechanic::*;
pub use vocabulary::*;
