//! Daily generator of AI-flavoured game mechanic notes.
//!
//! Each run draws phrases from fixed vocabularies, composes a dated markdown
//! note under `mechanics/`, and links it from a running `README.md` index.

pub mod clock;
pub mod compose;
pub mod config;
pub mod error;
pub mod index;
pub mod lab;
pub mod models;
pub mod store;

pub use error::{LabError, Result};
pub use lab::{Lab, RunOutcome};
