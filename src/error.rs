use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating notes or updating the index.
///
/// The same-day collision is not an error; see [`crate::lab::RunOutcome`].
#[derive(Debug, Error)]
pub enum LabError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown flavor: {0} (expected standard, js or go)")]
    UnknownFlavor(String),
}

impl LabError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = LabError> = std::result::Result<T, E>;
