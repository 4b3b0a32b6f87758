// FILE: crates/media-object/src/error.rs

use mediabridge_core::CoreError;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to launch chapter probe '{program}': {source}")]
    ProbeSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Chapter probe exited with {0}")]
    ProbeExit(ExitStatus),

    #[error("Unreadable chapter probe output: {0}")]
    ProbeOutput(#[from] serde_json::Error),

    #[error("Chapter probe output has no chapter list")]
    NoChapters,

    #[error("Failed to start probe worker: {0}")]
    Worker(#[source] std::io::Error),
}

impl MediaError {
    /// Returns true when the probe simply had nothing to offer
    ///
    /// A missing tool or a file without chapters is routine; anything else
    /// points at a broken probe and is worth a warning.
    pub fn is_routine(&self) -> bool {
        matches!(self, Self::ProbeSpawn { .. } | Self::NoChapters)
    }
}

pub type MediaResult<T> = Result<T, MediaError>;
