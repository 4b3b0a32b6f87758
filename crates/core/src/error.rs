//! Error types and recovery strategies shared by the backend crates
//!
//! Errors carry a severity tier so a host can decide how loudly to react:
//! - **Recoverable**: retrying with other input will work (bad source string)
//! - **Degraded**: the request is refused but playback continues
//! - **Fatal**: the object cannot continue without a new source

use crate::types::{GlobalTrackId, ObjectId, SourceKind};
use std::fmt;
use thiserror::Error;

/// Recovery actions that can be taken when an error occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Ask the host for a different source
    ProvideNewSource,
    /// Ignore the request and keep the current state
    IgnoreRequest,
    /// Refresh the track or chapter listing before retrying
    RefreshListing,
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProvideNewSource => write!(f, "Provide a new source"),
            Self::IgnoreRequest => write!(f, "Ignoring request"),
            Self::RefreshListing => write!(f, "Refreshing listing"),
        }
    }
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Error can be recovered from by retrying with other input
    Recoverable,
    /// Request refused but playback continues
    Degraded,
    /// Current source is unusable
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type for the shared domain model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Source string could not be turned into a media source
    #[error("Invalid media source '{input}': {reason}")]
    InvalidSource { input: String, reason: String },

    /// Source kind the backend cannot hand to the engine
    #[error("Unsupported media source kind: {kind}")]
    UnsupportedSource { kind: SourceKind },

    /// Global id exists but belongs to a different playback object
    #[error("Track {global_id} is not owned by object {owner}")]
    ForeignTrack {
        owner: ObjectId,
        global_id: GlobalTrackId,
    },

    /// Global id is not registered (never allocated or already cleared)
    #[error("Unknown track description: {global_id}")]
    UnknownTrack { global_id: GlobalTrackId },

    /// Chapter index past the end of the chapter list
    #[error("Chapter {index} out of range ({count} chapters)")]
    ChapterOutOfRange { index: usize, count: usize },
}

impl CoreError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSource { .. } => ErrorSeverity::Recoverable,
            Self::UnsupportedSource { .. } => ErrorSeverity::Fatal,
            Self::ForeignTrack { .. }
            | Self::UnknownTrack { .. }
            | Self::ChapterOutOfRange { .. } => ErrorSeverity::Degraded,
        }
    }

    /// Returns the recommended recovery action for this error
    pub fn recovery_action(&self) -> RecoveryAction {
        match self {
            Self::InvalidSource { .. } | Self::UnsupportedSource { .. } => {
                RecoveryAction::ProvideNewSource
            }
            Self::UnknownTrack { .. } | Self::ChapterOutOfRange { .. } => {
                RecoveryAction::RefreshListing
            }
            Self::ForeignTrack { .. } => RecoveryAction::IgnoreRequest,
        }
    }

    /// Helper for building an `InvalidSource` error
    pub fn invalid_source(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSource {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;
