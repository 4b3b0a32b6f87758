//! Shared domain types for the mediabridge playback backend

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, ErrorSeverity, RecoveryAction, Result};
pub use types::{
    Chapter, ErrorType, GlobalTrackId, MediaSource, MetaData, ObjectId, PlaybackState, SourceKind,
    TrackDescription, TrackKind,
};
