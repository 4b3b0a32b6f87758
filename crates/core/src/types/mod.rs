//! Domain types for the playback backend
//!
//! - `source`: media sources handed to the engine
//! - `playback`: public playback state and error classification
//! - `chapter`: chapter boundaries in milliseconds
//! - `track`: object ids, global track ids and track descriptions
//! - `metadata`: engine metadata and its tag map form

mod chapter;
mod metadata;
mod playback;
mod source;
mod track;

// Re-export all public types
pub use chapter::Chapter;
pub use metadata::MetaData;
pub use playback::{ErrorType, PlaybackState};
pub use source::{MediaSource, SourceKind};
pub use track::{GlobalTrackId, ObjectId, TrackDescription, TrackKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let _object_id: ObjectId = ObjectId::new();
        let _global_id: GlobalTrackId = GlobalTrackId::new(0);
        let _source: MediaSource = MediaSource::default();
        let _state: PlaybackState = PlaybackState::default();
    }
}
