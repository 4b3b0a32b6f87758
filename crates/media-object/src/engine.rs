//! Seam between a media object and the playback engine
//!
//! The engine does the decoding and output. A media object only issues
//! commands through [`Engine`] and reacts to [`EngineNotification`]s that
//! the host forwards from the engine's own event loop.

use mediabridge_core::{MediaSource, MetaData};
use serde::{Deserialize, Serialize};

/// Load status reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineStatus {
    NoMedia,
    Loading,
    Loaded,
    Stalled,
    Buffering,
    Buffered,
    EndOfMedia,
    InvalidMedia,
}

/// Asynchronous notification from the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineNotification {
    StatusChanged { status: EngineStatus },
    PositionChanged { position_ms: i64 },
    DurationChanged { duration_ms: i64 },
    /// Buffer fill level in the 0.0..=1.0 range
    BufferProgress { progress: f32 },
    MetaDataChanged,
    TracksChanged,
    HasVideoChanged { has_video: bool },
    SeekableChanged { seekable: bool },
}

/// An audio or subtitle track as the engine lists it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTrack {
    pub title: Option<String>,
    pub language: Option<String>,
}

impl EngineTrack {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            language: None,
        }
    }
}

/// Commands and queries a media object needs from the engine
///
/// Track indexes are the engine's own, 0-based, in listing order.
pub trait Engine {
    fn set_source(&mut self, source: &MediaSource);
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn set_position(&mut self, position_ms: i64);

    fn position(&self) -> i64;
    fn duration(&self) -> i64;
    fn has_video(&self) -> bool;
    fn is_seekable(&self) -> bool;

    fn audio_tracks(&self) -> Vec<EngineTrack>;
    fn subtitle_tracks(&self) -> Vec<EngineTrack>;
    fn active_audio_track(&self) -> Option<usize>;
    fn set_active_audio_track(&mut self, index: usize);
    fn active_subtitle_track(&self) -> Option<usize>;
    fn set_active_subtitle_track(&mut self, index: usize);

    fn metadata(&self) -> MetaData;
}
