//! Shared fixtures for media object integration tests

#![allow(dead_code)]

use crossbeam_channel::Receiver;
use media_object::{
    Chapter, ChapterProbe, Engine, EngineNotification, EngineStatus, EngineTrack, MediaError,
    MediaEvent, MediaObject, MediaResult, MediaSource, MetaData, TrackRegistry,
};
use mediabridge_config::Config;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    SetSource(MediaSource),
    Play,
    Pause,
    Stop,
    SetPosition(i64),
    SetAudioTrack(usize),
    SetSubtitleTrack(usize),
}

/// Engine double that records commands and serves canned answers
#[derive(Debug, Default)]
pub struct MockEngine {
    pub calls: Vec<EngineCall>,
    pub position: i64,
    pub duration: i64,
    pub audio: Vec<EngineTrack>,
    pub subtitles: Vec<EngineTrack>,
    pub active_audio: Option<usize>,
    pub active_subtitle: Option<usize>,
    pub metadata: MetaData,
}

impl Engine for MockEngine {
    fn set_source(&mut self, source: &MediaSource) {
        self.calls.push(EngineCall::SetSource(source.clone()));
    }

    fn play(&mut self) {
        self.calls.push(EngineCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(EngineCall::Pause);
    }

    fn stop(&mut self) {
        self.calls.push(EngineCall::Stop);
    }

    fn set_position(&mut self, position_ms: i64) {
        self.position = position_ms;
        self.calls.push(EngineCall::SetPosition(position_ms));
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn duration(&self) -> i64 {
        self.duration
    }

    fn has_video(&self) -> bool {
        false
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn audio_tracks(&self) -> Vec<EngineTrack> {
        self.audio.clone()
    }

    fn subtitle_tracks(&self) -> Vec<EngineTrack> {
        self.subtitles.clone()
    }

    fn active_audio_track(&self) -> Option<usize> {
        self.active_audio
    }

    fn set_active_audio_track(&mut self, index: usize) {
        self.active_audio = Some(index);
        self.calls.push(EngineCall::SetAudioTrack(index));
    }

    fn active_subtitle_track(&self) -> Option<usize> {
        self.active_subtitle
    }

    fn set_active_subtitle_track(&mut self, index: usize) {
        self.active_subtitle = Some(index);
        self.calls.push(EngineCall::SetSubtitleTrack(index));
    }

    fn metadata(&self) -> MetaData {
        self.metadata.clone()
    }
}

/// Prober that returns a fixed chapter list and counts its calls
#[derive(Debug, Default)]
pub struct FixedProbe {
    pub chapters: Option<Vec<Chapter>>,
    pub calls: Mutex<Vec<String>>,
}

impl FixedProbe {
    pub fn with(chapters: Vec<Chapter>) -> Arc<Self> {
        Arc::new(Self {
            chapters: Some(chapters),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn none() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ChapterProbe for FixedProbe {
    fn try_probe(&self, path: &Path) -> MediaResult<Vec<Chapter>> {
        self.calls.lock().unwrap().push(path.display().to_string());
        self.chapters.clone().ok_or(MediaError::NoChapters)
    }
}

pub fn two_chapters() -> Vec<Chapter> {
    vec![Chapter::new(0, 60_000), Chapter::new(60_000, 120_000)]
}

pub fn local(path: &str) -> MediaSource {
    MediaSource::LocalFile(path.into())
}

/// Object with probing disabled and default settings
pub fn setup_media_object() -> (MediaObject<MockEngine>, Receiver<MediaEvent>) {
    setup_with_probe(None)
}

pub fn setup_with_probe(
    probe: Option<Arc<dyn ChapterProbe>>,
) -> (MediaObject<MockEngine>, Receiver<MediaEvent>) {
    let mut media = MediaObject::with_config(
        MockEngine::default(),
        TrackRegistry::new(),
        &Config::default(),
    )
    .with_prober(probe);
    let events = media.subscribe();
    (media, events)
}

pub fn status(status: EngineStatus) -> EngineNotification {
    EngineNotification::StatusChanged { status }
}

pub fn position(position_ms: i64) -> EngineNotification {
    EngineNotification::PositionChanged { position_ms }
}

/// Sets a source and drives it to loaded, then drains the events
pub fn load(media: &mut MediaObject<MockEngine>, events: &Receiver<MediaEvent>, source: MediaSource) {
    media.set_source(source).unwrap();
    media.handle_notification(status(EngineStatus::Loaded));
    drain(events);
}

pub fn drain(events: &Receiver<MediaEvent>) -> Vec<MediaEvent> {
    events.try_iter().collect()
}

pub fn state_changes(events: &[MediaEvent]) -> Vec<(media_object::PlaybackState, media_object::PlaybackState)> {
    events
        .iter()
        .filter_map(|event| match event {
            MediaEvent::StateChanged {
                new_state,
                old_state,
            } => Some((*old_state, *new_state)),
            _ => None,
        })
        .collect()
}
