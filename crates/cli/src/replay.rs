//! Scripted engine sessions
//!
//! A replay script names a source, describes what the engine knows about it
//! and lists steps. Each step is either a host command (`{"command": "pause"}`)
//! or an engine notification (`{"type": "position_changed", "position_ms": 1000}`).
//! The script drives a real media object through a [`ScriptedEngine`] and the
//! emitted events are collected in order.

use anyhow::{Context, Result};
use media_object::{
    Backend, Chapter, ChapterProbe, Engine, EngineNotification, EngineTrack, MediaEvent,
    MediaResult, MediaSource, MetaData,
};
use mediabridge_config::{Config, ProbeMode};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub struct ReplayScript {
    pub source: String,
    #[serde(default)]
    pub duration_ms: i64,
    #[serde(default)]
    pub audio_tracks: Vec<EngineTrack>,
    #[serde(default)]
    pub subtitle_tracks: Vec<EngineTrack>,
    #[serde(default)]
    pub metadata: MetaData,
    /// Fixed chapters instead of running the configured probe
    #[serde(default)]
    pub chapters: Option<Vec<Chapter>>,
    #[serde(default)]
    pub tick_interval_ms: Option<u32>,
    #[serde(default)]
    pub prefinish_mark_ms: Option<u32>,
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid replay script")
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    Command(ReplayCommand),
    Notification(EngineNotification),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ReplayCommand {
    Play,
    Pause,
    Stop,
    Seek { position_ms: i64 },
    SetChapter { index: usize },
    SetNextSource { source: String },
}

/// Engine double whose state follows the notifications it is fed
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    position: i64,
    duration: i64,
    has_video: bool,
    seekable: bool,
    audio_tracks: Vec<EngineTrack>,
    subtitle_tracks: Vec<EngineTrack>,
    active_audio: Option<usize>,
    active_subtitle: Option<usize>,
    metadata: MetaData,
}

impl ScriptedEngine {
    pub fn from_script(script: &ReplayScript) -> Self {
        Self {
            duration: script.duration_ms,
            seekable: true,
            audio_tracks: script.audio_tracks.clone(),
            subtitle_tracks: script.subtitle_tracks.clone(),
            metadata: script.metadata.clone(),
            ..Default::default()
        }
    }

    /// Mirrors a notification into the state the media object will query
    pub fn observe(&mut self, notification: &EngineNotification) {
        match notification {
            EngineNotification::PositionChanged { position_ms } => self.position = *position_ms,
            EngineNotification::DurationChanged { duration_ms } => self.duration = *duration_ms,
            EngineNotification::HasVideoChanged { has_video } => self.has_video = *has_video,
            EngineNotification::SeekableChanged { seekable } => self.seekable = *seekable,
            _ => {}
        }
    }
}

impl Engine for ScriptedEngine {
    fn set_source(&mut self, source: &MediaSource) {
        log::debug!("engine: set_source {}", source);
        self.position = 0;
    }

    fn play(&mut self) {
        log::debug!("engine: play");
    }

    fn pause(&mut self) {
        log::debug!("engine: pause");
    }

    fn stop(&mut self) {
        log::debug!("engine: stop");
    }

    fn set_position(&mut self, position_ms: i64) {
        log::debug!("engine: seek {}", position_ms);
        self.position = position_ms;
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn duration(&self) -> i64 {
        self.duration
    }

    fn has_video(&self) -> bool {
        self.has_video
    }

    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn audio_tracks(&self) -> Vec<EngineTrack> {
        self.audio_tracks.clone()
    }

    fn subtitle_tracks(&self) -> Vec<EngineTrack> {
        self.subtitle_tracks.clone()
    }

    fn active_audio_track(&self) -> Option<usize> {
        self.active_audio
    }

    fn set_active_audio_track(&mut self, index: usize) {
        self.active_audio = Some(index);
    }

    fn active_subtitle_track(&self) -> Option<usize> {
        self.active_subtitle
    }

    fn set_active_subtitle_track(&mut self, index: usize) {
        self.active_subtitle = Some(index);
    }

    fn metadata(&self) -> MetaData {
        self.metadata.clone()
    }
}

struct FixedChapters(Vec<Chapter>);

impl ChapterProbe for FixedChapters {
    fn try_probe(&self, _path: &Path) -> MediaResult<Vec<Chapter>> {
        Ok(self.0.clone())
    }
}

/// Runs a script to completion and returns every event in emission order
pub fn run_script(script: ReplayScript, config: &Config) -> Result<Vec<MediaEvent>> {
    let source = MediaSource::parse(&script.source)?;
    let backend = Backend::new(config.clone());
    let mut media = backend.create_media_object(ScriptedEngine::from_script(&script));

    if let Some(chapters) = script.chapters {
        media = media
            .with_prober(Some(Arc::new(FixedChapters(chapters))))
            .with_probe_mode(ProbeMode::Blocking);
    }
    if let Some(interval) = script.tick_interval_ms {
        media.set_tick_interval(interval);
    }
    if let Some(mark) = script.prefinish_mark_ms {
        media.set_prefinish_mark(mark);
    }

    let events = media.subscribe();
    media.set_source(source)?;

    for (index, step) in script.steps.into_iter().enumerate() {
        match step {
            ReplayStep::Command(command) => match command {
                ReplayCommand::Play => media.play(),
                ReplayCommand::Pause => media.pause(),
                ReplayCommand::Stop => media.stop(),
                ReplayCommand::Seek { position_ms } => media.seek(position_ms),
                ReplayCommand::SetChapter { index: chapter } => {
                    if let Err(e) = media.set_chapter(chapter) {
                        log::warn!("Step {}: {}", index, e);
                    }
                }
                ReplayCommand::SetNextSource { source } => {
                    media
                        .set_next_source(MediaSource::parse(&source)?)
                        .with_context(|| format!("Step {}: cannot queue {}", index, source))?;
                }
            },
            ReplayStep::Notification(notification) => {
                media.engine_mut().observe(&notification);
                media.handle_notification(notification);
            }
        }

        if media.is_probe_pending() && !media.wait_for_probe(PROBE_TIMEOUT) {
            log::warn!("Step {}: chapter probe did not finish in time", index);
        }
    }

    Ok(events.try_iter().collect())
}
