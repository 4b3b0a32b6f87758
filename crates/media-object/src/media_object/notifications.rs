//! Engine notification handling and the load sequence

use super::MediaObject;
use crate::engine::{Engine, EngineNotification, EngineStatus};
use crate::error::MediaResult;
use crate::events::MediaEvent;
use crate::prober::ProbeOutcome;
use mediabridge_config::ProbeMode;
use mediabridge_core::{Chapter, ErrorType, PlaybackState, TrackKind};

impl<E: Engine> MediaObject<E> {
    /// Feeds one engine notification into the object
    pub fn handle_notification(&mut self, notification: EngineNotification) {
        if self.log_notifications {
            log::debug!("{}: engine {:?}", self.id, notification);
        }
        match notification {
            EngineNotification::StatusChanged { status } => self.on_status(status),
            EngineNotification::PositionChanged { position_ms } => self.on_position(position_ms),
            EngineNotification::DurationChanged { duration_ms } => {
                self.events
                    .emit(MediaEvent::TotalTimeChanged { duration_ms });
            }
            EngineNotification::BufferProgress { progress } => {
                let percent = (progress * 100.0).round().clamp(0.0, 100.0) as u8;
                self.events.emit(MediaEvent::BufferStatus { percent });
            }
            EngineNotification::MetaDataChanged => {
                let tags = self.engine.metadata().to_tag_map();
                self.events.emit(MediaEvent::MetaDataChanged { tags });
            }
            EngineNotification::TracksChanged => {
                self.register_tracks();
                self.events.emit(MediaEvent::AvailableAudioChannelsChanged);
                self.events.emit(MediaEvent::AvailableSubtitlesChanged);
            }
            EngineNotification::HasVideoChanged { has_video } => {
                self.events.emit(MediaEvent::HasVideoChanged { has_video });
            }
            EngineNotification::SeekableChanged { seekable } => {
                self.events.emit(MediaEvent::SeekableChanged { seekable });
            }
        }
    }

    fn on_status(&mut self, status: EngineStatus) {
        if self.state == PlaybackState::Error {
            log::debug!("Ignoring engine status {:?} after an error", status);
            return;
        }

        match status {
            EngineStatus::NoMedia => self.set_state(PlaybackState::Stopped),
            EngineStatus::Loading => self.set_state(PlaybackState::Loading),
            EngineStatus::Loaded => {
                // Engines re-report loaded after seeks; that is not a new load.
                if self.state != PlaybackState::Playing {
                    self.on_loaded();
                }
            }
            EngineStatus::Stalled => self.set_state(PlaybackState::Buffering),
            EngineStatus::Buffering | EngineStatus::Buffered => {
                if self.state == PlaybackState::Buffering {
                    self.set_state(PlaybackState::Playing);
                }
            }
            EngineStatus::EndOfMedia => self.on_end_of_media(),
            EngineStatus::InvalidMedia => {
                log::warn!("Engine rejected {}", self.source);
                self.error_string = format!("Invalid media: {}", self.source);
                self.error_type = ErrorType::NormalError;
                self.set_state(PlaybackState::Error);
            }
        }
    }

    fn on_loaded(&mut self) {
        self.pending_probe = None;
        self.clear_chapters();
        self.register_tracks();

        self.events.emit(MediaEvent::AvailableAudioChannelsChanged);
        self.events.emit(MediaEvent::TitleChanged { title: 1 });
        self.events.emit(MediaEvent::AvailableTitlesChanged { count: 1 });
        self.events.emit(MediaEvent::AngleChanged { angle: 0 });
        self.events.emit(MediaEvent::AvailableAnglesChanged { count: 1 });

        let path = self.source.local_path();
        let (prober, path) = match (self.prober.clone(), path) {
            (Some(prober), Some(path)) => (prober, path),
            _ => return self.finish_load(),
        };

        match self.probe_mode {
            ProbeMode::Blocking => {
                let result = prober.try_probe(&path);
                self.apply_probe_result(result);
                self.finish_load();
            }
            ProbeMode::Background => {
                match self.worker.spawn(prober, path, self.generation) {
                    Ok(()) => {
                        self.pending_probe = Some(self.generation);
                        self.set_state(PlaybackState::Loading);
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        self.finish_load();
                    }
                }
            }
        }
    }

    fn finish_load(&mut self) {
        self.ticks.reset();
        self.set_state(PlaybackState::Paused);
        if self.auto_play_on_load {
            self.play();
        }
    }

    fn on_end_of_media(&mut self) {
        self.events.emit(MediaEvent::Finished);
        self.ticks.reset();
        self.set_state(PlaybackState::Stopped);

        if let Some(next) = self.next_source.take() {
            if let Err(e) = self.set_source(next) {
                log::warn!("Could not load queued source: {}", e);
            }
        }
    }

    /// Rebuilds this object's registry entries from the engine's track lists
    pub(super) fn register_tracks(&mut self) {
        self.registry.clear_list_for(self.id, TrackKind::Audio);
        for (index, track) in self.engine.audio_tracks().into_iter().enumerate() {
            let name = track.title.unwrap_or_else(|| format!("Audio {}", index + 1));
            let description = track.language.unwrap_or_default();
            self.registry
                .add(self.id, index, name, description, TrackKind::Audio);
        }

        self.registry.clear_list_for(self.id, TrackKind::Subtitle);
        for (index, track) in self.engine.subtitle_tracks().into_iter().enumerate() {
            let name = track
                .title
                .unwrap_or_else(|| format!("Subtitle {}", index + 1));
            let description = track.language.unwrap_or_default();
            self.registry
                .add(self.id, index, name, description, TrackKind::Subtitle);
        }
    }

    /// Returns true when the outcome completed the pending load
    pub(super) fn apply_probe_outcome(&mut self, outcome: ProbeOutcome) -> bool {
        if self.pending_probe != Some(outcome.generation) {
            log::debug!(
                "Dropping chapter probe result for stale generation {}",
                outcome.generation
            );
            return false;
        }
        self.pending_probe = None;
        self.apply_probe_result(outcome.result);
        self.finish_load();
        true
    }

    fn apply_probe_result(&mut self, result: MediaResult<Vec<Chapter>>) {
        match result {
            Ok(chapters) => {
                let count = chapters.len();
                log::debug!("{} chapters in {}", count, self.source);
                self.chapters.replace(chapters);
                self.events.emit(MediaEvent::AvailableChaptersChanged { count });
            }
            Err(e) if e.is_routine() => log::debug!("No chapters for {}: {}", self.source, e),
            Err(e) => log::warn!("Chapter probe failed for {}: {}", self.source, e),
        }
    }
}
