//! The media object: one playback session driven by an engine
//!
//! A [`MediaObject`] turns host commands into engine commands and engine
//! notifications into [`MediaEvent`]s. It owns the public playback state,
//! the chapter list of the current source and its entries in the shared
//! [`TrackRegistry`].
//!
//! Everything runs on the caller's thread. The only background work is the
//! optional chapter probe worker, whose results are applied from
//! [`MediaObject::poll`].

mod dispatch;
mod notifications;
mod position;

use crate::chapters::ChapterList;
use crate::engine::Engine;
use crate::error::MediaResult;
use crate::events::{EventBus, MediaEvent};
use crate::prober::{ChapterProbe, ChapterProber, ProbeWorker};
use crate::registry::TrackRegistry;
use crate::state::TickState;
use crossbeam_channel::Receiver;
use mediabridge_config::{Config, ProbeMode};
use mediabridge_core::{
    Chapter, CoreError, ErrorType, MediaSource, ObjectId, PlaybackState, TrackKind,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct MediaObject<E> {
    id: ObjectId,
    engine: E,
    registry: TrackRegistry,
    events: EventBus,

    state: PlaybackState,
    source: MediaSource,
    next_source: Option<MediaSource>,
    error_string: String,
    error_type: ErrorType,

    chapters: ChapterList,
    ticks: TickState,
    transition_time_ms: i32,
    auto_play_on_load: bool,
    log_notifications: bool,

    prober: Option<Arc<dyn ChapterProbe>>,
    probe_mode: ProbeMode,
    worker: ProbeWorker,
    /// Bumped on every accepted source; background probe results carry it
    generation: u64,
    /// Generation of the background probe the load is waiting on
    pending_probe: Option<u64>,
}

impl<E: Engine> MediaObject<E> {
    /// Creates an object with default settings and the default ffprobe prober
    pub fn new(engine: E, registry: TrackRegistry) -> Self {
        Self::with_config(engine, registry, &Config::default())
    }

    pub fn with_config(engine: E, registry: TrackRegistry, config: &Config) -> Self {
        let prober: Option<Arc<dyn ChapterProbe>> = if config.probe.enabled {
            Some(Arc::new(ChapterProber::from_config(&config.probe)))
        } else {
            None
        };

        let id = ObjectId::new();
        log::debug!("Creating media object {}", id);

        Self {
            id,
            engine,
            registry,
            events: EventBus::new(),
            state: PlaybackState::Stopped,
            source: MediaSource::Empty,
            next_source: None,
            error_string: String::new(),
            error_type: ErrorType::NoError,
            chapters: ChapterList::new(),
            ticks: TickState::from_config(&config.player),
            transition_time_ms: config.player.transition_time_ms,
            auto_play_on_load: config.player.auto_play_on_load,
            log_notifications: config.app.debug_mode,
            prober,
            probe_mode: config.probe.mode,
            worker: ProbeWorker::new(),
            generation: 0,
            pending_probe: None,
        }
    }

    /// Replaces the chapter prober; `None` disables probing
    pub fn with_prober(mut self, prober: Option<Arc<dyn ChapterProbe>>) -> Self {
        self.prober = prober;
        self
    }

    pub fn with_probe_mode(mut self, mode: ProbeMode) -> Self {
        self.probe_mode = mode;
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    /// Returns a receiver for every event emitted from now on
    pub fn subscribe(&mut self) -> Receiver<MediaEvent> {
        self.events.subscribe()
    }

    // --- queries ---

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_source(&self) -> &MediaSource {
        &self.source
    }

    pub fn next_source(&self) -> Option<&MediaSource> {
        self.next_source.as_ref()
    }

    pub fn current_time(&self) -> i64 {
        self.engine.position()
    }

    pub fn total_time(&self) -> i64 {
        self.engine.duration()
    }

    /// Time left in the current source, never negative
    pub fn remaining_time(&self) -> i64 {
        (self.total_time() - self.current_time()).max(0)
    }

    pub fn has_video(&self) -> bool {
        self.engine.has_video()
    }

    pub fn is_seekable(&self) -> bool {
        self.engine.is_seekable()
    }

    pub fn error_string(&self) -> &str {
        &self.error_string
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.chapters()
    }

    pub fn current_chapter(&self) -> usize {
        self.chapters.current_chapter_index()
    }

    pub fn tick_interval(&self) -> u32 {
        self.ticks.tick_interval()
    }

    pub fn set_tick_interval(&mut self, interval_ms: u32) {
        self.ticks.set_tick_interval(interval_ms);
    }

    pub fn prefinish_mark(&self) -> u32 {
        self.ticks.prefinish_mark()
    }

    pub fn set_prefinish_mark(&mut self, mark_ms: u32) {
        self.ticks.set_prefinish_mark(mark_ms);
    }

    pub fn transition_time(&self) -> i32 {
        self.transition_time_ms
    }

    /// Stored for hosts; gapless transitions are the engine's business
    pub fn set_transition_time(&mut self, time_ms: i32) {
        self.transition_time_ms = time_ms;
    }

    pub fn is_probe_pending(&self) -> bool {
        self.pending_probe.is_some()
    }

    // --- control surface ---

    pub fn play(&mut self) {
        if self.state != PlaybackState::Paused {
            log::debug!("Ignoring play request while {}", self.state);
            return;
        }
        self.engine.play();
        self.set_state(PlaybackState::Playing);
    }

    pub fn pause(&mut self) {
        if !self.state.is_running() {
            log::debug!("Ignoring pause request while {}", self.state);
            return;
        }
        self.engine.pause();
        self.set_state(PlaybackState::Paused);
    }

    /// Stops playback and forgets any queued next source
    pub fn stop(&mut self) {
        self.next_source = None;
        self.pending_probe = None;
        self.engine.stop();
        self.set_state(PlaybackState::Stopped);
    }

    pub fn seek(&mut self, position_ms: i64) {
        self.engine.set_position(position_ms);
        self.ticks.rewind_to(position_ms);
    }

    /// Seeks to the start of a chapter of the current source
    pub fn set_chapter(&mut self, index: usize) -> MediaResult<()> {
        let start = self
            .chapters
            .start_of(index)
            .ok_or(CoreError::ChapterOutOfRange {
                index,
                count: self.chapters.chapter_count(),
            })?;
        self.seek(start);
        Ok(())
    }

    /// Hands a new source to the engine
    ///
    /// Only local files and URLs are accepted. Anything else is refused
    /// without touching the current source or state.
    pub fn set_source(&mut self, source: MediaSource) -> MediaResult<()> {
        Self::check_playable(&source)?;
        log::info!("Loading {}", source);

        self.generation += 1;
        self.pending_probe = None;
        self.error_string.clear();
        self.error_type = ErrorType::NoError;
        self.ticks.reset();
        self.clear_chapters();
        self.clear_tracks();

        self.engine.set_source(&source);
        self.source = source.clone();
        self.events.emit(MediaEvent::CurrentSourceChanged { source });
        self.set_state(PlaybackState::Loading);
        Ok(())
    }

    /// Queues the source to play after the current one ends
    ///
    /// When stopped there is nothing to follow, so the source is loaded now.
    pub fn set_next_source(&mut self, source: MediaSource) -> MediaResult<()> {
        Self::check_playable(&source)?;
        if self.state == PlaybackState::Stopped {
            return self.set_source(source);
        }
        log::debug!("Queued next source {}", source);
        self.next_source = Some(source);
        Ok(())
    }

    /// Applies finished background probe results
    ///
    /// Returns true if a pending load completed. Results for an older
    /// source are dropped.
    pub fn poll(&mut self) -> bool {
        let mut completed = false;
        while let Some(outcome) = self.worker.try_recv() {
            completed |= self.apply_probe_outcome(outcome);
        }
        completed
    }

    /// Blocks until the pending background probe reports, or `timeout` passes
    pub fn wait_for_probe(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending_probe.is_some() {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.worker.recv_timeout(left) {
                Some(outcome) => {
                    if self.apply_probe_outcome(outcome) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    fn check_playable(source: &MediaSource) -> MediaResult<()> {
        if source.is_playable() {
            return Ok(());
        }
        log::warn!("Media source {} is not supported", source);
        Err(CoreError::UnsupportedSource {
            kind: source.kind(),
        }
        .into())
    }

    /// Emits the transition, then records it; same-state writes are silent
    fn set_state(&mut self, new_state: PlaybackState) {
        if new_state == self.state {
            return;
        }
        let old_state = self.state;
        log::debug!("{}: {} -> {}", self.id, old_state, new_state);
        self.events.emit(MediaEvent::StateChanged {
            new_state,
            old_state,
        });
        self.state = new_state;
    }

    fn clear_chapters(&mut self) {
        if self.chapters.has_chapters() {
            self.chapters.clear();
            self.events
                .emit(MediaEvent::AvailableChaptersChanged { count: 0 });
        }
    }

    fn clear_tracks(&mut self) {
        for kind in [TrackKind::Audio, TrackKind::Subtitle] {
            if self.registry.list_for(self.id, kind).is_empty() {
                continue;
            }
            self.registry.clear_list_for(self.id, kind);
            self.events.emit(match kind {
                TrackKind::Audio => MediaEvent::AvailableAudioChannelsChanged,
                TrackKind::Subtitle => MediaEvent::AvailableSubtitlesChanged,
            });
        }
    }
}

impl<E> Drop for MediaObject<E> {
    fn drop(&mut self) {
        self.registry.purge_owner(self.id);
    }
}
