//! Outbound events and their fan-out to subscribers

use crossbeam_channel::{unbounded, Receiver, Sender};
use mediabridge_core::{MediaSource, PlaybackState};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a media object reports to its host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MediaEvent {
    StateChanged {
        new_state: PlaybackState,
        old_state: PlaybackState,
    },
    Tick {
        position_ms: i64,
    },
    PrefinishMarkReached {
        remaining_ms: i64,
    },
    AboutToFinish,
    Finished,
    BufferStatus {
        percent: u8,
    },
    TotalTimeChanged {
        duration_ms: i64,
    },
    MetaDataChanged {
        tags: BTreeMap<String, String>,
    },
    CurrentSourceChanged {
        source: MediaSource,
    },
    HasVideoChanged {
        has_video: bool,
    },
    SeekableChanged {
        seekable: bool,
    },
    ChapterChanged {
        index: usize,
    },
    AvailableChaptersChanged {
        count: usize,
    },
    AvailableAudioChannelsChanged,
    AvailableSubtitlesChanged,
    TitleChanged {
        title: usize,
    },
    AvailableTitlesChanged {
        count: usize,
    },
    AngleChanged {
        angle: usize,
    },
    AvailableAnglesChanged {
        count: usize,
    },
}

/// Broadcasts events to every live subscriber, in emission order
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<MediaEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a receiver for all events emitted from now on
    pub fn subscribe(&mut self) -> Receiver<MediaEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends the event to every subscriber, dropping the ones that hung up
    pub fn emit(&mut self, event: MediaEvent) {
        log::trace!("emit {:?}", event);
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
