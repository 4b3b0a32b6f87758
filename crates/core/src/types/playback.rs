//! Playback state domain models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public playback state of a media object
///
/// Exactly one state is current per object. `Error` is terminal for the
/// current source; assigning a new source leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    Loading,
    #[default]
    Stopped,
    Playing,
    Paused,
    Buffering,
    Error,
}

impl PlaybackState {
    /// States in which position updates produce tick events
    pub fn is_ticking(&self) -> bool {
        matches!(self, Self::Playing | Self::Buffering | Self::Paused)
    }

    /// States in which playback is advancing (or trying to)
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Playing | Self::Buffering)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Stopped => write!(f, "stopped"),
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::Buffering => write!(f, "buffering"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Classification of the error reported by a media object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorType {
    #[default]
    NoError,
    /// The current source failed; another source may work
    NormalError,
    /// The object cannot play anything
    FatalError,
}
