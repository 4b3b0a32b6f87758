//! Chapter boundaries

use serde::{Deserialize, Serialize};

/// A chapter expressed as an inclusive millisecond range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Start position in milliseconds
    pub start_ms: i64,
    /// End position in milliseconds
    pub end_ms: i64,
}

impl Chapter {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Builds a chapter from second offsets, rounding to the nearest millisecond
    pub fn from_seconds(start: f64, end: f64) -> Self {
        Self {
            start_ms: seconds_to_millis(start),
            end_ms: seconds_to_millis(end),
        }
    }

    /// Returns the chapter length in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.end_ms - self.start_ms).max(0)
    }

    /// Checks if a position falls within this chapter (both ends inclusive)
    pub fn contains(&self, position_ms: i64) -> bool {
        self.start_ms <= position_ms && position_ms <= self.end_ms
    }
}

fn seconds_to_millis(seconds: f64) -> i64 {
    if seconds.is_finite() {
        (seconds * 1000.0).round() as i64
    } else {
        0
    }
}
