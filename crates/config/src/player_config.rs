//! Player configuration section

use crate::validation::{ConfigSection, Validator};
use serde::{Deserialize, Serialize};

/// Timing defaults applied to every new media object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Tick interval in milliseconds (0 disables ticks)
    pub tick_interval_ms: u32,

    /// Distance before the end at which prefinish events start (0 = at the end)
    pub prefinish_mark_ms: u32,

    /// Gap (positive) or crossfade (negative) between sources, in milliseconds
    pub transition_time_ms: i32,

    /// Distance before the end at which about-to-finish events start
    pub about_to_finish_ms: u32,

    /// Start playing as soon as a source finishes loading
    pub auto_play_on_load: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 0,
            prefinish_mark_ms: 0,
            transition_time_ms: 0,
            about_to_finish_ms: 2000,
            auto_play_on_load: true,
        }
    }
}

impl ConfigSection for PlayerConfig {
    const NAME: &'static str = "player";

    fn check(&self, validator: &mut Validator) {
        validator
            .range("tick_interval_ms", self.tick_interval_ms, 0..=60_000)
            .range("prefinish_mark_ms", self.prefinish_mark_ms, 0..=600_000)
            .range("transition_time_ms", self.transition_time_ms, -60_000..=60_000)
            .range("about_to_finish_ms", self.about_to_finish_ms, 0..=60_000);
    }
}
