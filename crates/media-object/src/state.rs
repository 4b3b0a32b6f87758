//! Position-derived event bookkeeping

use mediabridge_config::PlayerConfig;

/// Timing settings and the last tick position of one media object
#[derive(Debug, Clone)]
pub struct TickState {
    last_tick_ms: i64,
    tick_interval_ms: u32,
    prefinish_mark_ms: u32,
    about_to_finish_ms: u32,
}

impl TickState {
    pub fn new() -> Self {
        Self::from_config(&PlayerConfig::default())
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            last_tick_ms: 0,
            tick_interval_ms: config.tick_interval_ms,
            prefinish_mark_ms: config.prefinish_mark_ms,
            about_to_finish_ms: config.about_to_finish_ms,
        }
    }

    #[cfg(test)]
    pub fn last_tick(&self) -> i64 {
        self.last_tick_ms
    }

    pub fn tick_interval(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn set_tick_interval(&mut self, interval_ms: u32) {
        self.tick_interval_ms = interval_ms;
    }

    pub fn prefinish_mark(&self) -> u32 {
        self.prefinish_mark_ms
    }

    pub fn set_prefinish_mark(&mut self, mark_ms: u32) {
        self.prefinish_mark_ms = mark_ms;
    }

    pub fn reset(&mut self) {
        self.last_tick_ms = 0;
    }

    /// Pulls the last tick back after a seek before it
    pub fn rewind_to(&mut self, position_ms: i64) {
        if position_ms < self.last_tick_ms {
            self.last_tick_ms = position_ms;
        }
    }

    /// Decides whether a position update is a tick, recording it if so
    ///
    /// Note the condition is `position + interval >= last_tick`, which holds
    /// for every forward update; hosts get a tick per position update.
    pub fn should_tick(&mut self, position_ms: i64) -> bool {
        if self.tick_interval_ms == 0 {
            return false;
        }
        if position_ms + i64::from(self.tick_interval_ms) >= self.last_tick_ms {
            self.last_tick_ms = position_ms;
            return true;
        }
        false
    }

    /// Remaining time once the position is within the prefinish mark
    ///
    /// The rule is `position >= duration - prefinish_mark`, except that an
    /// unknown duration (zero or negative) never reaches the mark.
    pub fn prefinish_remaining(&self, position_ms: i64, duration_ms: i64) -> Option<i64> {
        if duration_ms <= 0 {
            return None;
        }
        let remaining = duration_ms - position_ms;
        (remaining <= i64::from(self.prefinish_mark_ms)).then_some(remaining)
    }

    pub fn about_to_finish(&self, position_ms: i64, duration_ms: i64) -> bool {
        duration_ms > 0 && duration_ms - position_ms <= i64::from(self.about_to_finish_ms)
    }
}

impl Default for TickState {
    fn default() -> Self {
        Self::new()
    }
}
