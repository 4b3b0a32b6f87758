use super::MediaObject;
use crate::engine::Engine;
use crate::events::MediaEvent;

impl<E: Engine> MediaObject<E> {
    /// Derives tick, prefinish, about-to-finish and chapter events from a position update
    pub(super) fn on_position(&mut self, position_ms: i64) {
        if self.state.is_ticking() && self.ticks.should_tick(position_ms) {
            self.events.emit(MediaEvent::Tick { position_ms });
        }

        if !self.state.is_running() {
            return;
        }

        let duration_ms = self.engine.duration();
        if let Some(remaining_ms) = self.ticks.prefinish_remaining(position_ms, duration_ms) {
            self.events
                .emit(MediaEvent::PrefinishMarkReached { remaining_ms });
        }
        if self.ticks.about_to_finish(position_ms, duration_ms) {
            self.events.emit(MediaEvent::AboutToFinish);
        }
        if let Some(index) = self.chapters.update_position(position_ms) {
            self.events.emit(MediaEvent::ChapterChanged { index });
        }
    }
}
