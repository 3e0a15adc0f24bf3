//! Drag, wheel and auto-scroll driver for the carousel track.

use std::rc::Rc;

use vitrine_core::DeviceClass;

use crate::settings::CarouselSettings;
use crate::state::{CarouselState, DragInput, EventDisposition, WheelInput};
use crate::surface::{ContainerSurface, Cursor, TrackSurface};
use crate::transform;

/// Owns [`CarouselState`] and applies it to the track and container.
///
/// Input handlers and [`tick`](Self::tick) run on the same thread and never
/// interleave, so a drag write and a frame write cannot race.
pub struct CarouselEngine {
    settings: CarouselSettings,
    state: CarouselState,
    container: Rc<dyn ContainerSurface>,
    track: Rc<dyn TrackSurface>,
}

impl CarouselEngine {
    /// `now` is the clock reading used as the auto-scroll origin. The device
    /// class is sampled here once and fixes the drag sensitivity.
    pub fn new(
        settings: CarouselSettings,
        device: DeviceClass,
        now: f64,
        container: Rc<dyn ContainerSurface>,
        track: Rc<dyn TrackSurface>,
    ) -> Self {
        let state = CarouselState::new(now, settings.drag_sensitivity_for(device));
        Self {
            settings,
            state,
            container,
            track,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn start_drag(&mut self, pointer_x: f64) -> EventDisposition {
        self.state = self
            .state
            .apply_drag(DragInput::Start { pointer_x }, &self.settings);
        self.container.set_cursor(Cursor::Grabbing);
        EventDisposition::Consumed
    }

    /// Move the track by the pointer delta since the previous sample.
    ///
    /// The new transform is relative to what is currently rendered, not to
    /// the logical position, so the track never jumps if the two disagree.
    pub fn drag(&mut self, pointer_x: f64) -> EventDisposition {
        let Some(delta) = self.state.incremental_delta(pointer_x) else {
            return EventDisposition::PassThrough;
        };
        let rendered = transform::rendered_translate_x(self.track.rendered_transform().as_deref());
        self.track
            .set_transform(&transform::translate3d(rendered + delta));
        self.state = self
            .state
            .apply_drag(DragInput::Move { pointer_x }, &self.settings);
        EventDisposition::Consumed
    }

    pub fn end_drag(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        self.state = self.state.apply_drag(DragInput::End, &self.settings);
        self.container.set_cursor(Cursor::Grab);
    }

    pub fn handle_wheel(&mut self, delta_x: f64, delta_y: f64) -> EventDisposition {
        let (state, disposition) = self
            .state
            .apply_wheel(WheelInput::new(delta_x, delta_y), &self.settings);
        self.state = state;
        disposition
    }

    /// Per-frame update. Renders `base + offset` unless a drag owns the
    /// transform. Returns the rendered position.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        let position = self.state.auto_position(now, &self.settings)?;
        self.track.set_transform(&transform::translate3d(position));
        Some(position)
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
