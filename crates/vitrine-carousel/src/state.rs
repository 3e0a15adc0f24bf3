//! Carousel position state and its pure transitions.
//!
//! The rendered position has two independent terms: a time-based auto-scroll
//! (`settings.base_position(elapsed)`) and a manual `accumulated_offset` fed
//! by drag and wheel input. Auto-scroll resumes after any interaction by
//! simply summing the two; the clock origin is never moved.

use crate::settings::CarouselSettings;

/// What the host should do with the input event that produced a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDisposition {
    /// The carousel handled the event; suppress the browser default.
    Consumed,
    /// Let the page handle the event (vertical scroll, text selection, ...).
    PassThrough,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventDisposition::Consumed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    Start { pointer_x: f64 },
    Move { pointer_x: f64 },
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
}

impl WheelInput {
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    pub is_dragging: bool,
    pub drag_start_x: f64,
    pub last_pointer_x: f64,
    pub accumulated_offset: f64,
    pub animation_paused: bool,
    /// Clock reading at construction; origin of the auto-scroll term.
    pub animation_start_time: f64,
    pub drag_sensitivity: f64,
}

impl CarouselState {
    pub fn new(animation_start_time: f64, drag_sensitivity: f64) -> Self {
        Self {
            is_dragging: false,
            drag_start_x: 0.0,
            last_pointer_x: 0.0,
            accumulated_offset: 0.0,
            animation_paused: false,
            animation_start_time,
            drag_sensitivity,
        }
    }

    /// Displacement a move to `pointer_x` applies, or `None` outside a drag.
    ///
    /// Deltas are frame-to-frame, so their sum over a drag telescopes to
    /// `sensitivity * (last - first)` however often the pointer is sampled.
    pub fn incremental_delta(&self, pointer_x: f64) -> Option<f64> {
        self.is_dragging
            .then(|| (pointer_x - self.last_pointer_x) * self.drag_sensitivity)
    }

    pub fn apply_drag(self, input: DragInput, settings: &CarouselSettings) -> Self {
        match input {
            DragInput::Start { pointer_x } => Self {
                is_dragging: true,
                animation_paused: true,
                drag_start_x: pointer_x,
                last_pointer_x: pointer_x,
                ..self
            },
            DragInput::Move { pointer_x } => match self.incremental_delta(pointer_x) {
                Some(delta) => Self {
                    last_pointer_x: pointer_x,
                    accumulated_offset: self.accumulated_offset + delta,
                    ..self
                },
                None => self,
            },
            DragInput::End => {
                if !self.is_dragging {
                    return self;
                }
                Self {
                    is_dragging: false,
                    animation_paused: false,
                    ..self
                }
                .rewrapped(settings)
            }
        }
    }

    pub fn apply_wheel(
        self,
        input: WheelInput,
        settings: &CarouselSettings,
    ) -> (Self, EventDisposition) {
        if input.delta_x.abs() < settings.wheel_dead_zone {
            return (self, EventDisposition::PassThrough);
        }
        let next = Self {
            accumulated_offset: self.accumulated_offset - input.delta_x * settings.wheel_gain,
            ..self
        };
        let next = if settings.rewrap_on_wheel {
            next.rewrapped(settings)
        } else {
            next
        };
        (next, EventDisposition::Consumed)
    }

    /// Reduce the offset modulo one loop distance once it exceeds the rewrap
    /// margin. The track repeats every loop distance, so nothing moves
    /// on screen.
    pub fn rewrapped(self, settings: &CarouselSettings) -> Self {
        let loop_distance = settings.loop_distance();
        if self.accumulated_offset.abs() <= settings.rewrap_margin() || loop_distance == 0.0 {
            return self;
        }
        let accumulated_offset = self.accumulated_offset % loop_distance;
        log::debug!(
            "carousel offset rewrapped: {} -> {}",
            self.accumulated_offset,
            accumulated_offset
        );
        Self {
            accumulated_offset,
            ..self
        }
    }

    /// Position the frame loop should render at `now`, or `None` while a drag
    /// owns the transform.
    pub fn auto_position(&self, now: f64, settings: &CarouselSettings) -> Option<f64> {
        if self.is_dragging || self.animation_paused {
            return None;
        }
        let elapsed = now - self.animation_start_time;
        Some(settings.base_position(elapsed) + self.accumulated_offset)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
