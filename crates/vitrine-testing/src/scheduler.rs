use std::cell::Cell;
use std::rc::Rc;

use vitrine_core::{Clock, FrameCallback, FrameCallbackId, FrameCallbacks, FrameScheduler};

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_millis: f64) -> Self {
        Self {
            now: Cell::new(start_millis),
        }
    }

    pub fn advance(&self, millis: f64) {
        self.now.set(self.now.get() + millis);
    }

    pub fn set(&self, millis: f64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> f64 {
        self.now.get()
    }
}

/// Frame scheduler whose frames fire only from [`advance`](Self::advance)
/// or [`frame`](Self::frame), stamped with the shared [`ManualClock`].
pub struct ManualFrameScheduler {
    clock: Rc<ManualClock>,
    callbacks: FrameCallbacks,
    frames: Cell<u64>,
}

impl ManualFrameScheduler {
    pub fn new(clock: Rc<ManualClock>) -> Self {
        Self {
            clock,
            callbacks: FrameCallbacks::new(),
            frames: Cell::new(0),
        }
    }

    pub fn clock(&self) -> &Rc<ManualClock> {
        &self.clock
    }

    /// Fire one frame at the current clock time. Returns callbacks run.
    pub fn frame(&self) -> usize {
        self.frames.set(self.frames.get() + 1);
        self.callbacks.drain(self.clock.now_millis())
    }

    /// Move the clock forward, then fire one frame.
    pub fn advance(&self, millis: f64) -> usize {
        self.clock.advance(millis);
        self.frame()
    }

    pub fn pending_callbacks(&self) -> usize {
        self.callbacks.len()
    }

    pub fn frames_fired(&self) -> u64 {
        self.frames.get()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn register_frame_callback(&self, callback: FrameCallback) -> Option<FrameCallbackId> {
        Some(self.callbacks.register(callback))
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.callbacks.cancel(id);
    }
}
