//! `requestAnimationFrame`-backed frame scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vitrine_core::{Clock, FrameCallback, FrameCallbackId, FrameCallbacks, FrameScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Queues frame callbacks and keeps exactly one browser frame request
/// outstanding while the queue is non-empty.
///
/// Callbacks receive the supplied clock's time rather than the
/// `requestAnimationFrame` timestamp, so they share an origin with whatever
/// the components read from that clock at mount.
pub struct AnimationFrameScheduler {
    inner: Rc<FrameDriver>,
}

struct FrameDriver {
    window: Window,
    clock: Rc<dyn Clock>,
    callbacks: FrameCallbacks,
    request: Cell<Option<i32>>,
    on_frame: RefCell<Option<Closure<dyn FnMut()>>>,
    closed: Cell<bool>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, clock: Rc<dyn Clock>) -> Self {
        let inner = Rc::new(FrameDriver {
            window,
            clock,
            callbacks: FrameCallbacks::new(),
            request: Cell::new(None),
            on_frame: RefCell::new(None),
            closed: Cell::new(false),
        });
        let weak = Rc::downgrade(&inner);
        let on_frame = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.run_frame();
            }
        }) as Box<dyn FnMut()>);
        *inner.on_frame.borrow_mut() = Some(on_frame);
        Self { inner }
    }

    /// Cancel the outstanding browser request and refuse new callbacks.
    pub fn shutdown(&self) {
        self.inner.closed.set(true);
        self.inner.cancel_request();
    }
}

impl FrameDriver {
    fn run_frame(&self) {
        self.request.set(None);
        if self.closed.get() {
            return;
        }
        self.callbacks.drain(self.clock.now_millis());
    }

    fn ensure_requested(&self) {
        if self.closed.get() || self.request.get().is_some() || self.callbacks.is_empty() {
            return;
        }
        let on_frame = self.on_frame.borrow();
        let Some(on_frame) = on_frame.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => self.request.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel_request(&self) {
        if let Some(id) = self.request.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        // The closure is freed right after this; the browser must not call it.
        self.cancel_request();
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn register_frame_callback(&self, callback: FrameCallback) -> Option<FrameCallbackId> {
        if self.inner.closed.get() {
            return None;
        }
        let id = self.inner.callbacks.register(callback);
        self.inner.ensure_requested();
        Some(id)
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner.callbacks.cancel(id);
        if self.inner.callbacks.is_empty() {
            self.inner.cancel_request();
        }
    }
}
