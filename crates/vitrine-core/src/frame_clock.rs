use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64) + 'static>;

/// Host hook that runs callbacks on the next display frame.
///
/// Implementations are single-threaded: the browser adapter wraps
/// `requestAnimationFrame`, tests advance frames by hand.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame. Returns `None` if the scheduler has
    /// been shut down and will never fire again.
    fn register_frame_callback(&self, callback: FrameCallback) -> Option<FrameCallbackId>;

    /// Drop a queued callback. Unknown or already-fired ids are ignored.
    fn cancel_frame_callback(&self, id: FrameCallbackId);
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

/// Ordered queue of one-shot frame callbacks.
///
/// Callbacks registered while the queue is draining run on the following
/// frame, so a callback that re-registers itself runs exactly once per frame.
pub struct FrameCallbacks {
    entries: RefCell<VecDeque<FrameCallbackEntry>>,
    next_id: Cell<FrameCallbackId>,
}

impl FrameCallbacks {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(VecDeque::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push_back(FrameCallbackEntry {
            id,
            callback: Some(callback),
        });
        id
    }

    /// Returns `true` if a pending callback was removed.
    pub fn cancel(&self, id: FrameCallbackId) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Run every callback queued before this call. Returns how many ran.
    pub fn drain(&self, frame_time_millis: f64) -> usize {
        let mut entries = self.entries.borrow_mut();
        let mut pending: Vec<FrameCallback> = Vec::with_capacity(entries.len());
        while let Some(mut entry) = entries.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(entries);
        let count = pending.len();
        for callback in pending {
            callback(frame_time_millis);
        }
        count
    }
}

impl Default for FrameCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a queued frame callback. Cancels the callback when dropped.
pub struct FrameCallbackRegistration {
    scheduler: Rc<dyn FrameScheduler>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn register(
        scheduler: &Rc<dyn FrameScheduler>,
        callback: impl FnOnce(f64) + 'static,
    ) -> Self {
        let id = scheduler.register_frame_callback(Box::new(callback));
        Self {
            scheduler: Rc::clone(scheduler),
            id,
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

/// A body that runs once per frame until stopped.
///
/// The queued callback only holds a weak reference to the loop, so dropping
/// the `FrameLoop` also stops it.
pub struct FrameLoop {
    inner: Rc<RefCell<FrameLoopInner>>,
}

struct FrameLoopInner {
    scheduler: Rc<dyn FrameScheduler>,
    body: Option<Box<dyn FnMut(f64)>>,
    registration: Option<FrameCallbackRegistration>,
    running: bool,
}

impl FrameLoop {
    pub fn start(scheduler: Rc<dyn FrameScheduler>, body: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(RefCell::new(FrameLoopInner {
            scheduler,
            body: Some(Box::new(body)),
            registration: None,
            running: true,
        }));
        Self::schedule_frame(&inner);
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Cancel the pending frame request. The body never runs again.
    pub fn stop(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            inner.running = false;
            inner.registration.take()
        };
        if let Some(registration) = registration {
            registration.cancel();
        }
    }

    fn schedule_frame(this: &Rc<RefCell<FrameLoopInner>>) {
        let scheduler = {
            let inner = this.borrow();
            if !inner.running || inner.registration.is_some() {
                return;
            }
            Rc::clone(&inner.scheduler)
        };
        let weak: Weak<RefCell<FrameLoopInner>> = Rc::downgrade(this);
        let registration = FrameCallbackRegistration::register(&scheduler, move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        } else {
            log::debug!("frame scheduler is shut down; frame loop stopped");
            this.borrow_mut().running = false;
        }
    }

    fn on_frame(this: &Rc<RefCell<FrameLoopInner>>, frame_time_millis: f64) {
        // The callback for this registration has already fired; forget the id
        // instead of cancelling it.
        let fired = this.borrow_mut().registration.take();
        if let Some(mut fired) = fired {
            fired.id = None;
        }

        let body = this.borrow_mut().body.take();
        if let Some(mut body) = body {
            body(frame_time_millis);
            this.borrow_mut().body = Some(body);
        }

        Self::schedule_frame(this);
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
