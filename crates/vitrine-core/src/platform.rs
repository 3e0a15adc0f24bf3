//! Platform abstraction traits for Vitrine runtime services.
//!
//! These traits let components delegate timing to the host, so the same
//! carousel code runs against `performance.now()` in a browser and against a
//! hand-advanced clock in tests.

use web_time::Instant;

/// Provides timing information for the runtime.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    ///
    /// Must be monotonic. Frame timestamps handed to [`FrameScheduler`]
    /// callbacks are expected to come from the same origin.
    ///
    /// [`FrameScheduler`]: crate::FrameScheduler
    fn now_millis(&self) -> f64;
}

/// [`Clock`] backed by `web_time::Instant`.
///
/// On wasm32 this reads `performance.now()`, elsewhere `std::time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_clock_starts_near_zero_and_never_goes_back() {
        let clock = InstantClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(first >= 0.0);
        assert!(first < 1_000.0);
        assert!(second >= first);
    }
}
