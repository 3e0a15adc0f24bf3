//! Robot-style driver for a carousel mounted on fake surfaces.
//!
//! ```
//! use vitrine_carousel::CarouselSettings;
//! use vitrine_core::DeviceClass;
//! use vitrine_testing::CarouselRobot;
//!
//! let robot = CarouselRobot::mount(CarouselSettings::default(), DeviceClass::Pointer);
//! robot.drag(300.0, 400.0, 4);
//! assert_eq!(robot.offset(), 120.0);
//! ```

use std::rc::Rc;

use vitrine_carousel::{Carousel, CarouselHost, CarouselSettings, CarouselState, EventDisposition};
use vitrine_core::DeviceClass;

use crate::fakes::{FakeCards, FakeContainer, FakeTrack, FakeViewport};
use crate::scheduler::{ManualClock, ManualFrameScheduler};

/// Viewport width used by [`CarouselRobot::mount`].
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1440.0;

pub struct CarouselRobot {
    carousel: Carousel,
    scheduler: Rc<ManualFrameScheduler>,
    container: Rc<FakeContainer>,
    track: Rc<FakeTrack>,
    cards: Rc<FakeCards>,
    viewport: Rc<FakeViewport>,
}

impl CarouselRobot {
    /// Mount on a track holding two copies of the card sequence, with the
    /// clock at zero.
    pub fn mount(settings: CarouselSettings, device: DeviceClass) -> Self {
        let clock = Rc::new(ManualClock::new(0.0));
        let scheduler = Rc::new(ManualFrameScheduler::new(clock.clone()));
        let container = Rc::new(FakeContainer::default());
        let track = Rc::new(FakeTrack::new());
        let cards = Rc::new(FakeCards::along_track(
            &track,
            settings.card_count * 2,
            settings.card_width,
            settings.card_width - 40.0,
        ));
        let viewport = Rc::new(FakeViewport::new(DEFAULT_VIEWPORT_WIDTH));

        let host = CarouselHost {
            container: Some(container.clone()),
            track: Some(track.clone()),
            cards: cards.clone(),
            viewport: viewport.clone(),
            scheduler: scheduler.clone(),
            clock,
            device,
        };
        let carousel = match Carousel::mount(settings, host) {
            Ok(carousel) => carousel,
            Err(err) => panic!("robot surfaces are always present: {err}"),
        };

        Self {
            carousel,
            scheduler,
            container,
            track,
            cards,
            viewport,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn scheduler(&self) -> &ManualFrameScheduler {
        &self.scheduler
    }

    pub fn container(&self) -> &FakeContainer {
        &self.container
    }

    pub fn track(&self) -> &FakeTrack {
        &self.track
    }

    pub fn cards(&self) -> &FakeCards {
        &self.cards
    }

    pub fn viewport(&self) -> &FakeViewport {
        &self.viewport
    }

    pub fn state(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn offset(&self) -> f64 {
        self.state().accumulated_offset
    }

    pub fn track_x(&self) -> f64 {
        self.track.translate_x()
    }

    /// Advance the clock by `millis` and fire one frame.
    pub fn advance(&self, millis: f64) {
        self.scheduler.advance(millis);
    }

    /// Jump the clock to an absolute time and fire one frame.
    pub fn advance_to(&self, millis: f64) {
        self.scheduler.clock().set(millis);
        self.scheduler.frame();
    }

    pub fn press(&self, x: f64) -> EventDisposition {
        self.carousel.input().start_drag(x)
    }

    pub fn move_to(&self, x: f64) -> EventDisposition {
        self.carousel.input().drag(x)
    }

    pub fn release(&self) {
        self.carousel.input().end_drag();
    }

    /// Press at `from`, move to `to` in `steps` evenly spaced samples, release.
    pub fn drag(&self, from: f64, to: f64, steps: usize) {
        self.press(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from + (to - from) * step as f64 / steps as f64;
            self.move_to(x);
        }
        self.release();
    }

    pub fn wheel(&self, delta_x: f64, delta_y: f64) -> EventDisposition {
        self.carousel.input().handle_wheel(delta_x, delta_y)
    }
}
