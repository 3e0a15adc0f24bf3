//! A mounted carousel: engine, perspective updater and their frame loops.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::{Clock, DeviceClass, FrameLoop, FrameScheduler, MountError};

use crate::engine::CarouselEngine;
use crate::perspective::PerspectiveUpdater;
use crate::settings::CarouselSettings;
use crate::state::{CarouselState, EventDisposition};
use crate::surface::{CardCollection, ContainerSurface, TrackSurface, Viewport};

/// Everything a host supplies to mount a carousel.
pub struct CarouselHost {
    pub container: Option<Rc<dyn ContainerSurface>>,
    pub track: Option<Rc<dyn TrackSurface>>,
    pub cards: Rc<dyn CardCollection>,
    pub viewport: Rc<dyn Viewport>,
    pub scheduler: Rc<dyn FrameScheduler>,
    pub clock: Rc<dyn Clock>,
    pub device: DeviceClass,
}

/// Cloneable handle that routes input events into the engine.
#[derive(Clone)]
pub struct CarouselInput {
    engine: Rc<RefCell<CarouselEngine>>,
}

impl CarouselInput {
    pub fn start_drag(&self, pointer_x: f64) -> EventDisposition {
        self.engine.borrow_mut().start_drag(pointer_x)
    }

    pub fn drag(&self, pointer_x: f64) -> EventDisposition {
        self.engine.borrow_mut().drag(pointer_x)
    }

    pub fn end_drag(&self) {
        self.engine.borrow_mut().end_drag();
    }

    pub fn handle_wheel(&self, delta_x: f64, delta_y: f64) -> EventDisposition {
        self.engine.borrow_mut().handle_wheel(delta_x, delta_y)
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.borrow().is_dragging()
    }
}

/// A running carousel. Dropping it stops both frame loops.
pub struct Carousel {
    engine: Rc<RefCell<CarouselEngine>>,
    position_loop: FrameLoop,
    perspective_loop: FrameLoop,
}

impl Carousel {
    /// Build the engine and start the position and perspective loops.
    ///
    /// Fails without side effects if the container or track is missing.
    pub fn mount(settings: CarouselSettings, host: CarouselHost) -> Result<Self, MountError> {
        let container = host.container.ok_or(MountError::MissingContainer)?;
        let track = host.track.ok_or(MountError::MissingTrack)?;

        let perspective = PerspectiveUpdater::new(settings.perspective, host.device);
        let engine = Rc::new(RefCell::new(CarouselEngine::new(
            settings,
            host.device,
            host.clock.now_millis(),
            container,
            track,
        )));

        let position_loop = {
            let engine = Rc::clone(&engine);
            FrameLoop::start(Rc::clone(&host.scheduler), move |frame_time| {
                engine.borrow_mut().tick(frame_time);
            })
        };

        let perspective_loop = {
            let engine = Rc::clone(&engine);
            let cards = host.cards;
            let viewport = host.viewport;
            FrameLoop::start(host.scheduler, move |_| {
                if engine.borrow().is_dragging() {
                    return;
                }
                perspective.update(&*cards, viewport.width());
            })
        };

        log::debug!(
            "carousel mounted ({:?}, loop distance {})",
            host.device,
            engine.borrow().settings().loop_distance()
        );

        Ok(Self {
            engine,
            position_loop,
            perspective_loop,
        })
    }

    pub fn input(&self) -> CarouselInput {
        CarouselInput {
            engine: Rc::clone(&self.engine),
        }
    }

    pub fn state(&self) -> CarouselState {
        *self.engine.borrow().state()
    }

    pub fn is_running(&self) -> bool {
        self.position_loop.is_running() || self.perspective_loop.is_running()
    }

    /// Cancel both frame loops. Input still updates state but nothing is
    /// rendered by the loops afterwards.
    pub fn stop(&self) {
        self.position_loop.stop();
        self.perspective_loop.stop();
    }
}
