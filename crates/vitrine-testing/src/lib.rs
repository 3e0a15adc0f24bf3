//! Testing utilities and harness for Vitrine
//!
//! In-memory stand-ins for the DOM surfaces, a hand-advanced clock and frame
//! scheduler, and a robot that drives gestures against a mounted carousel.

pub mod fakes;
pub mod robot;
pub mod scheduler;

pub use fakes::*;
pub use robot::CarouselRobot;
pub use scheduler::{ManualClock, ManualFrameScheduler};

pub mod prelude {
    pub use crate::fakes::*;
    pub use crate::robot::CarouselRobot;
    pub use crate::scheduler::{ManualClock, ManualFrameScheduler};
}
