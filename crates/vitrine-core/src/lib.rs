//! Runtime services shared by the Vitrine page components.
//!
//! Nothing in here touches the DOM. Hosts plug in a [`FrameScheduler`] and a
//! [`Clock`]; the browser adapter lives in `vitrine-platform-web`, and the
//! testing crate provides manual implementations driven by tests.

pub mod device;
pub mod error;
pub mod frame_clock;
pub mod platform;

pub use device::DeviceClass;
pub use error::MountError;
pub use frame_clock::{
    FrameCallback, FrameCallbackId, FrameCallbackRegistration, FrameCallbacks, FrameLoop,
    FrameScheduler,
};
pub use platform::{Clock, InstantClock};
