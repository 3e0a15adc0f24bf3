//! Browser adapter for Vitrine components.
//!
//! Binds the host-agnostic carousel to real DOM elements through
//! `wasm-bindgen`/`web-sys`: element surfaces, a `requestAnimationFrame`
//! scheduler, and event listeners that are removed again on teardown.

pub mod device;
pub mod dom;
pub mod listeners;
pub mod mount;
pub mod scheduler;
pub mod track;

pub use device::detect_device_class;
pub use dom::{DomCard, DomCards, DomContainer, DomTrack, WindowViewport};
pub use listeners::{EventListener, ListenerOptions};
pub use mount::{mount, mount_services_carousel, CarouselIds, WebCarousel};
pub use scheduler::AnimationFrameScheduler;
pub use track::ensure_track_copies;
