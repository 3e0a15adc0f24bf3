//! Infinite services carousel.
//!
//! A track of repeated cards scrolls left on a fixed cycle. Visitors can drag
//! it with a mouse or finger and push it with horizontal wheel input; manual
//! movement is kept in a separate offset that is summed with the clock-driven
//! position every frame. On pointer devices each card also tilts toward the
//! viewport center.
//!
//! The crate is host-agnostic: elements are reached through the traits in
//! [`surface`], frames through [`vitrine_core::FrameScheduler`].

pub mod carousel;
pub mod engine;
pub mod perspective;
pub mod settings;
pub mod state;
pub mod surface;
pub mod transform;

pub use carousel::{Carousel, CarouselHost, CarouselInput};
pub use engine::CarouselEngine;
pub use perspective::{CardRotations, PerspectiveUpdater};
pub use settings::{CarouselSettings, PerspectiveSettings};
pub use state::{CarouselState, DragInput, EventDisposition, WheelInput};
pub use surface::{
    CardCollection, CardSurface, ContainerSurface, Cursor, HorizontalBounds, TrackSurface,
    Viewport,
};
