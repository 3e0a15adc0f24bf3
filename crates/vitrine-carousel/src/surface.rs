//! Capabilities the carousel needs from its host.
//!
//! In the browser these are DOM elements; in tests they are in-memory fakes.
//! All methods take `&self` because element handles are shared and mutated
//! through the host, not through Rust ownership.

/// Cursor hint shown on the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// The element receiving pointer, touch and wheel input.
pub trait ContainerSurface {
    fn set_cursor(&self, cursor: Cursor);
}

/// The element holding every card copy; moved horizontally.
pub trait TrackSurface {
    /// Transform as currently rendered (computed style), if available.
    fn rendered_transform(&self) -> Option<String>;

    fn set_transform(&self, transform: &str);
}

/// Horizontal extent of a card in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HorizontalBounds {
    pub left: f64,
    pub width: f64,
}

impl HorizontalBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

pub trait CardSurface {
    fn horizontal_bounds(&self) -> HorizontalBounds;

    /// Hovered cards keep whatever transform the stylesheet gives them.
    fn is_hover_pinned(&self) -> bool;

    fn set_transform(&self, transform: &str);
}

/// Live view of the cards inside the track.
pub trait CardCollection {
    fn visit_cards(&self, visitor: &mut dyn FnMut(&dyn CardSurface));
}

pub trait Viewport {
    fn width(&self) -> f64;
}
