//! In-memory surfaces that behave like the DOM elements the carousel drives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vitrine_carousel::transform;
use vitrine_carousel::{
    CardCollection, CardSurface, ContainerSurface, Cursor, HorizontalBounds, TrackSurface,
    Viewport,
};

#[derive(Debug, Default)]
pub struct FakeContainer {
    cursors: RefCell<Vec<Cursor>>,
}

impl FakeContainer {
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursors.borrow().last().copied()
    }

    pub fn cursor_history(&self) -> Vec<Cursor> {
        self.cursors.borrow().clone()
    }
}

impl ContainerSurface for FakeContainer {
    fn set_cursor(&self, cursor: Cursor) {
        self.cursors.borrow_mut().push(cursor);
    }
}

/// Track whose computed transform follows its last `translate3d` write,
/// reported back in `matrix(...)` form the way `getComputedStyle` does.
#[derive(Debug, Default)]
pub struct FakeTrack {
    computed: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
}

impl FakeTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the computed transform, e.g. to simulate a CSS animation or
    /// an unreadable value.
    pub fn set_computed(&self, value: impl Into<String>) {
        *self.computed.borrow_mut() = Some(value.into());
    }

    pub fn translate_x(&self) -> f64 {
        transform::rendered_translate_x(self.computed.borrow().as_deref())
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last_write(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl TrackSurface for FakeTrack {
    fn rendered_transform(&self) -> Option<String> {
        self.computed.borrow().clone()
    }

    fn set_transform(&self, value: &str) {
        self.writes.borrow_mut().push(value.to_owned());
        let translated = value
            .strip_prefix("translate3d(")
            .and_then(|rest| rest.split("px").next())
            .and_then(|x| x.trim().parse::<f64>().ok());
        *self.computed.borrow_mut() = match translated {
            Some(x) => Some(format!("matrix(1, 0, 0, 1, {x}, 0)")),
            None => Some("none".to_owned()),
        };
    }
}

/// Card placed at a fixed slot inside a [`FakeTrack`]; its viewport position
/// follows the track.
#[derive(Debug)]
pub struct FakeCard {
    track: Rc<FakeTrack>,
    slot_left: f64,
    width: f64,
    hover_pinned: Cell<bool>,
    transform: RefCell<Option<String>>,
}

impl FakeCard {
    pub fn new(track: Rc<FakeTrack>, slot_left: f64, width: f64) -> Self {
        Self {
            track,
            slot_left,
            width,
            hover_pinned: Cell::new(false),
            transform: RefCell::new(None),
        }
    }

    pub fn set_hover_pinned(&self, pinned: bool) {
        self.hover_pinned.set(pinned);
    }

    pub fn transform(&self) -> Option<String> {
        self.transform.borrow().clone()
    }

    pub fn clear_transform(&self) {
        self.transform.borrow_mut().take();
    }
}

impl CardSurface for FakeCard {
    fn horizontal_bounds(&self) -> HorizontalBounds {
        HorizontalBounds::new(self.track.translate_x() + self.slot_left, self.width)
    }

    fn is_hover_pinned(&self) -> bool {
        self.hover_pinned.get()
    }

    fn set_transform(&self, transform: &str) {
        *self.transform.borrow_mut() = Some(transform.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct FakeCards {
    cards: Vec<Rc<FakeCard>>,
}

impl FakeCards {
    /// `count` cards laid out every `pitch` pixels from the track origin.
    pub fn along_track(track: &Rc<FakeTrack>, count: usize, pitch: f64, width: f64) -> Self {
        let cards = (0..count)
            .map(|i| Rc::new(FakeCard::new(Rc::clone(track), i as f64 * pitch, width)))
            .collect();
        Self { cards }
    }

    pub fn get(&self, index: usize) -> Option<&Rc<FakeCard>> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<FakeCard>> {
        self.cards.iter()
    }
}

impl CardCollection for FakeCards {
    fn visit_cards(&self, visitor: &mut dyn FnMut(&dyn CardSurface)) {
        for card in &self.cards {
            visitor(card.as_ref());
        }
    }
}

#[derive(Debug)]
pub struct FakeViewport {
    width: Cell<f64>,
}

impl FakeViewport {
    pub fn new(width: f64) -> Self {
        Self {
            width: Cell::new(width),
        }
    }

    pub fn resize(&self, width: f64) {
        self.width.set(width);
    }
}

impl Viewport for FakeViewport {
    fn width(&self) -> f64 {
        self.width.get()
    }
}
