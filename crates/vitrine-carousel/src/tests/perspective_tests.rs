use super::*;

use crate::surface::HorizontalBounds;
use std::cell::RefCell;

struct StubCard {
    bounds: HorizontalBounds,
    pinned: bool,
    transform: RefCell<Option<String>>,
}

impl StubCard {
    fn at_center(center: f64, pinned: bool) -> Self {
        Self {
            bounds: HorizontalBounds::new(center - 170.0, 340.0),
            pinned,
            transform: RefCell::new(None),
        }
    }
}

impl CardSurface for StubCard {
    fn horizontal_bounds(&self) -> HorizontalBounds {
        self.bounds
    }

    fn is_hover_pinned(&self) -> bool {
        self.pinned
    }

    fn set_transform(&self, transform: &str) {
        *self.transform.borrow_mut() = Some(transform.to_owned());
    }
}

struct StubCards(Vec<StubCard>);

impl CardCollection for StubCards {
    fn visit_cards(&self, visitor: &mut dyn FnMut(&dyn CardSurface)) {
        for card in &self.0 {
            visitor(card);
        }
    }
}

const VIEWPORT: f64 = 1200.0;

#[test]
fn centered_card_is_flat_and_edge_card_is_clamped() {
    let settings = PerspectiveSettings::default();
    assert_eq!(rotation_for_distance(0.0, &settings), 0.0);
    assert_eq!(rotation_for_distance(1.0, &settings), -8.0);
    assert_eq!(rotation_for_distance(-1.0, &settings), 8.0);
}

#[test]
fn dead_zone_suppresses_small_offsets() {
    let settings = PerspectiveSettings::default();
    assert_eq!(rotation_for_distance(0.2, &settings), 0.0);
    assert_eq!(rotation_for_distance(-0.15, &settings), 0.0);
}

#[test]
fn rotation_grows_linearly_past_dead_zone() {
    let settings = PerspectiveSettings::default();
    let quarter = rotation_for_distance(-0.45, &settings);
    assert!((quarter - 4.0).abs() < 1e-9, "got {quarter}");
    let right = rotation_for_distance(0.45, &settings);
    assert!((right + 4.0).abs() < 1e-9, "got {right}");
}

#[test]
fn normalized_distance_uses_half_viewport() {
    assert_eq!(normalized_distance(600.0, VIEWPORT), 0.0);
    assert_eq!(normalized_distance(1200.0, VIEWPORT), 1.0);
    assert_eq!(normalized_distance(0.0, VIEWPORT), -1.0);
    assert_eq!(normalized_distance(300.0, 0.0), 0.0);
}

#[test]
fn pointer_devices_tilt_unpinned_cards() {
    let cards = StubCards(vec![
        StubCard::at_center(0.0, false),
        StubCard::at_center(600.0, false),
        StubCard::at_center(1200.0, true),
        StubCard::at_center(1200.0, false),
    ]);
    let updater = PerspectiveUpdater::new(PerspectiveSettings::default(), DeviceClass::Pointer);

    let rotations = updater.update(&cards, VIEWPORT);
    assert_eq!(rotations.as_slice(), &[8.0, 0.0, -8.0]);
    assert_eq!(
        cards.0[1].transform.borrow().as_deref(),
        Some("perspective(1200px) rotateY(0deg) translateZ(0)")
    );
    assert_eq!(*cards.0[2].transform.borrow(), None, "pinned card untouched");
}

#[test]
fn touch_devices_never_tilt() {
    let cards = StubCards(vec![
        StubCard::at_center(0.0, false),
        StubCard::at_center(1200.0, false),
    ]);
    let updater = PerspectiveUpdater::new(PerspectiveSettings::default(), DeviceClass::Touch);

    assert!(!updater.is_enabled());
    assert!(updater.update(&cards, VIEWPORT).is_empty());
    assert!(cards.0.iter().all(|card| card.transform.borrow().is_none()));
}
