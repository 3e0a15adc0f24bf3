//! Y-axis tilt of cards by distance from the viewport center.
//!
//! Purely a rendering side effect: nothing here feeds back into the position
//! engine. Touch devices get no tilt at all since it is a hover affordance.

use smallvec::SmallVec;
use vitrine_core::DeviceClass;

use crate::settings::PerspectiveSettings;
use crate::surface::{CardCollection, CardSurface};
use crate::transform;

/// Rotations written during one update, in visit order.
pub type CardRotations = SmallVec<[f64; 16]>;

/// Signed distance of `card_center` from the viewport center, in half
/// viewport widths. Roughly `-1..=1` for visible cards.
pub fn normalized_distance(card_center: f64, viewport_width: f64) -> f64 {
    let half = viewport_width / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    (card_center - half) / half
}

/// Rotation in degrees for a card at normalized distance `d`.
///
/// Cards left of center turn positive, cards right of center negative.
pub fn rotation_for_distance(d: f64, settings: &PerspectiveSettings) -> f64 {
    let past_dead_zone = d.abs() - settings.dead_zone;
    if past_dead_zone <= 0.0 {
        return 0.0;
    }
    let magnitude = (past_dead_zone * settings.max_rotation_deg * settings.rotation_gain)
        .min(settings.max_rotation_deg);
    if d < 0.0 {
        magnitude
    } else {
        -magnitude
    }
}

#[derive(Clone, Debug)]
pub struct PerspectiveUpdater {
    settings: PerspectiveSettings,
    device: DeviceClass,
}

impl PerspectiveUpdater {
    pub fn new(settings: PerspectiveSettings, device: DeviceClass) -> Self {
        Self { settings, device }
    }

    pub fn is_enabled(&self) -> bool {
        !self.device.is_touch()
    }

    /// Tilt every card that is not hover-pinned.
    pub fn update(&self, cards: &dyn CardCollection, viewport_width: f64) -> CardRotations {
        let mut rotations = CardRotations::new();
        if !self.is_enabled() {
            return rotations;
        }
        cards.visit_cards(&mut |card: &dyn CardSurface| {
            if card.is_hover_pinned() {
                return;
            }
            let d = normalized_distance(card.horizontal_bounds().center(), viewport_width);
            let rotation = rotation_for_distance(d, &self.settings);
            card.set_transform(&transform::card_rotation(
                rotation,
                self.settings.perspective_px,
            ));
            rotations.push(rotation);
        });
        rotations
    }
}

#[cfg(test)]
#[path = "tests/perspective_tests.rs"]
mod tests;
