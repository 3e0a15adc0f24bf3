//! Tunables for the carousel.
//!
//! Defaults match the services section of the site: eight 380 px cards, a
//! 45 second auto-scroll cycle and a rewrap margin of ten card widths.

use vitrine_core::device::MOBILE_BREAKPOINT;
use vitrine_core::DeviceClass;

/// Perspective tilt applied to cards on pointer devices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveSettings {
    /// Normalized distance from the viewport center with no rotation.
    pub dead_zone: f64,
    /// Largest rotation in degrees.
    pub max_rotation_deg: f64,
    /// Degrees per unit of normalized distance, as a multiple of `max_rotation_deg`.
    pub rotation_gain: f64,
    /// CSS `perspective()` depth in pixels.
    pub perspective_px: f64,
}

impl Default for PerspectiveSettings {
    fn default() -> Self {
        Self {
            dead_zone: 0.2,
            max_rotation_deg: 8.0,
            rotation_gain: 2.0,
            perspective_px: 1200.0,
        }
    }
}

/// Carousel configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselSettings {
    /// Horizontal pitch of one card, margins included, in CSS pixels.
    pub card_width: f64,
    /// Number of distinct cards in one repetition of the sequence.
    pub card_count: usize,
    /// Time for the auto-scroll to travel one loop distance.
    pub cycle_duration_millis: f64,
    /// Pointer-to-offset multiplier on touch devices.
    pub touch_drag_sensitivity: f64,
    /// Pointer-to-offset multiplier for mouse input.
    pub pointer_drag_sensitivity: f64,
    /// Multiplier from wheel `deltaX` to offset.
    pub wheel_gain: f64,
    /// Wheel events with `|deltaX|` below this are left to the page.
    pub wheel_dead_zone: f64,
    /// Magnitude of the accumulated offset that triggers a rewrap.
    pub max_offset: f64,
    /// Also rewrap after wheel input, not only when a drag ends.
    pub rewrap_on_wheel: bool,
    /// Viewport width at or below which the device counts as touch.
    pub mobile_breakpoint: f64,
    pub perspective: PerspectiveSettings,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            card_width: 380.0,
            card_count: 8,
            cycle_duration_millis: 45_000.0,
            touch_drag_sensitivity: 1.5,
            pointer_drag_sensitivity: 1.2,
            wheel_gain: 2.0,
            wheel_dead_zone: 1.0,
            max_offset: 3_800.0,
            rewrap_on_wheel: true,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            perspective: PerspectiveSettings::default(),
        }
    }
}

impl CarouselSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card pitch and count. The rewrap margin follows at ten card
    /// widths, or one loop distance for longer sequences; call
    /// [`with_max_offset`](Self::with_max_offset) afterwards to override it.
    pub fn with_cards(mut self, card_count: usize, card_width: f64) -> Self {
        self.card_count = card_count;
        self.card_width = card_width;
        self.max_offset = (card_width * 10.0).max(self.loop_distance().abs());
        self
    }

    pub fn with_cycle_duration(mut self, millis: f64) -> Self {
        self.cycle_duration_millis = millis;
        self
    }

    pub fn with_drag_sensitivity(mut self, touch: f64, pointer: f64) -> Self {
        self.touch_drag_sensitivity = touch;
        self.pointer_drag_sensitivity = pointer;
        self
    }

    pub fn with_wheel_gain(mut self, gain: f64) -> Self {
        self.wheel_gain = gain;
        self
    }

    /// Never below one loop distance, so a rewrapped offset is always within
    /// the margin.
    pub fn with_max_offset(mut self, max_offset: f64) -> Self {
        self.max_offset = max_offset.max(self.loop_distance().abs());
        self
    }

    /// Margin actually used for rewrapping. Equal to `max_offset` unless the
    /// field was set directly below one loop distance.
    pub fn rewrap_margin(&self) -> f64 {
        self.max_offset.max(self.loop_distance().abs())
    }

    pub fn with_rewrap_on_wheel(mut self, enabled: bool) -> Self {
        self.rewrap_on_wheel = enabled;
        self
    }

    pub fn with_mobile_breakpoint(mut self, width: f64) -> Self {
        self.mobile_breakpoint = width;
        self
    }

    pub fn with_perspective(mut self, perspective: PerspectiveSettings) -> Self {
        self.perspective = perspective;
        self
    }

    /// Signed width of one repetition of the card sequence. Negative because
    /// the track scrolls to the left.
    pub fn loop_distance(&self) -> f64 {
        -self.card_width * self.card_count as f64
    }

    pub fn drag_sensitivity_for(&self, device: DeviceClass) -> f64 {
        match device {
            DeviceClass::Touch => self.touch_drag_sensitivity,
            DeviceClass::Pointer => self.pointer_drag_sensitivity,
        }
    }

    /// Auto-scroll contribution after `elapsed_millis`.
    pub fn base_position(&self, elapsed_millis: f64) -> f64 {
        if self.cycle_duration_millis <= 0.0 {
            return 0.0;
        }
        let progress = (elapsed_millis / self.cycle_duration_millis).rem_euclid(1.0);
        progress * self.loop_distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_eight_card_track() {
        let settings = CarouselSettings::default();
        assert_eq!(settings.loop_distance(), -3040.0);
        assert_eq!(settings.max_offset, 3800.0);
        assert_eq!(settings.drag_sensitivity_for(DeviceClass::Touch), 1.5);
        assert_eq!(settings.drag_sensitivity_for(DeviceClass::Pointer), 1.2);
    }

    #[test]
    fn with_cards_moves_rewrap_margin() {
        let settings = CarouselSettings::new().with_cards(6, 300.0);
        assert_eq!(settings.loop_distance(), -1800.0);
        assert_eq!(settings.max_offset, 3000.0);

        let settings = settings.with_max_offset(5000.0);
        assert_eq!(settings.max_offset, 5000.0);
    }

    #[test]
    fn rewrap_margin_covers_long_sequences() {
        let settings = CarouselSettings::new().with_cards(12, 380.0);
        assert_eq!(settings.loop_distance(), -4560.0);
        assert_eq!(settings.max_offset, 4560.0);

        let settings = settings.with_max_offset(1000.0);
        assert_eq!(settings.max_offset, 4560.0);

        let mut settings = CarouselSettings::default();
        settings.max_offset = 500.0;
        assert_eq!(settings.rewrap_margin(), 3040.0);
    }

    #[test]
    fn base_position_wraps_each_cycle() {
        let settings = CarouselSettings::default();
        assert_eq!(settings.base_position(0.0), 0.0);
        assert_eq!(settings.base_position(22_500.0), -1520.0);
        assert_eq!(settings.base_position(45_000.0), 0.0);
        assert_eq!(settings.base_position(67_500.0), -1520.0);
    }

    #[test]
    fn zero_cycle_duration_holds_still() {
        let settings = CarouselSettings::default().with_cycle_duration(0.0);
        assert_eq!(settings.base_position(10_000.0), 0.0);
    }
}
