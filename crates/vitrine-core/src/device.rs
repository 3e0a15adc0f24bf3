//! Coarse input device classification.
//!
//! The class is sampled once when a component mounts. Resizing the window or
//! plugging in a mouse afterwards does not change it.

/// User agent fragments that mark a handheld, touch-first browser.
const MOBILE_USER_AGENT_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Viewport width in CSS pixels at or below which the page uses its mobile
/// layout, regardless of user agent.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Phones, tablets and narrow viewports.
    Touch,
    /// Desktop browsers driven by a mouse or trackpad.
    Pointer,
}

impl DeviceClass {
    /// Classify using the default [`MOBILE_BREAKPOINT`].
    pub fn detect(user_agent: &str, viewport_width: f64) -> Self {
        Self::detect_with_breakpoint(user_agent, viewport_width, MOBILE_BREAKPOINT)
    }

    pub fn detect_with_breakpoint(user_agent: &str, viewport_width: f64, breakpoint: f64) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();
        let mobile_agent = MOBILE_USER_AGENT_TOKENS
            .iter()
            .any(|token| user_agent.contains(token));
        if mobile_agent || viewport_width <= breakpoint {
            DeviceClass::Touch
        } else {
            DeviceClass::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, DeviceClass::Touch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_CHROME: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const IPHONE_SAFARI: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    #[test]
    fn desktop_agent_on_wide_viewport_is_pointer() {
        assert_eq!(DeviceClass::detect(DESKTOP_CHROME, 1440.0), DeviceClass::Pointer);
    }

    #[test]
    fn mobile_agent_is_touch_on_any_width() {
        assert_eq!(DeviceClass::detect(IPHONE_SAFARI, 1440.0), DeviceClass::Touch);
        assert_eq!(
            DeviceClass::detect("Opera/9.80 (J2ME/MIDP; OPERA MINI/4.2)", 1024.0),
            DeviceClass::Touch
        );
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(DeviceClass::detect(DESKTOP_CHROME, 768.0), DeviceClass::Touch);
        assert_eq!(DeviceClass::detect(DESKTOP_CHROME, 769.0), DeviceClass::Pointer);
    }

    #[test]
    fn custom_breakpoint_is_respected() {
        assert_eq!(
            DeviceClass::detect_with_breakpoint(DESKTOP_CHROME, 900.0, 1024.0),
            DeviceClass::Touch
        );
    }
}
