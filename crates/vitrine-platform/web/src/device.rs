use vitrine_core::DeviceClass;
use web_sys::Window;

/// Sample the device class from the user agent and current viewport width.
pub fn detect_device_class(window: &Window, mobile_breakpoint: f64) -> DeviceClass {
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);
    DeviceClass::detect_with_breakpoint(&user_agent, width, mobile_breakpoint)
}
