//! Wasm entry point for the services section.
//!
//! Load the generated module with `<script type="module">` at the end of the
//! page so `#servicesCarousel` and `#carouselTrack` exist when it starts.

use std::cell::RefCell;

use vitrine_carousel::CarouselSettings;
use vitrine_platform_web::{mount_services_carousel, WebCarousel};
use wasm_bindgen::prelude::*;

thread_local! {
    static SERVICES_CAROUSEL: RefCell<Option<WebCarousel>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "logging")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    let carousel = mount_services_carousel(CarouselSettings::default());
    if carousel.is_none() {
        log::info!("services carousel not present on this page");
    }
    SERVICES_CAROUSEL.with(|slot| *slot.borrow_mut() = carousel);
}

/// Tear the carousel down, e.g. before a client-side navigation replaces
/// the section.
#[wasm_bindgen(js_name = stopServicesCarousel)]
pub fn stop_services_carousel() {
    let carousel = SERVICES_CAROUSEL.with(|slot| slot.borrow_mut().take());
    if let Some(mut carousel) = carousel {
        carousel.stop();
        log::debug!("services carousel stopped");
    }
}
