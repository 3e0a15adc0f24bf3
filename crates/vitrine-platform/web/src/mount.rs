//! Mounting the services carousel on page elements.

use std::rc::Rc;

use vitrine_carousel::{Carousel, CarouselHost, CarouselSettings, CarouselState};
use vitrine_core::{Clock, FrameScheduler, InstantClock, MountError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::device::detect_device_class;
use crate::dom::{DomCards, DomContainer, DomTrack, WindowViewport};
use crate::listeners::{bind_carousel_listeners, EventListener};
use crate::scheduler::AnimationFrameScheduler;
use crate::track::ensure_track_copies;

/// Element ids and selectors the carousel is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselIds {
    pub container: String,
    pub track: String,
    pub card_selector: String,
    /// Stylesheet-driven scroll class removed once the frame loop takes over.
    pub css_animation_class: String,
    /// Repetitions of the card sequence to keep in the track.
    pub track_copies: usize,
}

impl Default for CarouselIds {
    fn default() -> Self {
        Self {
            container: "servicesCarousel".into(),
            track: "carouselTrack".into(),
            card_selector: ".service-card".into(),
            css_animation_class: "carousel-track--auto-scroll".into(),
            track_copies: 2,
        }
    }
}

/// A carousel running in the page. Dropping it, or calling
/// [`stop`](Self::stop), removes the listeners and cancels the frame loops.
pub struct WebCarousel {
    carousel: Carousel,
    scheduler: Rc<AnimationFrameScheduler>,
    listeners: Vec<EventListener>,
}

impl WebCarousel {
    pub fn state(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn is_running(&self) -> bool {
        self.carousel.is_running()
    }

    pub fn stop(&mut self) {
        self.carousel.stop();
        self.listeners.clear();
        self.scheduler.shutdown();
    }
}

impl Drop for WebCarousel {
    fn drop(&mut self) {
        self.stop();
    }
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Bind the carousel to the elements named in `ids`.
///
/// Returns `Ok(None)` when the page does not contain the carousel; that is
/// not an error for a page component. JavaScript failures while wiring up
/// are returned as `Err`.
pub fn mount(ids: &CarouselIds, settings: CarouselSettings) -> Result<Option<WebCarousel>, JsValue> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return skip(ids, MountError::NoWindow),
    };
    let document = match window.document() {
        Some(document) => document,
        None => return skip(ids, MountError::NoDocument),
    };
    let container = html_element_by_id(&document, &ids.container);
    let track = html_element_by_id(&document, &ids.track);
    let (container, track) = match (container, track) {
        (Some(container), Some(track)) => (container, track),
        (None, _) => return skip(ids, MountError::MissingContainer),
        (_, None) => return skip(ids, MountError::MissingTrack),
    };

    let device = detect_device_class(&window, settings.mobile_breakpoint);
    let card_count = ensure_track_copies(
        &track,
        &ids.card_selector,
        settings.card_count,
        ids.track_copies,
    )?;
    track.class_list().remove_1(&ids.css_animation_class)?;

    let clock: Rc<dyn Clock> = Rc::new(InstantClock::new());
    let scheduler = Rc::new(AnimationFrameScheduler::new(window.clone(), Rc::clone(&clock)));
    let frame_scheduler: Rc<dyn FrameScheduler> = scheduler.clone();

    let host = CarouselHost {
        container: Some(Rc::new(DomContainer::new(container.clone()))),
        track: Some(Rc::new(DomTrack::new(window.clone(), track.clone()))),
        cards: Rc::new(DomCards::new(track.clone().into(), ids.card_selector.clone())),
        viewport: Rc::new(WindowViewport::new(window)),
        scheduler: frame_scheduler,
        clock,
        device,
    };
    let carousel = match Carousel::mount(settings, host) {
        Ok(carousel) => carousel,
        Err(err) => return skip(ids, err),
    };

    let listeners = bind_carousel_listeners(
        &container,
        &track,
        &ids.card_selector,
        &carousel.input(),
        device,
    )?;

    log::debug!(
        "services carousel mounted on #{} with {card_count} cards ({device:?})",
        ids.container
    );

    Ok(Some(WebCarousel {
        carousel,
        scheduler,
        listeners,
    }))
}

/// [`mount`] with the default ids, logging instead of failing.
pub fn mount_services_carousel(settings: CarouselSettings) -> Option<WebCarousel> {
    match mount(&CarouselIds::default(), settings) {
        Ok(carousel) => carousel,
        Err(err) => {
            log::warn!("services carousel failed to start: {err:?}");
            None
        }
    }
}

fn skip(ids: &CarouselIds, reason: MountError) -> Result<Option<WebCarousel>, JsValue> {
    log::debug!(
        "services carousel not mounted (#{}, #{}): {reason}",
        ids.container,
        ids.track
    );
    Ok(None)
}
