//! DOM-backed carousel surfaces.

use vitrine_carousel::{
    CardCollection, CardSurface, ContainerSurface, Cursor, HorizontalBounds, TrackSurface,
    Viewport,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

/// Class the hover listeners put on the card under the mouse.
pub const HOVER_ACTIVE_CLASS: &str = "hover-active";

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}: {err:?}");
    }
}

pub struct DomContainer {
    element: HtmlElement,
}

impl DomContainer {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl ContainerSurface for DomContainer {
    fn set_cursor(&self, cursor: Cursor) {
        set_style(&self.element, "cursor", cursor.as_css());
    }
}

pub struct DomTrack {
    window: Window,
    element: HtmlElement,
}

impl DomTrack {
    pub fn new(window: Window, element: HtmlElement) -> Self {
        Self { window, element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl TrackSurface for DomTrack {
    fn rendered_transform(&self) -> Option<String> {
        let style = self.window.get_computed_style(&self.element).ok()??;
        style.get_property_value("transform").ok()
    }

    fn set_transform(&self, transform: &str) {
        set_style(&self.element, "transform", transform);
    }
}

pub struct DomCard {
    element: HtmlElement,
}

impl DomCard {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl CardSurface for DomCard {
    fn horizontal_bounds(&self) -> HorizontalBounds {
        let rect = self.element.get_bounding_client_rect();
        HorizontalBounds::new(rect.left(), rect.width())
    }

    fn is_hover_pinned(&self) -> bool {
        self.element.class_list().contains(HOVER_ACTIVE_CLASS)
    }

    fn set_transform(&self, transform: &str) {
        set_style(&self.element, "transform", transform);
    }
}

/// Cards matching `selector` inside the track, queried fresh every visit so
/// cloned copies are picked up.
pub struct DomCards {
    track: Element,
    selector: String,
}

impl DomCards {
    pub fn new(track: Element, selector: impl Into<String>) -> Self {
        Self {
            track,
            selector: selector.into(),
        }
    }
}

impl CardCollection for DomCards {
    fn visit_cards(&self, visitor: &mut dyn FnMut(&dyn CardSurface)) {
        let nodes = match self.track.query_selector_all(&self.selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("card query '{}' failed: {err:?}", self.selector);
                return;
            }
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            visitor(&DomCard::new(element));
        }
    }
}

pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }
}
