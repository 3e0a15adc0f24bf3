//! DOM event listeners that unregister themselves when dropped.

use vitrine_carousel::{CarouselInput, EventDisposition};
use vitrine_core::DeviceClass;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, MouseEvent, TouchEvent, WheelEvent,
};

use crate::dom::HOVER_ACTIVE_CLASS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// `false` allows the handler to call `preventDefault` on touch and wheel.
    pub passive: bool,
    pub capture: bool,
}

impl ListenerOptions {
    pub const ACTIVE: Self = Self {
        passive: false,
        capture: false,
    };

    pub const CAPTURE: Self = Self {
        passive: false,
        capture: true,
    };
}

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        options: ListenerOptions,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let add_options = AddEventListenerOptions::new();
        add_options.set_passive(options.passive);
        add_options.set_capture(options.capture);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &add_options,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            capture: options.capture,
            callback,
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
        if let Err(err) = removed {
            log::warn!("failed to remove {} listener: {err:?}", self.event_type);
        }
    }
}

/// Client X of a mouse event, or of the first active touch.
fn pointer_x(event: &Event) -> Option<f64> {
    if event.type_().starts_with("touch") {
        let touches = event.dyn_ref::<TouchEvent>()?.touches();
        return touches.get(0).map(|touch| touch.client_x() as f64);
    }
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| mouse.client_x() as f64)
}

fn apply_disposition(event: &Event, disposition: EventDisposition) {
    if disposition.is_consumed() {
        event.prevent_default();
    }
}

fn listen(
    listeners: &mut Vec<EventListener>,
    target: &EventTarget,
    event_type: &'static str,
    options: ListenerOptions,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    listeners.push(EventListener::new(target, event_type, options, handler)?);
    Ok(())
}

fn on_start(input: CarouselInput) -> impl FnMut(Event) {
    move |event: Event| {
        if let Some(x) = pointer_x(&event) {
            apply_disposition(&event, input.start_drag(x));
        }
    }
}

fn on_drag(input: CarouselInput) -> impl FnMut(Event) {
    move |event: Event| {
        if let Some(x) = pointer_x(&event) {
            apply_disposition(&event, input.drag(x));
        }
    }
}

fn on_end(input: CarouselInput) -> impl FnMut(Event) {
    move |_event: Event| input.end_drag()
}

/// Register the drag, wheel, context-menu and hover listeners.
///
/// Mouse, wheel and hover listeners are only bound on pointer devices; touch
/// listeners are always bound.
pub fn bind_carousel_listeners(
    container: &EventTarget,
    track: &EventTarget,
    card_selector: &str,
    input: &CarouselInput,
    device: DeviceClass,
) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::new();
    let pointer_device = !device.is_touch();
    let plain = ListenerOptions::default();

    if pointer_device {
        listen(&mut listeners, container, "mousedown", plain, on_start(input.clone()))?;
        listen(&mut listeners, container, "mousemove", plain, on_drag(input.clone()))?;
        listen(&mut listeners, container, "mouseup", plain, on_end(input.clone()))?;
        listen(&mut listeners, container, "mouseleave", plain, on_end(input.clone()))?;
    }

    let active = ListenerOptions::ACTIVE;
    listen(&mut listeners, container, "touchstart", active, on_start(input.clone()))?;
    listen(&mut listeners, container, "touchmove", active, on_drag(input.clone()))?;
    listen(&mut listeners, container, "touchend", plain, on_end(input.clone()))?;
    listen(&mut listeners, container, "touchcancel", plain, on_end(input.clone()))?;

    if pointer_device {
        let wheel_input = input.clone();
        listen(&mut listeners, container, "wheel", active, move |event: Event| {
            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                let disposition = wheel_input.handle_wheel(wheel.delta_x(), wheel.delta_y());
                apply_disposition(&event, disposition);
            }
        })?;
    }

    let menu_input = input.clone();
    listen(&mut listeners, container, "contextmenu", plain, move |event: Event| {
        if menu_input.is_dragging() {
            event.prevent_default();
        }
    })?;

    if pointer_device {
        for (event_type, pinned) in [("mouseenter", true), ("mouseleave", false)] {
            let selector = card_selector.to_owned();
            listen(&mut listeners, track, event_type, ListenerOptions::CAPTURE, move |event: Event| {
                set_hover_pin(&event, &selector, pinned);
            })?;
        }
    }

    Ok(listeners)
}

fn set_hover_pin(event: &Event, card_selector: &str, pinned: bool) {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(card)) = target.closest(card_selector) else {
        return;
    };
    let classes = card.class_list();
    let result = if pinned {
        classes.add_1(HOVER_ACTIVE_CLASS)
    } else {
        classes.remove_1(HOVER_ACTIVE_CLASS)
    };
    if let Err(err) = result {
        log::warn!("failed to toggle {HOVER_ACTIVE_CLASS}: {err:?}");
    }
}
