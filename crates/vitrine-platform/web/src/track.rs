use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Clone the first `distinct_cards` cards until the track holds `copies`
/// repetitions of the sequence (never fewer than two, which the offset
/// rewrap needs to stay seamless). Returns the resulting card count.
///
/// Ids inside each clone get a `-copy<n>` suffix, and `aria-labelledby`
/// references are rewritten to match, so clones do not collide with the
/// originals.
pub fn ensure_track_copies(
    track: &Element,
    card_selector: &str,
    distinct_cards: usize,
    copies: usize,
) -> Result<usize, JsValue> {
    let cards = track.query_selector_all(card_selector)?;
    let present = cards.length() as usize;
    if distinct_cards == 0 || present < distinct_cards {
        return Ok(present);
    }

    let copies = copies.max(2);
    let mut total = present;
    for copy in present / distinct_cards..copies {
        for index in 0..distinct_cards {
            let Some(card) = cards.item(index as u32) else {
                continue;
            };
            let clone = card.clone_node_with_deep(true)?;
            if let Some(element) = clone.dyn_ref::<Element>() {
                suffix_ids(element, copy)?;
            }
            track.append_child(&clone)?;
            total += 1;
        }
    }
    Ok(total)
}

fn suffix_ids(root: &Element, copy: usize) -> Result<(), JsValue> {
    let suffix = |value: &str| {
        value
            .split_whitespace()
            .map(|id| format!("{id}-copy{copy}"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut elements = vec![root.clone()];
    let nested = root.query_selector_all("[id], [aria-labelledby]")?;
    for index in 0..nested.length() {
        if let Some(element) = nested.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }

    for element in elements {
        if let Some(id) = element.get_attribute("id") {
            element.set_attribute("id", &suffix(&id))?;
        }
        if let Some(labelled_by) = element.get_attribute("aria-labelledby") {
            element.set_attribute("aria-labelledby", &suffix(&labelled_by))?;
        }
    }
    Ok(())
}
