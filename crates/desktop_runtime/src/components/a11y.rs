//! DOM focus and menu-keyboard helpers for desktop shell widgets.

use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn active_element_id() -> Option<String> {
    document()
        .and_then(|document| document.active_element())
        .map(|element| element.id())
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = document().and_then(|document| document.get_element_by_id(id)) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    element.focus().is_ok()
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = document().and_then(|document| document.get_element_by_id(menu_id)) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]"#) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| item.get_attribute("aria-disabled").as_deref() != Some("true"))
        .collect()
}

/// Index reached by a roving-focus key from `current` in a list of `len` items.
fn roving_target(key: &str, current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0);
    match key {
        "ArrowDown" => Some((current + 1) % len),
        "ArrowUp" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

/// Focuses the first enabled menu item inside a menu container.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    menu_items(menu_id)
        .first()
        .is_some_and(|item| item.focus().is_ok())
}

/// Handles arrow/home/end menu navigation and prevents default when handled.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let items = menu_items(menu_id);
    let active_id = active_element_id().unwrap_or_default();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id);
    let Some(target) = roving_target(&ev.key(), current, items.len()) else {
        return false;
    };

    let _ = items[target].focus();
    ev.prevent_default();
    ev.stop_propagation();
    true
}
