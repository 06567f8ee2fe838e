use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls the element with the given id into view.
pub fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}' to scroll to", id),
    }
}

pub fn anchor_href(id: &str) -> String {
    format!("#{}", id)
}
