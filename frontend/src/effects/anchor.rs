use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Fragment id an in-page link should smooth-scroll to. Bare `#` and the
/// privacy link keep their default click behaviour.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "#" | "#privacy" => None,
        _ => href.strip_prefix('#').filter(|id| !id.is_empty()),
    }
}

pub fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::warn!("No element with id {} to scroll to", id);
        return;
    };

    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Click handler for `<a href={href}>` that scrolls smoothly instead of
/// jumping.
pub fn smooth_scroll(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some(id) = anchor_target(href) {
            e.prevent_default();
            scroll_to(id);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_links_resolve_to_ids() {
        assert_eq!(anchor_target("#waitlist"), Some("waitlist"));
        assert_eq!(anchor_target("#features"), Some("features"));
    }

    #[test]
    fn placeholder_and_privacy_links_are_left_alone() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#privacy"), None);
    }

    #[test]
    fn non_fragment_links_are_left_alone() {
        assert_eq!(anchor_target("mailto:hello@loreo.app"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target(""), None);
    }
}
