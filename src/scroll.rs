// Window scroll plumbing: header shadow listener and smooth anchor scrolling.

use leptos::prelude::*;

use crate::state::{PageState, scrolled_from_offset};

/// Height of the fixed header block (header bar + segment switch), in px.
/// Smooth-scroll targets are offset by this so the header never covers them.
pub const HEADER_OFFSET_PX: f64 = 132.0;

/// Anchor ids shared between link sources and section markers.
pub mod anchors {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "quienes-somos";
    pub const SERVICES: &str = "servicios";
    pub const CONTACT: &str = "formulario";
    pub const FAQ: &str = "faq";
}

/// Keeps `scrolled` in sync with the window's vertical scroll offset.
///
/// The listener is registered when the page mounts and dropped on cleanup,
/// so a disposed page never runs the handler again.
pub fn use_scroll_shadow(page: RwSignal<PageState>) {
    use leptos::ev::scroll;

    let handle = window_event_listener(scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        page.update(|s| s.set_scrolled(scrolled_from_offset(offset)));
    });

    on_cleanup(move || drop(handle));
}

/// Smoothly scrolls the viewport so the section `id` sits just below the
/// fixed header. An id with no matching section is a silent no-op.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };

    let current = window.scroll_y().unwrap_or(0.0);
    let target = element.get_bounding_client_rect().top() + current - HEADER_OFFSET_PX;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(target.max(0.0));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Anchor navigation: scroll to the target and close the mobile menu.
pub fn navigate_to(page: RwSignal<PageState>, target: &str) {
    scroll_to_section(target);
    page.update(|s| s.close_menu());
}
