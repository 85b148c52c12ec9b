//! Smooth scrolling to in-page sections under a fixed header.
//!
//! The header is `position: fixed`, so a native fragment jump would hide the
//! first `HEADER_OFFSET_PX` of the target section. Targets are computed by
//! hand and handed to `window.scrollTo` with smooth behavior instead. A call
//! made while a previous animation is running simply retargets it.
//!
//! Requires a browser environment; SSR and native test builds no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::content::nav::SectionId;

/// Height of the fixed navigation bar.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Vertical scroll past which the header switches to its opaque style.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Document-relative scroll position that puts an element just below the
/// header. `element_top` is viewport-relative and may be negative when the
/// element is above the fold.
#[must_use]
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET_PX
}

/// Whether the page counts as scrolled for header styling.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Strip an optional `#` and surrounding whitespace. Empty ids yield `None`.
#[must_use]
pub fn normalize_section_id(raw: &str) -> Option<&str> {
    let id = raw.trim();
    let id = id.strip_prefix('#').unwrap_or(id);
    if id.is_empty() { None } else { Some(id) }
}

/// Scroll to a known section.
pub fn scroll_to(section: SectionId) {
    scroll_to_section(section.as_str());
}

/// Smooth-scroll to the element whose id is `raw` (with or without `#`).
///
/// A missing element is not an error: the call does nothing.
pub fn scroll_to_section(raw: &str) {
    let Some(id) = normalize_section_id(raw) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let element_top = element.get_bounding_client_rect().top();
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(element_top, current_scroll_y()));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Section named by the URL fragment on arrival (`/#contato`), if any.
///
/// The native jump on load ignores the fixed header, so the nav bar re-scrolls
/// to this section once hydrated.
pub fn fragment_section() -> Option<SectionId> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        SectionId::parse(&hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current vertical scroll offset of the window, `0.0` outside a browser.
pub fn current_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
