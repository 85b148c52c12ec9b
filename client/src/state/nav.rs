//! Navigation bar state: mobile menu and scrolled header style.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::scroll::is_scrolled;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub menu_open: bool,
    /// Drives the opaque header style; visual only.
    pub scrolled: bool,
}

impl NavBarState {
    /// One tap on the menu control.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any navigation closes the mobile menu.
    pub fn navigate(&mut self) {
        self.menu_open = false;
    }

    pub fn observe_scroll(&mut self, scroll_y: f64) {
        self.scrolled = is_scrolled(scroll_y);
    }

    #[must_use]
    pub fn header_class(&self) -> &'static str {
        if self.scrolled { "nav-bar nav-bar--scrolled" } else { "nav-bar" }
    }
}
