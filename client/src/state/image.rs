//! Load state of a single remote image.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// What `HTMLImageElement` reports about itself at a given moment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageElementSnapshot {
    pub complete: bool,
    /// `currentSrc` is non-empty, i.e. the browser picked and requested a source.
    pub has_current_src: bool,
    pub natural_width: u32,
}

/// Lifecycle of one `<img>` instance.
///
/// Only `Loading` moves; `Loaded` and `Errored` are terminal and absorb every
/// later event, so a late `error` after `load` (or the reverse) is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Errored,
}

impl ImageLoadState {
    #[must_use]
    pub fn on_load(self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            terminal => terminal,
        }
    }

    #[must_use]
    pub fn on_error(self) -> Self {
        match self {
            Self::Loading => Self::Errored,
            terminal => terminal,
        }
    }

    /// Catch up with an `<img>` inspected after hydration, whose `load`
    /// event may have fired before the handler was attached.
    ///
    /// Only a fetched, decoded image with a non-zero width counts as
    /// loaded. Anything else (a deferred lazy fetch, an image with no
    /// intrinsic size, a real failure) stays `Loading` and is left to the
    /// `load`/`error` events; this never produces `Errored`.
    #[must_use]
    pub fn reconcile(self, element: ImageElementSnapshot) -> Self {
        if element.complete && element.has_current_src && element.natural_width > 0 {
            self.on_load()
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// CSS modifier for the wrapper element.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Loading => "resilient-image--loading",
            Self::Loaded => "resilient-image--loaded",
            Self::Errored => "resilient-image--errored",
        }
    }
}
