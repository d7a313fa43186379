//! Site context provider.
//!
//! Provides the gallery, the view state and section visibility to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let site = use_site();
//! let view = site.view.read();
//!
//! // In event handlers
//! onclick: move |_| site.dispatch(GalleryAction::ToggleMenu),
//! ```

use std::path::Path;

use cgn_core::{Gallery, GalleryAction, ImageRef, SectionVisibility, ViewState};
use dioxus::prelude::*;

/// Everything a section of the page needs, copyable into event handlers.
#[derive(Clone, Copy)]
pub struct SiteState {
    /// Catalog and policy, fixed for the lifetime of the app
    pub gallery: &'static Gallery,
    /// Root that image references resolve against
    pub assets_dir: &'static Path,
    /// Menu, modal, zoom and pagination
    pub view: Signal<ViewState>,
    /// Sections that have scrolled into view
    pub sections: Signal<SectionVisibility>,
}

impl SiteState {
    /// Route a user event through the gallery state machine.
    pub fn dispatch(&self, action: GalleryAction) {
        let mut view = self.view;
        view.write().apply(self.gallery, action);
    }

    /// Record an intersection report from the section observer.
    pub fn observe_section(&self, section: &str, ratio: f64) {
        let mut sections = self.sections;
        // Only write (and re-render) the first time a section shows up
        if !sections.peek().is_in_view(section) {
            sections.write().observe(section, ratio);
        }
    }

    /// `src` attribute for an image reference.
    pub fn image_src(&self, image: &ImageRef) -> String {
        image.resolve(self.assets_dir).display().to_string()
    }

    /// `src` attribute for a page asset such as the logo.
    pub fn asset_src(&self, file: &str) -> String {
        self.assets_dir.join(file).display().to_string()
    }

    /// Class attribute for a section, with `in-view` once seen.
    pub fn section_class(&self, section: &str, base: &str) -> String {
        self.sections.read().class_for(section, base)
    }
}

/// Hook to access the site state from context.
pub fn use_site() -> SiteState {
    use_context::<SiteState>()
}
