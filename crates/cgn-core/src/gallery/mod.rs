//! Gallery viewer state machine.
//!
//! All interactive state of the page lives in one [`ViewState`]: the
//! mobile menu, the active work-category modal, the zoomed image and the
//! pagination counter of the paginated category. Every user event is
//! turned into a [`GalleryAction`] and applied through
//! [`ViewState::apply`], so the layering rules are enforced in one place.
//!
//! ## States
//!
//! ```text
//! Idle ──open category──▶ ModalOpen ──open zoom──▶ Zoomed
//!  ▲                        │  ▲                     │
//!  └────────dismiss─────────┘  └───────dismiss───────┘
//! ```
//!
//! The menu flag is orthogonal and combines with any of the three phases.
//! A dismissal closes exactly one layer: zoom, else modal, else menu.

mod dismiss;
mod modal;
mod pagination;
mod zoom;

pub use dismiss::Layer;
pub use modal::PointerTarget;
pub use pagination::{PageControl, PageStatus};

use crate::catalog::{Catalog, CategoryId, ImageRef};
use crate::error::{SiteError, SiteResult};

/// Images revealed per page in the paginated category.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// The one category large enough to reveal incrementally.
pub const DEFAULT_PAGINATED_CATEGORY: &str = "estruturas";

/// Behavior knobs for the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPolicy {
    /// Initial page size and increment for "show more"
    pub page_size: usize,
    /// Category revealed page by page; all others show every image
    pub paginated_category: Option<CategoryId>,
    /// Whether a click on the modal overlay (outside the content) closes it
    pub close_on_overlay_click: bool,
}

impl Default for GalleryPolicy {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            paginated_category: Some(CategoryId::from(DEFAULT_PAGINATED_CATEGORY)),
            close_on_overlay_click: false,
        }
    }
}

/// Immutable half of the gallery: catalog plus policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    catalog: Catalog,
    policy: GalleryPolicy,
}

impl Gallery {
    /// Pair a catalog with a policy, validating the policy against it.
    pub fn new(catalog: Catalog, policy: GalleryPolicy) -> SiteResult<Self> {
        if policy.page_size == 0 {
            return Err(SiteError::InvalidPageSize(policy.page_size));
        }
        if let Some(ref id) = policy.paginated_category {
            if catalog.get(id.as_str()).is_none() {
                return Err(SiteError::UnknownPaginatedCategory(id.to_string()));
            }
        }
        Ok(Self { catalog, policy })
    }

    /// Built-in catalog with the default policy.
    pub fn builtin() -> Self {
        Self {
            catalog: Catalog::builtin(),
            policy: GalleryPolicy::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &GalleryPolicy {
        &self.policy
    }

    pub fn is_paginated(&self, id: &CategoryId) -> bool {
        self.policy.paginated_category.as_ref() == Some(id)
    }
}

/// Coarse phase of the modal/zoom layers, ignoring the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ModalOpen,
    Zoomed,
}

/// A user intent, routed through [`ViewState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    ToggleMenu,
    CloseMenu,
    OpenCategory(CategoryId),
    CloseModal,
    OpenZoom(ImageRef),
    CloseZoom,
    ShowMore,
    ShowLess,
    Dismiss,
    Click(PointerTarget),
}

/// Mutable UI state of the page.
///
/// Fields are private so that every change goes through a transition
/// that keeps the invariants: zoom implies an active modal, and the
/// counter resets whenever the modal closes or changes category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_category: Option<CategoryId>,
    zoomed_image: Option<ImageRef>,
    visible_count: usize,
    menu_open: bool,
}

impl ViewState {
    /// Initial state: nothing open, counter at the first page.
    pub fn new(gallery: &Gallery) -> Self {
        Self {
            active_category: None,
            zoomed_image: None,
            visible_count: gallery.policy.page_size,
            menu_open: false,
        }
    }

    pub fn active_category(&self) -> Option<&CategoryId> {
        self.active_category.as_ref()
    }

    pub fn zoomed_image(&self) -> Option<&ImageRef> {
        self.zoomed_image.as_ref()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn phase(&self) -> Phase {
        match (&self.active_category, &self.zoomed_image) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::ModalOpen,
            (Some(_), Some(_)) => Phase::Zoomed,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu, e.g. after a nav link was followed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Apply an action and report whether anything changed.
    pub fn apply(&mut self, gallery: &Gallery, action: GalleryAction) -> bool {
        let before = self.clone();

        match &action {
            GalleryAction::ToggleMenu => self.toggle_menu(),
            GalleryAction::CloseMenu => self.close_menu(),
            GalleryAction::OpenCategory(id) => self.open_category(gallery, id.as_str()),
            GalleryAction::CloseModal => self.close_modal(gallery),
            GalleryAction::OpenZoom(image) => {
                self.open_zoom(image.clone());
            }
            GalleryAction::CloseZoom => self.close_zoom(),
            GalleryAction::ShowMore => {
                self.show_more(gallery);
            }
            GalleryAction::ShowLess => {
                self.show_less(gallery);
            }
            GalleryAction::Dismiss => {
                if let Some(layer) = self.dismiss(gallery) {
                    tracing::debug!(?layer, "Dismissed layer");
                }
            }
            GalleryAction::Click(target) => {
                self.click(gallery, *target);
            }
        }

        let changed = *self != before;
        tracing::debug!(?action, changed, phase = ?self.phase(), "Gallery transition");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{range_images, Category};

    #[test]
    fn test_initial_state() {
        let gallery = Gallery::builtin();
        let state = ViewState::new(&gallery);

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.menu_open());
        assert_eq!(state.visible_count(), DEFAULT_PAGE_SIZE);
        assert!(state.active_category().is_none());
        assert!(state.zoomed_image().is_none());
    }

    #[test]
    fn test_menu_is_independent_of_modal() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.toggle_menu();
        state.open_category(&gallery, "grades");
        assert!(state.menu_open());
        assert_eq!(state.phase(), Phase::ModalOpen);

        state.toggle_menu();
        assert!(!state.menu_open());
        assert_eq!(state.active_category().map(|c| c.as_str()), Some("grades"));
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.close_menu();
        assert!(!state.menu_open());
        state.toggle_menu();
        state.close_menu();
        state.close_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_apply_reports_changes() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        assert!(state.apply(&gallery, GalleryAction::OpenCategory("portoes".into())));
        assert!(!state.apply(&gallery, GalleryAction::ShowMore));
        assert!(state.apply(&gallery, GalleryAction::OpenZoom(ImageRef::new("/portao2.jpg"))));
        assert!(state.apply(&gallery, GalleryAction::Dismiss));
        assert_eq!(state.phase(), Phase::ModalOpen);
        assert!(state.apply(&gallery, GalleryAction::CloseModal));
        assert!(!state.apply(&gallery, GalleryAction::Dismiss));
    }

    #[test]
    fn test_gallery_rejects_zero_page_size() {
        let policy = GalleryPolicy {
            page_size: 0,
            ..GalleryPolicy::default()
        };
        let result = Gallery::new(Catalog::builtin(), policy);
        assert!(matches!(result, Err(SiteError::InvalidPageSize(0))));
    }

    #[test]
    fn test_gallery_rejects_unknown_paginated_category() {
        let catalog = Catalog::new(vec![Category::new(
            "portoes",
            "Portões",
            range_images("portao", 8),
        )])
        .unwrap();
        let result = Gallery::new(catalog, GalleryPolicy::default());
        assert!(matches!(
            result,
            Err(SiteError::UnknownPaginatedCategory(id)) if id == "estruturas"
        ));
    }

    #[test]
    fn test_gallery_without_pagination() {
        let policy = GalleryPolicy {
            paginated_category: None,
            ..GalleryPolicy::default()
        };
        let gallery = Gallery::new(Catalog::builtin(), policy).unwrap();
        assert!(!gallery.is_paginated(&CategoryId::from("estruturas")));
    }
}
