//! Work-category modal and pointer routing between overlay layers.

use super::{Gallery, Layer, ViewState};
use crate::catalog::Category;

/// Where a pointer click landed.
///
/// Content layers stop propagation, so a click on the modal content or on
/// the zoomed image never reaches the overlay underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Backdrop around the modal content
    ModalOverlay,
    /// Anything inside the modal content box
    ModalContent,
    /// Backdrop around the zoomed image
    ZoomOverlay,
    /// The zoomed image itself
    ZoomImage,
}

impl ViewState {
    /// Open the modal for a category.
    ///
    /// Resets the pagination counter and any zoom. An unknown id leaves
    /// the modal closed.
    pub fn open_category(&mut self, gallery: &Gallery, id: &str) {
        self.active_category = match gallery.catalog().get(id) {
            Some(category) => Some(category.id.clone()),
            None => {
                tracing::warn!(category = id, "Unknown category, keeping modal closed");
                None
            }
        };
        self.zoomed_image = None;
        self.visible_count = gallery.policy().page_size;
    }

    /// Close the modal, cascading to zoom and pagination.
    pub fn close_modal(&mut self, gallery: &Gallery) {
        self.active_category = None;
        self.zoomed_image = None;
        self.visible_count = gallery.policy().page_size;
    }

    /// Resolve the active category; `None` renders as a closed modal.
    pub fn current_category<'g>(&self, gallery: &'g Gallery) -> Option<&'g Category> {
        self.active_category
            .as_ref()
            .and_then(|id| gallery.catalog().get(id.as_str()))
    }

    /// Route a click to the layer that owns it. Returns the closed layer.
    pub fn click(&mut self, gallery: &Gallery, target: PointerTarget) -> Option<Layer> {
        match target {
            PointerTarget::ModalOverlay
                if gallery.policy().close_on_overlay_click && self.active_category.is_some() =>
            {
                self.close_modal(gallery);
                Some(Layer::Modal)
            }
            PointerTarget::ZoomOverlay if self.zoomed_image.is_some() => {
                self.close_zoom();
                Some(Layer::Zoom)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ImageRef};
    use crate::gallery::{GalleryPolicy, Phase, DEFAULT_PAGE_SIZE};

    fn gallery_with_overlay_close(close_on_overlay_click: bool) -> Gallery {
        let policy = GalleryPolicy {
            close_on_overlay_click,
            ..GalleryPolicy::default()
        };
        Gallery::new(Catalog::builtin(), policy).unwrap()
    }

    #[test]
    fn test_open_category_sets_active() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.open_category(&gallery, "grades");
        assert_eq!(state.phase(), Phase::ModalOpen);
        assert_eq!(state.current_category(&gallery).unwrap().display_name, "Grades");
    }

    #[test]
    fn test_open_unknown_category_stays_closed() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.open_category(&gallery, "portoes");
        state.open_category(&gallery, "telhados");
        assert!(state.active_category().is_none());
        assert!(state.current_category(&gallery).is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_switching_category_resets_counter_and_zoom() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.open_category(&gallery, "estruturas");
        state.show_more(&gallery);
        state.open_zoom(ImageRef::new("/estrutura3.jpg"));
        assert_eq!(state.visible_count(), 16);

        state.open_category(&gallery, "alvenaria");
        assert_eq!(state.visible_count(), DEFAULT_PAGE_SIZE);
        assert!(state.zoomed_image().is_none());
    }

    #[test]
    fn test_close_modal_clears_everything_but_menu() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.toggle_menu();
        state.open_category(&gallery, "estruturas");
        state.show_more(&gallery);
        state.open_zoom(ImageRef::new("/estrutura9.jpg"));

        state.close_modal(&gallery);
        assert!(state.active_category().is_none());
        assert!(state.zoomed_image().is_none());
        assert_eq!(state.visible_count(), DEFAULT_PAGE_SIZE);
        assert!(state.menu_open());
    }

    #[test]
    fn test_overlay_click_respects_policy() {
        let closing = gallery_with_overlay_close(true);
        let mut state = ViewState::new(&closing);
        state.open_category(&closing, "portoes");
        assert_eq!(state.click(&closing, PointerTarget::ModalOverlay), Some(Layer::Modal));
        assert_eq!(state.phase(), Phase::Idle);

        let sticky = gallery_with_overlay_close(false);
        let mut state = ViewState::new(&sticky);
        state.open_category(&sticky, "portoes");
        assert_eq!(state.click(&sticky, PointerTarget::ModalOverlay), None);
        assert_eq!(state.phase(), Phase::ModalOpen);
    }

    #[test]
    fn test_content_click_never_closes() {
        let gallery = gallery_with_overlay_close(true);
        let mut state = ViewState::new(&gallery);
        state.open_category(&gallery, "grades");

        assert_eq!(state.click(&gallery, PointerTarget::ModalContent), None);
        assert_eq!(state.phase(), Phase::ModalOpen);
    }

    #[test]
    fn test_zoom_clicks() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);
        state.open_category(&gallery, "grades");
        state.open_zoom(ImageRef::new("/grade4.jpg"));

        assert_eq!(state.click(&gallery, PointerTarget::ZoomImage), None);
        assert_eq!(state.phase(), Phase::Zoomed);

        assert_eq!(state.click(&gallery, PointerTarget::ZoomOverlay), Some(Layer::Zoom));
        assert_eq!(state.phase(), Phase::ModalOpen);
    }
}
