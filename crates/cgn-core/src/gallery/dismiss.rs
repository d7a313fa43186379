//! Innermost-first dismissal.

use super::{Gallery, ViewState};

/// A closable UI layer, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Zoom,
    Modal,
    Menu,
}

impl ViewState {
    /// The layer a dismissal would close next.
    pub fn top_layer(&self) -> Option<Layer> {
        if self.zoomed_image.is_some() {
            Some(Layer::Zoom)
        } else if self.active_category.is_some() {
            Some(Layer::Modal)
        } else if self.menu_open {
            Some(Layer::Menu)
        } else {
            None
        }
    }

    /// Close exactly one layer (Escape key or an explicit close control).
    pub fn dismiss(&mut self, gallery: &Gallery) -> Option<Layer> {
        let layer = self.top_layer()?;
        match layer {
            Layer::Zoom => self.close_zoom(),
            Layer::Modal => self.close_modal(gallery),
            Layer::Menu => self.close_menu(),
        }
        Some(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ImageRef;
    use crate::gallery::Phase;

    #[test]
    fn test_dismiss_steps_back_one_layer_at_a_time() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);

        state.toggle_menu();
        state.open_category(&gallery, "portoes");
        state.open_zoom(ImageRef::new("/portao3.jpg"));

        assert_eq!(state.dismiss(&gallery), Some(Layer::Zoom));
        assert_eq!(state.phase(), Phase::ModalOpen);
        assert!(state.menu_open());

        assert_eq!(state.dismiss(&gallery), Some(Layer::Modal));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.menu_open());

        assert_eq!(state.dismiss(&gallery), Some(Layer::Menu));
        assert!(!state.menu_open());

        assert_eq!(state.dismiss(&gallery), None);
        assert_eq!(state, ViewState::new(&gallery));
    }

    #[test]
    fn test_dismiss_modal_resets_pagination() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);
        state.open_category(&gallery, "estruturas");
        state.show_more(&gallery);
        state.show_more(&gallery);

        assert_eq!(state.dismiss(&gallery), Some(Layer::Modal));
        assert_eq!(state.visible_count(), 8);
        assert!(state.active_category().is_none());
        assert!(state.zoomed_image().is_none());
    }

    #[test]
    fn test_top_layer() {
        let gallery = Gallery::builtin();
        let mut state = ViewState::new(&gallery);
        assert_eq!(state.top_layer(), None);

        state.toggle_menu();
        assert_eq!(state.top_layer(), Some(Layer::Menu));

        state.open_category(&gallery, "grades");
        assert_eq!(state.top_layer(), Some(Layer::Modal));
    }
}
