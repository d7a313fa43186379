//! Full-view zoom of a single image, layered above the modal.

use super::ViewState;
use crate::catalog::ImageRef;

impl ViewState {
    /// Zoom an image. Only valid while a modal is open; returns whether
    /// the zoom opened.
    pub fn open_zoom(&mut self, image: ImageRef) -> bool {
        if self.active_category.is_none() {
            tracing::debug!(%image, "Ignoring zoom without an open modal");
            return false;
        }
        self.zoomed_image = Some(image);
        true
    }

    pub fn close_zoom(&mut self) {
        self.zoomed_image = None;
    }
}
