//! Incremental reveal for the paginated category.

use super::{Gallery, ViewState};
use crate::catalog::ImageRef;

/// Which pagination button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    ShowMore,
    ShowLess,
}

impl PageControl {
    pub fn label(&self) -> &'static str {
        match self {
            PageControl::ShowMore => "Ver mais",
            PageControl::ShowLess => "Ver menos",
        }
    }
}

/// Snapshot of the counter for the active paginated category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStatus {
    pub visible: usize,
    pub total: usize,
}

impl PageStatus {
    /// Two-state toggle keyed on `visible < total`.
    pub fn control(&self) -> PageControl {
        if self.visible < self.total {
            PageControl::ShowMore
        } else {
            PageControl::ShowLess
        }
    }

    pub fn caption(&self) -> String {
        format!("Mostrando {} de {} fotos", self.visible, self.total)
    }
}

impl ViewState {
    /// Counter status, present only while the paginated category is open.
    pub fn pagination(&self, gallery: &Gallery) -> Option<PageStatus> {
        let category = self.current_category(gallery)?;
        if !gallery.is_paginated(&category.id) {
            return None;
        }
        let total = category.total_images();
        Some(PageStatus {
            visible: self.visible_count.min(total),
            total,
        })
    }

    /// Images to render in the modal: a prefix for the paginated
    /// category, every image for the others.
    pub fn visible_images<'g>(&self, gallery: &'g Gallery) -> &'g [ImageRef] {
        match self.current_category(gallery) {
            Some(category) if gallery.is_paginated(&category.id) => {
                let end = self.visible_count.min(category.images.len());
                &category.images[..end]
            }
            Some(category) => &category.images,
            None => &[],
        }
    }

    /// Reveal one more page, clamped to the category size. Returns whether
    /// the counter moved.
    pub fn show_more(&mut self, gallery: &Gallery) -> bool {
        let Some(status) = self.pagination(gallery) else {
            return false;
        };
        if status.visible >= status.total {
            return false;
        }
        self.visible_count = (self.visible_count + gallery.policy().page_size).min(status.total);
        true
    }

    /// Collapse back to the first page. Returns whether the counter moved.
    pub fn show_less(&mut self, gallery: &Gallery) -> bool {
        if self.pagination(gallery).is_none() {
            return false;
        }
        let page_size = gallery.policy().page_size;
        let moved = self.visible_count != page_size;
        self.visible_count = page_size;
        moved
    }
}
