//! Tracks which page sections have scrolled into view.
//!
//! A section that is reported as intersecting the viewport gains the
//! `in-view` class and keeps it. This is purely presentational and never
//! touches [`crate::ViewState`].

use std::collections::BTreeSet;

/// Observer `threshold` option: visible fraction at which reports fire.
///
/// Not a gate on reports. A section taller than the viewport can only ever
/// reach a small ratio and still counts once it intersects.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// CSS class added to sections once seen.
pub const IN_VIEW_CLASS: &str = "in-view";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    seen: BTreeSet<String>,
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersecting report; `ratio` is only logged. Returns true
    /// the first time a section is seen.
    pub fn observe(&mut self, section: &str, ratio: f64) -> bool {
        if self.seen.contains(section) {
            return false;
        }
        tracing::trace!(section, ratio, "Section in view");
        self.seen.insert(section.to_string())
    }

    pub fn is_in_view(&self, section: &str) -> bool {
        self.seen.contains(section)
    }

    /// Class attribute for a section: the base class, plus `in-view` once seen.
    pub fn class_for(&self, section: &str, base: &str) -> String {
        if self.is_in_view(section) {
            format!("{} {}", base, IN_VIEW_CLASS)
        } else {
            base.to_string()
        }
    }
}
