//! CGN Site Core Library
//!
//! State and content behind the C.G.N Construções single-page site.
//!
//! ## Overview
//!
//! The page shows a catalog of work categories. Opening a category shows
//! its photos in a modal; clicking a photo zooms it; the largest category
//! reveals its photos eight at a time. Escape closes the innermost open
//! layer: zoom, then modal, then the mobile menu.
//!
//! The whole interactive state is one [`ViewState`] driven by
//! [`GalleryAction`]s, independent of any UI toolkit.
//!
//! ## Quick Start
//!
//! ```
//! use cgn_core::{Gallery, GalleryAction, ViewState};
//!
//! let gallery = Gallery::builtin();
//! let mut state = ViewState::new(&gallery);
//!
//! state.apply(&gallery, GalleryAction::OpenCategory("estruturas".into()));
//! state.apply(&gallery, GalleryAction::ShowMore);
//! assert_eq!(state.visible_count(), 16);
//!
//! state.apply(&gallery, GalleryAction::Dismiss);
//! assert!(state.active_category().is_none());
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod visibility;

// Re-exports
pub use catalog::{range_images, Catalog, Category, CategoryId, ImageRef};
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use gallery::{
    Gallery, GalleryAction, GalleryPolicy, Layer, PageControl, PageStatus, Phase, PointerTarget,
    ViewState,
};
pub use visibility::SectionVisibility;
