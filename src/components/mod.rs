//! UI Components for the CGN site.
//!
//! One component per page section, plus the gallery overlays.

mod about;
mod contact;
mod hero;
pub mod icons;
mod site_footer;
mod site_header;
mod testimonials;
mod work_modal;
mod works;
mod zoom_overlay;

pub use about::About;
pub use contact::{ContactForm, ContactSection};
pub use hero::Hero;
pub use site_footer::{BackToTop, SiteFooter};
pub use site_header::SiteHeader;
pub use testimonials::Testimonials;
pub use work_modal::WorkModal;
pub use works::WorksSection;
pub use zoom_overlay::ZoomOverlay;
