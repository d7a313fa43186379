//! Landing page - the whole C.G.N Construções site.
//!
//! Sections in scroll order, with the gallery overlays and the
//! back-to-top button floating above them.

use dioxus::prelude::*;

use crate::components::{
    About, BackToTop, ContactSection, Hero, SiteFooter, SiteHeader, Testimonials, WorksSection,
    ZoomOverlay,
};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        SiteHeader {}
        Hero {}
        About {}
        WorksSection {}
        ZoomOverlay {}
        Testimonials {}
        ContactSection {}
        SiteFooter {}
        BackToTop {}

        div { class: "fundo-dinamico", "aria-hidden": "true" }
    }
}
