//! Full-view zoom of a gallery photo.

use cgn_core::{GalleryAction, PointerTarget};
use dioxus::prelude::*;

use crate::context::use_site;

/// Overlay above the work modal. Clicking the backdrop closes it; clicking
/// the photo itself does not.
#[component]
pub fn ZoomOverlay() -> Element {
    let site = use_site();
    let Some(image) = site.view.read().zoomed_image().cloned() else {
        return VNode::empty();
    };

    rsx! {
        div {
            class: "zoom-overlay",
            onclick: move |_| site.dispatch(GalleryAction::Click(PointerTarget::ZoomOverlay)),

            img {
                class: "zoomed-img",
                src: site.image_src(&image),
                alt: "Imagem ampliada",
                onclick: move |e| {
                    e.stop_propagation();
                    site.dispatch(GalleryAction::Click(PointerTarget::ZoomImage));
                },
            }
        }
    }
}
