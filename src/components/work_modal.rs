//! Work Modal Component
//!
//! Photos of the active work category, with "Ver mais" / "Ver menos"
//! paging for the paginated category.

use cgn_core::{GalleryAction, PageControl, PointerTarget};
use dioxus::prelude::*;

use crate::context::use_site;

/// Modal for the active category.
///
/// Renders nothing when no category is active or the id does not resolve.
/// Clicks inside the content stop at the content box; whether a click on
/// the overlay closes the modal is decided by the gallery policy.
#[component]
pub fn WorkModal() -> Element {
    let site = use_site();
    let view = site.view.read();

    let Some(category) = view.current_category(site.gallery) else {
        return VNode::empty();
    };
    let images = view.visible_images(site.gallery);
    let pagination = view.pagination(site.gallery);
    drop(view);

    rsx! {
        div {
            class: "modal",
            onclick: move |_| site.dispatch(GalleryAction::Click(PointerTarget::ModalOverlay)),

            div {
                class: "modal-content",
                onclick: move |e| {
                    e.stop_propagation();
                    site.dispatch(GalleryAction::Click(PointerTarget::ModalContent));
                },

                button {
                    class: "close",
                    "aria-label": "Fechar",
                    onclick: move |e| {
                        e.stop_propagation();
                        site.dispatch(GalleryAction::CloseModal);
                    },
                    "✕"
                }

                h3 { "{category.display_name}" }

                div { class: "modal-images",
                    for (i, image) in images.iter().enumerate() {
                        img {
                            key: "{i}",
                            src: site.image_src(image),
                            alt: "{category.id}-{i}",
                            onclick: move |e| {
                                e.stop_propagation();
                                site.dispatch(GalleryAction::OpenZoom(image.clone()));
                            },
                        }
                    }
                }

                if let Some(status) = pagination {
                    div { class: "ver-mais-container",
                        button {
                            class: "btn-ver-mais",
                            r#type: "button",
                            onclick: move |e| {
                                e.stop_propagation();
                                let action = match status.control() {
                                    PageControl::ShowMore => GalleryAction::ShowMore,
                                    PageControl::ShowLess => GalleryAction::ShowLess,
                                };
                                site.dispatch(action);
                            },
                            "{status.control().label()}"
                        }
                        p { class: "ver-mais-info", "{status.caption()}" }
                    }
                }
            }
        }
    }
}
