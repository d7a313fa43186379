//! "Trabalhos" section: one card per work category.

use cgn_core::GalleryAction;
use dioxus::prelude::*;

use crate::components::WorkModal;
use crate::context::use_site;

#[component]
pub fn WorksSection() -> Element {
    let site = use_site();

    rsx! {
        section { id: "trabalhos", class: site.section_class("trabalhos", "trabalhos"),
            h2 { class: "titulo-secao", "Trabalhos Realizados" }

            div { class: "cards-trabalhos",
                for category in site.gallery.catalog().iter() {
                    div {
                        key: "{category.id}",
                        class: "card-trabalho",
                        onclick: move |_| {
                            site.dispatch(GalleryAction::OpenCategory(category.id.clone()))
                        },

                        h3 { "{category.display_name}" }
                        p { "Clique para ver fotos" }
                    }
                }
            }

            WorkModal {}
        }
    }
}
