//! Hero banner with the WhatsApp quote call-to-action.

use cgn_core::content::WHATSAPP_URL;
use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn Hero() -> Element {
    let site = use_site();

    rsx! {
        section { id: "inicio", class: site.section_class("inicio", "hero"),
            div { class: "hero-content",
                h1 { "C.G.N Construções" }
                p { "Especialistas em serralheria residencial e comercial" }
                a {
                    class: "btn-whatsapp",
                    href: WHATSAPP_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "💬 Orçamento via WhatsApp"
                }
            }
        }
    }
}
