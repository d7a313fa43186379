//! Footer and the floating back-to-top button.

use cgn_core::content::current_copyright_line;
use dioxus::prelude::*;

use crate::hooks::scroll_to_top;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            div { class: "socials",
                a { href: "#", "aria-label": "Instagram",
                    i { class: "fab fa-instagram" }
                }
                a { href: "#", "aria-label": "Pinterest",
                    i { class: "fab fa-pinterest" }
                }
            }
            p { "{current_copyright_line()}" }
        }
    }
}

#[component]
pub fn BackToTop() -> Element {
    rsx! {
        button {
            class: "btn-top",
            "aria-label": "Voltar ao topo",
            onclick: move |_| scroll_to_top(),
            "↑"
        }
    }
}
