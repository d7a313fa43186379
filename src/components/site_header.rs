//! Site Header Component
//!
//! Logo, section navigation and the hamburger toggle for narrow screens.

use cgn_core::content::NAV_LINKS;
use cgn_core::GalleryAction;
use dioxus::prelude::*;

use crate::context::use_site;
use crate::hooks::scroll_to_section;

/// Top bar with navigation.
///
/// On screens < 768px the nav collapses behind the hamburger; following a
/// link closes it again.
#[component]
pub fn SiteHeader() -> Element {
    let site = use_site();
    let menu_open = site.view.read().menu_open();
    let logo_src = site.asset_src("logocgn.png");
    let title_src = site.asset_src("cgn.png");

    rsx! {
        header { class: "header",
            div { class: "logo-container",
                img { class: "logo", src: "{logo_src}", alt: "Logo CGN" }
                img { class: "cgn-title", src: "{title_src}", alt: "C.G.N" }
            }

            nav { class: if menu_open { "nav open" } else { "nav" },
                for link in NAV_LINKS.iter() {
                    a {
                        key: "{link.id}",
                        href: "{link.href()}",
                        onclick: move |e| {
                            e.prevent_default();
                            scroll_to_section(link.id);
                            site.dispatch(GalleryAction::CloseMenu);
                        },
                        "{link.label}"
                    }
                }
            }

            div {
                class: if menu_open { "hamburger open" } else { "hamburger" },
                role: "button",
                tabindex: "0",
                "aria-label": "Abrir/Fechar menu",
                onclick: move |_| site.dispatch(GalleryAction::ToggleMenu),

                span {}
                span {}
                span {}
            }
        }
    }
}
