//! "Sobre" section: who the company is and what it builds.

use cgn_core::content::services_line;
use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn About() -> Element {
    let site = use_site();
    let team_src = site.asset_src("logocgn.png");

    rsx! {
        section { id: "sobre", class: site.section_class("sobre", "sobre"),
            div { class: "sobre-texto",
                h2 {
                    "Sobre a "
                    span { class: "highlight", "C.G.N" }
                }
                p {
                    "A "
                    span { class: "highlight", "C.G.N Construções" }
                    " atua em "
                    span { class: "highlight", "Mogi das Cruzes" }
                    ", oferecendo soluções modernas em "
                    span { class: "highlight", "serralheria" }
                    " com "
                    span { class: "highlight", "qualidade" }
                    " e confiança."
                }
                p {
                    "Especializados em portões, grades e estruturas metálicas, atendemos "
                    "residências e comércios garantindo durabilidade, design e segurança."
                }
                p { class: "servicos-sobre",
                    strong { "Serviços:" }
                    " {services_line()}"
                }
            }
            div { class: "sobre-imagem",
                img { src: "{team_src}", alt: "Equipe CGN" }
            }
        }
    }
}
