//! Customer testimonials.

use cgn_core::content::TESTIMONIALS;
use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn Testimonials() -> Element {
    let site = use_site();

    rsx! {
        section { id: "depoimentos", class: site.section_class("depoimentos", "depoimentos"),
            h2 { class: "titulo-secao", "O que nossos clientes dizem" }
            div { class: "depoimentos-lista",
                for (idx, testimonial) in TESTIMONIALS.iter().enumerate() {
                    blockquote { key: "{idx}",
                        p { "“{testimonial.quote}”" }
                        span { "- {testimonial.author}" }
                    }
                }
            }
        }
    }
}
