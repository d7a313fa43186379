//! Contact Section Component
//!
//! Company data cards plus a client-side contact form.

use cgn_core::content::COMPANY;
use dioxus::prelude::*;

use crate::components::icons::{render_contact_icon, ContactIcon};
use crate::context::use_site;

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();

    rsx! {
        section { id: "contato", class: site.section_class("contato", "contato"),
            h2 { class: "titulo-secao", "Contato" }

            div { class: "empresa-grid",
                div { class: "empresa-card telefone",
                    {render_contact_icon(ContactIcon::Phone)}
                    h3 { "Telefone" }
                    div {
                        for phone in COMPANY.phones.iter() {
                            a {
                                key: "{phone.name}",
                                class: "tel-link",
                                href: phone.tel_href(),
                                "📱 {phone.name}: {phone.number}"
                            }
                        }
                    }
                }

                div { class: "empresa-card endereco",
                    {render_contact_icon(ContactIcon::MapPin)}
                    h3 { "Endereço" }
                    p { "{COMPANY.address}" }
                }

                div { class: "empresa-card email",
                    {render_contact_icon(ContactIcon::Mail)}
                    h3 { "E-mail" }
                    a { class: "tel-link", href: COMPANY.mailto_href(), "{COMPANY.email}" }
                }

                div { class: "empresa-card pix",
                    {render_contact_icon(ContactIcon::Key)}
                    h3 { "PIX" }
                    p { "{COMPANY.pix}" }
                }

                div { class: "empresa-card docs",
                    {render_contact_icon(ContactIcon::Building)}
                    h3 { "Dados da empresa" }
                    p {
                        strong { "CNPJ:" }
                        " {COMPANY.cnpj}"
                    }
                    p {
                        strong { "Inscr. Estadual:" }
                        " {COMPANY.state_registration}"
                    }
                    p {
                        strong { "Inscr. Municipal:" }
                        " {COMPANY.municipal_registration}"
                    }
                }
            }

            ContactForm {}
        }
    }
}

/// Contact form. There is no backend: submitting only suppresses the
/// default navigation.
#[component]
pub fn ContactForm() -> Element {
    rsx! {
        form {
            class: "form-contato",
            onsubmit: move |e| {
                e.prevent_default();
                tracing::debug!("Contact form submitted (no backend)");
            },

            input { r#type: "text", placeholder: "Nome", required: true }
            input { r#type: "email", placeholder: "E-mail", required: true }
            input { r#type: "text", placeholder: "WhatsApp", required: true }
            textarea { placeholder: "Mensagem", rows: "4" }
            button { r#type: "submit", "Enviar" }
        }
    }
}
