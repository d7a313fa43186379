//! Static content of the CGN Construções page.
//!
//! Company record, navigation, services and testimonials. Everything is
//! defined inline; nothing here is loaded at runtime.

use chrono::Datelike;

/// WhatsApp deep link for quotes, opened in a new browsing context.
pub const WHATSAPP_URL: &str = "https://wa.me/message/IGSY7Y7KHO6EL1";

/// A named phone contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    pub name: &'static str,
    pub number: &'static str,
}

impl Phone {
    /// `tel:` link with every non-digit stripped from the number.
    pub fn tel_href(&self) -> String {
        let digits: String = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("tel:{}", digits)
    }
}

/// Company registration and contact data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    pub name: &'static str,
    pub address: &'static str,
    pub cnpj: &'static str,
    pub state_registration: &'static str,
    pub municipal_registration: &'static str,
    pub email: &'static str,
    pub phones: &'static [Phone],
    pub pix: &'static str,
}

impl Company {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const COMPANY: Company = Company {
    name: "CGN Construções LTDA",
    address: "R. Cinamomo, 12 - 54 - Jardim Planalto, Mogi das Cruzes - SP, 08760-030",
    cnpj: "20.465.553/0001-27",
    state_registration: "454.412.904.118",
    municipal_registration: "076 490-6",
    email: "gm0912351@gmail.com",
    phones: &[
        Phone { name: "Gustavo", number: "(11) 96058-4759" },
        Phone { name: "Cerilo", number: "(11) 99785-5291" },
    ],
    pix: "gm0912351@gmail.com",
};

pub const SERVICES: &[&str] = &[
    "Portões",
    "Grades",
    "Estruturas Metálicas",
    "Alvenaria Residencial",
    "Alvenaria Comercial",
];

/// Services as one line, e.g. `"Portões • Grades • ..."`.
pub fn services_line() -> String {
    SERVICES.join(" • ")
}

/// A page section reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "inicio", label: "Início" },
    NavLink { id: "sobre", label: "Sobre" },
    NavLink { id: "trabalhos", label: "Trabalhos" },
    NavLink { id: "depoimentos", label: "Depoimentos" },
    NavLink { id: "contato", label: "Contato" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Serviço impecável, recomendo demais!",
        author: "João Silva",
    },
    Testimonial {
        quote: "Atendimento rápido e portão de ótima qualidade.",
        author: "Maria Oliveira",
    },
    Testimonial {
        quote: "Minha empresa ficou muito mais segura, obrigado CGN.",
        author: "Pedro Santos",
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} C.G.N Construções - Todos os direitos reservados", year)
}

/// Footer line for the current local year.
pub fn current_copyright_line() -> String {
    copyright_line(chrono::Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(COMPANY.phones[0].tel_href(), "tel:11960584759");
        assert_eq!(COMPANY.phones[1].tel_href(), "tel:11997855291");
    }

    #[test]
    fn test_services_line() {
        assert_eq!(
            services_line(),
            "Portões • Grades • Estruturas Metálicas • Alvenaria Residencial • Alvenaria Comercial"
        );
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href()).collect();
        assert_eq!(
            hrefs,
            vec!["#inicio", "#sobre", "#trabalhos", "#depoimentos", "#contato"]
        );
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2025),
            "© 2025 C.G.N Construções - Todos os direitos reservados"
        );
        assert!(current_copyright_line().starts_with("© 20"));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(COMPANY.mailto_href(), "mailto:gm0912351@gmail.com");
    }
}
