//! Lucide icons used by the contact cards.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ContactIcon {
    Phone,
    MapPin,
    Mail,
    Key,
    Building,
}

/// Render a 32px Lucide icon in the card's text color
pub fn render_contact_icon(icon: ContactIcon) -> Element {
    let paths = match icon {
        ContactIcon::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        ContactIcon::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        ContactIcon::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        ContactIcon::Key => rsx! {
            circle { cx: "7.5", cy: "15.5", r: "5.5" }
            path { d: "m21 2-9.6 9.6" }
            path { d: "m15.5 7.5 3 3L22 7l-3-3" }
        },
        ContactIcon::Building => rsx! {
            path { d: "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z" }
            path { d: "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2" }
            path { d: "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2" }
            path { d: "M10 6h4" }
            path { d: "M10 10h4" }
            path { d: "M10 14h4" }
            path { d: "M10 18h4" }
        },
    };

    rsx! {
        svg {
            class: "icon-white",
            xmlns: "http://www.w3.org/2000/svg",
            width: "32",
            height: "32",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {paths}
        }
    }
}
