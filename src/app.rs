use cgn_core::{SectionVisibility, ViewState};
use dioxus::prelude::*;

use crate::context::SiteState;
use crate::hooks::{use_escape_dismissal, use_section_observer};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the site context and the window listeners.
#[component]
pub fn App() -> Element {
    let settings = crate::get_settings();

    let view: Signal<ViewState> = use_signal(|| ViewState::new(&settings.gallery));
    let sections: Signal<SectionVisibility> = use_signal(SectionVisibility::new);

    let site = use_context_provider(|| SiteState {
        gallery: &settings.gallery,
        assets_dir: settings.assets_dir.as_path(),
        view,
        sections,
    });

    use_escape_dismissal(site);
    use_section_observer(site);

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
