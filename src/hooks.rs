//! Window-level listeners bridged into the site state.
//!
//! The webview owns keyboard focus and scrolling, so these hooks install
//! small JS listeners through `document::eval` and forward what they see
//! back into Rust.

use cgn_core::visibility::VISIBILITY_THRESHOLD;
use cgn_core::GalleryAction;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::context::SiteState;

const ESCAPE_LISTENER_JS: &str = r#"
window.addEventListener("keydown", (e) => {
  if (e.key === "Escape") {
    dioxus.send(e.key);
  }
});
"#;

/// Intersection report sent by the section observer.
#[derive(Debug, Deserialize)]
struct SectionReport {
    id: String,
    ratio: f64,
}

fn section_observer_js(threshold: f64) -> String {
    format!(
        r#"
const observer = new IntersectionObserver((entries) => {{
  entries.forEach((entry) => {{
    if (entry.isIntersecting) {{
      dioxus.send({{ id: entry.target.id, ratio: entry.intersectionRatio }});
    }}
  }});
}}, {{ threshold: {threshold} }});
document.querySelectorAll("section").forEach((section) => observer.observe(section));
"#
    )
}

/// Escape anywhere in the window dismisses the innermost open layer.
pub fn use_escape_dismissal(site: SiteState) {
    use_effect(move || {
        spawn(async move {
            let mut listener = document::eval(ESCAPE_LISTENER_JS);
            while let Ok(key) = listener.recv::<String>().await {
                tracing::debug!(key = %key, "Dismissal key pressed");
                site.dispatch(GalleryAction::Dismiss);
            }
            tracing::warn!("Escape listener closed");
        });
    });
}

/// Mark sections `in-view` as they scroll into the viewport.
pub fn use_section_observer(site: SiteState) {
    use_effect(move || {
        spawn(async move {
            let mut observer = document::eval(&section_observer_js(VISIBILITY_THRESHOLD));
            while let Ok(report) = observer.recv::<SectionReport>().await {
                site.observe_section(&report.id, report.ratio);
            }
        });
    });
}

/// Smooth-scroll to a section by element id.
pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth' }});",
        id
    ));
}

/// Smooth-scroll the page back to the top.
pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_script_embeds_threshold() {
        let js = section_observer_js(0.2);
        assert!(js.contains("threshold: 0.2"));
        assert!(js.contains("querySelectorAll(\"section\")"));
    }
}
