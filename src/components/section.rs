//! Shared section scaffolding.
//!
//! Every page section follows the same template: optional content props
//! with built-in defaults resolved per field, a scroll reveal owned by the
//! section, and theme tokens applied through indirection only. The helpers
//! here keep that convention in one place.

use crate::theme::{ThemeColor, ThemeFont};
use leptos::prelude::*;

/// Class list for a reveal-animated block: `reveal` before entry,
/// `reveal in-view` after. The transition itself lives in the stylesheet.
pub fn reveal_class(base: &'static str, visible: Signal<bool>) -> impl Fn() -> String + 'static {
    move || {
        if visible.get() {
            format!("{base} reveal in-view")
        } else {
            format!("{base} reveal")
        }
    }
}

/// Centered heading/subtitle block used at the top of most sections.
#[component]
pub fn SectionHeader(
    /// Section heading, already resolved by the caller.
    #[prop(into)]
    heading: String,
    /// Optional subtitle line under the heading.
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// The owning section's reveal signal.
    #[prop(into)]
    visible: Signal<bool>,
    /// Render in white for gradient/dark backgrounds.
    #[prop(default = false)]
    on_dark: bool,
) -> impl IntoView {
    let heading_color = if on_dark {
        "#ffffff".to_string()
    } else {
        ThemeColor::Heading.hsl()
    };
    let text_color = if on_dark {
        "rgba(255,255,255,0.9)".to_string()
    } else {
        ThemeColor::Text.hsl()
    };

    view! {
        <div class=reveal_class("section-header", visible)>
            <h2
                class="section-title"
                style=format!("font-family: {}; color: {}", ThemeFont::Heading.var(), heading_color)
            >
                {heading}
            </h2>
            {subtitle.map(|subtitle| view! {
                <p class="section-subtitle" style=format!("color: {}", text_color)>
                    {subtitle}
                </p>
            })}
        </div>
    }
}
