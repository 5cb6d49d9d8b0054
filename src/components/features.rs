//! Feature rows section.

use crate::components::icons::{icon_path, Icon, ICON_SHIELD};
use crate::components::section::{reveal_class, SectionHeader};
use crate::interactions::{use_scroll_reveal, RevealOptions};
use crate::theme::ThemeColor;
use crate::types::Feature;
use leptos::html::Section;
use leptos::prelude::*;

/// Default feature rows when the tenant supplies none.
pub fn default_features() -> Vec<Feature> {
    [
        (
            "Lab Certified",
            "Every batch tested by independent labs. Full transparency, always.",
            "Shield",
        ),
        (
            "Clean Grown",
            "Sustainably cultivated - no nasty pesticides, ever.",
            "Leaf",
        ),
        (
            "Fast Shipping",
            "Discreet delivery that keeps up with your pace.",
            "Truck",
        ),
        (
            "Same-Day Processing",
            "Order before noon and we're on it immediately.",
            "Clock",
        ),
        (
            "Award Winning",
            "Recognized for quality, innovation, and customer love.",
            "Award",
        ),
        (
            "Wellness First",
            "Real guidance from people who actually care about your health.",
            "HeartPulse",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| Feature {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    })
    .collect()
}

#[component]
pub fn Features(
    #[prop(into, default = String::from("What Makes Us Different"))] heading: String,
    #[prop(into, default = String::from("We don't just sell - we set the standard"))]
    subtitle: String,
    /// Feature list; defaults to [`default_features`].
    #[prop(optional)]
    items: Option<Vec<Feature>>,
) -> impl IntoView {
    let items = items.unwrap_or_else(default_features);
    let section_ref = NodeRef::<Section>::new();
    let visible = use_scroll_reveal(section_ref, RevealOptions::default());

    view! {
        <section
            node_ref=section_ref
            class="section"
            style=format!("background-color: {}", ThemeColor::Background.hsl())
        >
            <div class="container">
                <SectionHeader heading=heading subtitle=subtitle visible=visible />
                <div class="card-grid card-grid-3">
                    {items.into_iter().enumerate().map(|(index, item)| {
                        // Unknown icon keys fall back to this section's default.
                        let icon = icon_path(&item.icon).unwrap_or(ICON_SHIELD);
                        view! {
                            <article
                                class=reveal_class("feature-row", visible.into())
                                style=format!(
                                    "background-color: {}; border: 1px solid {}; transition-delay: {}ms",
                                    ThemeColor::Surface.hsl(),
                                    ThemeColor::Border.hsl(),
                                    index * 80
                                )
                            >
                                <div
                                    class="feature-row-icon"
                                    style=format!(
                                        "background-color: {}; box-shadow: 0 0 15px {}; color: {}",
                                        ThemeColor::Primary.hsl_alpha(0.15),
                                        ThemeColor::Primary.hsl_alpha(0.1),
                                        ThemeColor::Primary.hsl()
                                    )
                                >
                                    <Icon path=icon />
                                </div>
                                <div>
                                    <h3
                                        class="feature-row-title"
                                        style=format!("color: {}", ThemeColor::Heading.hsl())
                                    >
                                        {item.title}
                                    </h3>
                                    <p
                                        class="feature-row-description"
                                        style=format!("color: {}", ThemeColor::Text.hsl())
                                    >
                                        {item.description}
                                    </p>
                                </div>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_six_rows_with_known_icons() {
        let items = default_features();
        assert_eq!(items.len(), 6);
        for item in &items {
            assert!(icon_path(&item.icon).is_some());
        }
    }
}
