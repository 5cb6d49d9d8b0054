//! Value proposition cards under the hero.

use crate::components::icons::{icon_path, Icon, ICON_ZAP};
use crate::components::section::{reveal_class, SectionHeader};
use crate::interactions::{use_scroll_reveal, RevealOptions};
use crate::theme::{ThemeColor, ThemeFont};
use crate::types::ValueProp;
use leptos::html::Section;
use leptos::prelude::*;

/// Default cards when the tenant supplies none.
pub fn default_value_props() -> Vec<ValueProp> {
    [
        (
            "Premium Vibes Only",
            "Lab-tested, top-shelf bud that hits different every time.",
            "Sparkles",
        ),
        (
            "Locked-In Quality",
            "Every product certified and compliant - no cap.",
            "Shield",
        ),
        (
            "Lightning Fast",
            "Same-day processing, discreet delivery to your door.",
            "Zap",
        ),
        (
            "Speedy Delivery",
            "Track your order in real-time. We move quick.",
            "Truck",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| ValueProp {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    })
    .collect()
}

#[component]
pub fn ValueProps(
    #[prop(into, default = String::from("Why We Hit Different"))] heading: String,
    #[prop(into, default = String::from(
        "Not your average dispensary - we bring the energy, quality, and speed you deserve"
    ))]
    subtitle: String,
    /// Card list; defaults to [`default_value_props`].
    #[prop(optional)]
    items: Option<Vec<ValueProp>>,
) -> impl IntoView {
    let items = items.unwrap_or_else(default_value_props);
    let section_ref = NodeRef::<Section>::new();
    let visible = use_scroll_reveal(section_ref, RevealOptions::default());

    view! {
        <section
            node_ref=section_ref
            class="section"
            style=format!("background-color: {}", ThemeColor::Surface.hsl())
        >
            <div class="container">
                <SectionHeader heading=heading subtitle=subtitle visible=visible />
                <div class="card-grid card-grid-4">
                    {items.into_iter().enumerate().map(|(index, item)| {
                        // Unknown icon keys fall back to this section's default.
                        let icon = icon_path(&item.icon).unwrap_or(ICON_ZAP);
                        view! {
                            <article
                                class=reveal_class("value-card", visible.into())
                                style=format!(
                                    "background-color: {}; border: 1px solid {}; transition-delay: {}ms",
                                    ThemeColor::Background.hsl(),
                                    ThemeColor::Border.hsl(),
                                    index * 80
                                )
                            >
                                <div
                                    class="value-card-icon"
                                    style=format!(
                                        "background-color: {}; box-shadow: 0 0 20px {}; color: {}",
                                        ThemeColor::Primary.hsl_alpha(0.15),
                                        ThemeColor::Primary.hsl_alpha(0.1),
                                        ThemeColor::Primary.hsl()
                                    )
                                >
                                    <Icon path=icon size="32" />
                                </div>
                                <h3
                                    class="value-card-title"
                                    style=format!(
                                        "font-family: {}; color: {}",
                                        ThemeFont::Heading.var(),
                                        ThemeColor::Heading.hsl()
                                    )
                                >
                                    {item.title}
                                </h3>
                                <p style=format!("color: {}", ThemeColor::Text.hsl())>
                                    {item.description}
                                </p>
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
    fn defaults_are_four_cards_with_known_icons() {
        let items = default_value_props();
        assert_eq!(items.len(), 4);
        for item in &items {
            assert!(icon_path(&item.icon).is_some());
        }
    }
}
