//! Animated statistics band.
//!
//! The section owns one reveal (threshold 0.2) that gates every counter:
//! numbers only start counting once the band is in view.

use crate::components::section::{reveal_class, SectionHeader};
use crate::interactions::{use_scroll_reveal, AnimatedCounter, RevealOptions};
use crate::theme::{self, ThemeColor};
use crate::types::StatItem;
use leptos::html::Section;
use leptos::prelude::*;

/// Default figures when the tenant supplies none.
pub fn default_stats() -> Vec<StatItem> {
    vec![
        StatItem {
            value: 10_000,
            suffix: Some("+".into()),
            label: "Customers Served".into(),
            ..Default::default()
        },
        StatItem {
            value: 200,
            suffix: Some("+".into()),
            label: "Products Stocked".into(),
            ..Default::default()
        },
        StatItem {
            value: 50,
            suffix: Some("+".into()),
            label: "Strains Available".into(),
            ..Default::default()
        },
        StatItem {
            value: 99,
            suffix: Some("%".into()),
            label: "Would Recommend".into(),
            ..Default::default()
        },
    ]
}

#[component]
pub fn Stats(
    #[prop(into, default = String::from("The Numbers Speak"))] heading: String,
    /// Figure list; defaults to [`default_stats`].
    #[prop(optional)]
    items: Option<Vec<StatItem>>,
) -> impl IntoView {
    let items = items.unwrap_or_else(default_stats);
    let section_ref = NodeRef::<Section>::new();
    let visible = use_scroll_reveal(section_ref, RevealOptions::threshold(0.2));

    view! {
        <section
            node_ref=section_ref
            class="section stats"
            style=format!("background: {}", theme::stats_gradient())
        >
            <div class="stats-glow">
                <div
                    class="stats-glow-orb"
                    style=format!("background-color: {}", ThemeColor::Accent.hsl())
                ></div>
            </div>

            <div class="container stats-content">
                <SectionHeader heading=heading visible=visible on_dark=true />
                <div class="stats-grid">
                    {items.into_iter().enumerate().map(|(index, item)| view! {
                        <div
                            class=reveal_class("stat", visible.into())
                            style=format!("transition-delay: {}ms", index * 80)
                        >
                            <p class="stat-value">
                                <AnimatedCounter
                                    target=item.value
                                    prefix=item.prefix.unwrap_or_default()
                                    suffix=item.suffix.unwrap_or_default()
                                    start=visible
                                />
                            </p>
                            <p class="stat-label">{item.label}</p>
                        </div>
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
    fn default_stats_match_the_storefront_figures() {
        let items = default_stats();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].value, 10_000);
        assert_eq!(items[0].suffix.as_deref(), Some("+"));
        assert_eq!(items[3].suffix.as_deref(), Some("%"));
        assert!(items.iter().all(|item| item.prefix.is_none()));
    }
}
