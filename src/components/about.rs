//! About section with image/gradient panel and static figures.

use crate::components::section::reveal_class;
use crate::interactions::{use_scroll_reveal, RevealOptions};
use crate::theme::{self, ThemeColor, ThemeFont};
use crate::types::AboutStat;
use leptos::html::Section;
use leptos::prelude::*;

/// Default static figures shown next to the mission paragraph.
pub fn default_about_stats() -> Vec<AboutStat> {
    [
        ("10K+", "Happy Customers"),
        ("200+", "Premium Products"),
        ("99%", "Satisfaction Rate"),
    ]
    .into_iter()
    .map(|(value, label)| AboutStat {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

#[component]
pub fn About(
    #[prop(into)] business_name: String,
    /// Heading override; defaults to `The {business_name} Story`.
    #[prop(optional_no_strip)]
    heading: Option<String>,
    /// Mission paragraph override; defaults to the built-in story.
    #[prop(optional_no_strip)]
    content: Option<String>,
    #[prop(optional, into)] image_url: Option<String>,
    #[prop(into, default = String::from("/about"))] about_url: String,
    /// Figure list; defaults to [`default_about_stats`].
    #[prop(optional)]
    stats: Option<Vec<AboutStat>>,
) -> impl IntoView {
    let stats = stats.unwrap_or_else(default_about_stats);
    let section_ref = NodeRef::<Section>::new();
    let visible = use_scroll_reveal(section_ref, RevealOptions::default());

    let display_heading = heading.unwrap_or_else(|| format!("The {business_name} Story"));
    let display_content = content.unwrap_or_else(|| {
        "We started with one goal: make cannabis accessible, fun, and totally legit. \
         No stuffy vibes, no confusing menus - just top-tier bud, real talk from real \
         people, and a shopping experience that actually slaps. Whether you're a \
         seasoned connoisseur or just getting started, we've got you."
            .to_string()
    });

    let panel = match image_url {
        Some(url) => view! {
            <img class="about-image" src=url alt=format!("About {business_name}") />
        }
        .into_any(),
        None => view! {
            <div class="about-image" style=format!("background: {}", theme::about_gradient())></div>
        }
        .into_any(),
    };

    view! {
        <section
            node_ref=section_ref
            id="about"
            class="section"
            style=format!("background-color: {}", ThemeColor::Background.hsl())
        >
            <div class="container about-grid">
                <div
                    class=reveal_class("about-panel reveal-from-left", visible.into())
                    style=format!("box-shadow: inset 0 0 30px {}", ThemeColor::Primary.hsl_alpha(0.2))
                >
                    {panel}
                </div>

                <div class=reveal_class("about-content reveal-from-right", visible.into())>
                    <h2
                        class="section-title"
                        style=format!(
                            "font-family: {}; color: {}",
                            ThemeFont::Heading.var(),
                            ThemeColor::Heading.hsl()
                        )
                    >
                        {display_heading}
                    </h2>
                    <p class="about-mission" style=format!("color: {}", ThemeColor::Text.hsl())>
                        {display_content}
                    </p>

                    <div class="about-stats">
                        {stats.into_iter().map(|stat| view! {
                            <div class="about-stat">
                                <p
                                    class="about-stat-value"
                                    style=format!("color: {}", ThemeColor::Primary.hsl())
                                >
                                    {stat.value}
                                </p>
                                <p
                                    class="about-stat-label"
                                    style=format!("color: {}", ThemeColor::Text.hsl())
                                >
                                    {stat.label}
                                </p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>

                    <a
                        href=about_url
                        class="btn btn-primary"
                        style=format!(
                            "background-color: {}; box-shadow: 0 0 15px {}",
                            ThemeColor::Primary.hsl(),
                            ThemeColor::Primary.hsl_alpha(0.3)
                        )
                    >
                        "Our Full Story"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_three_preformatted_figures() {
        let stats = default_about_stats();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].value, "10K+");
        assert_eq!(stats[2].label, "Satisfaction Rate");
    }
}
