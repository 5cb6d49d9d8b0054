//! Full-screen hero section.

use crate::components::icons::{Icon, ICON_CHEVRON_DOWN};
use crate::theme::{self, ThemeColor, ThemeFont};
use leptos::prelude::*;

#[component]
pub fn Hero(
    #[prop(into)] business_name: String,
    /// Title override; defaults to `Welcome to {business_name}`.
    #[prop(optional_no_strip)]
    title: Option<String>,
    #[prop(optional_no_strip)] subtitle: Option<String>,
    /// Optional third line; omitted entirely when absent.
    #[prop(optional_no_strip)]
    description: Option<String>,
    #[prop(optional_no_strip)] hero_image_url: Option<String>,
    #[prop(optional_no_strip)] logo_url: Option<String>,
    #[prop(into, default = String::from("/consultation"))] consultation_url: String,
    #[prop(into, default = String::from("Get Started"))] cta_text: String,
    #[prop(into, default = String::from("Explore"))] secondary_cta_text: String,
    #[prop(into, default = String::from("#about"))] secondary_cta_href: String,
) -> impl IntoView {
    let display_title = title.unwrap_or_else(|| format!("Welcome to {business_name}"));
    let display_subtitle = subtitle.unwrap_or_else(|| "Your Vibe. Your Bud. Your Way.".to_string());

    // Image when configured, themed gradient otherwise - never a broken asset.
    let background = match hero_image_url {
        Some(url) => view! {
            <div
                class="hero-bg"
                style=format!("background-image: url('{url}'); background-size: cover; background-position: center")
            ></div>
        }
        .into_any(),
        None => view! {
            <div class="hero-bg" style=format!("background: {}", theme::hero_gradient())></div>
        }
        .into_any(),
    };

    view! {
        <section class="hero">
            {background}
            <div class="hero-overlay" style=format!("background: {}", theme::hero_overlay())></div>
            <div class="hero-glow">
                <div
                    class="hero-glow-orb hero-glow-top-left"
                    style=format!("background-color: {}", ThemeColor::Primary.hsl())
                ></div>
                <div
                    class="hero-glow-orb hero-glow-bottom-right"
                    style=format!("background-color: {}", ThemeColor::Secondary.hsl())
                ></div>
                <div
                    class="hero-glow-orb hero-glow-mid-right"
                    style=format!("background-color: {}", ThemeColor::Accent.hsl())
                ></div>
            </div>

            <div class="container hero-content">
                {logo_url.map(|logo_url| view! {
                    <div
                        class="hero-logo-badge"
                        style=format!(
                            "border: 3px solid {}; box-shadow: 0 0 30px {}, 0 0 60px {}",
                            ThemeColor::Primary.hsl_alpha(0.5),
                            ThemeColor::Primary.hsl_alpha(0.3),
                            ThemeColor::Primary.hsl_alpha(0.15)
                        )
                    >
                        <img src=logo_url alt=format!("{business_name} Logo") />
                    </div>
                })}

                <h1 class="hero-title" style=format!("font-family: {}", ThemeFont::Heading.var())>
                    {display_title}
                </h1>
                <p class="hero-subtitle">{display_subtitle}</p>
                {description.map(|description| view! {
                    <p class="hero-description">{description}</p>
                })}

                <div class="hero-actions">
                    <a
                        href=consultation_url
                        class="btn btn-primary"
                        style=format!(
                            "background-color: {}; box-shadow: 0 0 20px {}",
                            ThemeColor::Primary.hsl(),
                            ThemeColor::Primary.hsl_alpha(0.4)
                        )
                    >
                        {cta_text}
                    </a>
                    <a
                        href=secondary_cta_href
                        class="btn btn-secondary"
                        style=format!(
                            "border-color: {color}; color: {color}",
                            color = ThemeColor::Secondary.hsl()
                        )
                    >
                        {secondary_cta_text}
                    </a>
                </div>
            </div>

            <a
                href="#about"
                class="hero-scroll-indicator"
                aria-label="Scroll to about"
                style=format!("color: {}", ThemeColor::Secondary.hsl())
            >
                <Icon path=ICON_CHEVRON_DOWN size="36" />
            </a>
        </section>
    }
}
