//! Consultation call-to-action band.

use crate::components::section::reveal_class;
use crate::interactions::{use_scroll_reveal, RevealOptions};
use crate::theme::{self, ThemeColor};
use leptos::html::Section;
use leptos::prelude::*;

#[component]
pub fn ConsultationCta(
    #[prop(into, default = String::from("/consultation"))] consultation_url: String,
    #[prop(into, default = String::from("Ready to Level Up?"))] heading: String,
    #[prop(into, default = String::from(
        "Book a free consultation and let our specialists hook you up with the perfect plan"
    ))]
    subtitle: String,
    #[prop(into, default = String::from("Book Free Consultation"))] cta_text: String,
    #[prop(optional, into)] image_url: Option<String>,
) -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_scroll_reveal(section_ref, RevealOptions::threshold(0.2));

    // Image background gets a theme overlay; the gradient fallback needs none.
    let background = match image_url {
        Some(url) => view! {
            <div
                class="cta-bg"
                style=format!("background-image: url('{url}'); background-size: cover; background-position: center")
            ></div>
            <div class="cta-bg" style=format!("background: {}", theme::cta_overlay())></div>
        }
        .into_any(),
        None => view! {
            <div class="cta-bg" style=format!("background: {}", theme::cta_gradient())></div>
        }
        .into_any(),
    };

    view! {
        <section node_ref=section_ref class="section cta">
            {background}
            <div class="cta-glow">
                <div
                    class="cta-glow-orb"
                    style=format!("background-color: {}", ThemeColor::Accent.hsl())
                ></div>
            </div>

            <div class="container cta-content">
                <h2 class=reveal_class("cta-heading", visible.into())>{heading}</h2>
                <p
                    class=reveal_class("cta-subtitle", visible.into())
                    style="transition-delay: 80ms"
                >
                    {subtitle}
                </p>
                <div
                    class=reveal_class("cta-action", visible.into())
                    style="transition-delay: 160ms"
                >
                    <a
                        href=consultation_url
                        class="btn btn-cta"
                        style=format!("color: {}", ThemeColor::Primary.hsl())
                    >
                        {cta_text}
                    </a>
                </div>
            </div>
        </section>
    }
}
