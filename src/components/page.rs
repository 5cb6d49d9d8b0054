//! Page composition: the fixed section order, fed from one tenant.

use crate::components::{About, ConsultationCta, Faq, Features, Footer, Hero, Navigation, Stats, ValueProps};
use crate::theme::{ThemeColor, ThemeFont};
use crate::types::{NavLink, Tenant};
use leptos::prelude::*;

/// The complete storefront page.
///
/// Sections render in a fixed order; the tenant's business name and media
/// paths thread into the sections that need them. Content overrides resolve
/// flat-key-first (see [`crate::content`]); the built-in section defaults
/// are the final tier.
///
/// Explicit `*_url` props win over the corresponding settings paths, so a
/// host page can substitute optimized media without touching the tenant.
#[component]
pub fn StorefrontPage(
    tenant: Tenant,
    #[prop(into, default = String::from("/consultation"))] consultation_url: String,
    #[prop(into, default = String::from("/products"))] products_url: String,
    #[prop(into, default = String::from("/contact"))] contact_url: String,
    #[prop(optional, into)] hero_image_url: Option<String>,
    #[prop(optional, into)] logo_url: Option<String>,
) -> impl IntoView {
    let Tenant {
        business_name,
        settings,
    } = tenant;
    let content = settings.page_content;

    let nav_links = vec![
        NavLink {
            label: "Products".into(),
            href: products_url,
        },
        NavLink {
            label: "About".into(),
            href: "/about".into(),
        },
        NavLink {
            label: "The Wire".into(),
            href: "/the-wire".into(),
        },
        NavLink {
            label: "FAQ".into(),
            href: "/faq".into(),
        },
        NavLink {
            label: "Contact".into(),
            href: contact_url,
        },
    ];

    let logo = logo_url.or(settings.logo_path);
    let hero_image = hero_image_url.or(settings.hero_image_path);

    let hero_title = content.hero_title().map(str::to_string);
    let hero_subtitle = content.hero_subtitle().map(str::to_string);
    let hero_description = content.hero_description().map(str::to_string);
    let about_heading = content.about_heading().map(str::to_string);
    let about_mission = content.about_mission().map(str::to_string);

    view! {
        <div
            class="storefront"
            style=format!(
                "font-family: {}; background-color: {}; color: {}",
                ThemeFont::Base.var(),
                ThemeColor::Background.hsl(),
                ThemeColor::Text.hsl()
            )
        >
            <Navigation
                business_name=business_name.clone()
                logo_url=logo.clone()
                links=nav_links
                cta_href=consultation_url.clone()
            />
            <main>
                <Hero
                    business_name=business_name.clone()
                    title=hero_title
                    subtitle=hero_subtitle
                    description=hero_description
                    hero_image_url=hero_image
                    logo_url=logo.clone()
                    consultation_url=consultation_url.clone()
                />
                <ValueProps />
                <About
                    business_name=business_name.clone()
                    heading=about_heading
                    content=about_mission
                />
                <Features />
                <Stats />
                <Faq />
                <ConsultationCta consultation_url=consultation_url />
            </main>
            <Footer business_name=business_name logo_url=logo />
        </div>
    }
}
