//! Sticky navigation bar.
//!
//! The scrolled styling (shadow, slight translucency past 20px) is driven
//! by a locally owned signal fed from a window scroll listener scoped to
//! this component instance; the listener is removed on cleanup.

use crate::components::icons::{Icon, ICON_MENU, ICON_SHOPPING_CART, ICON_X};
use crate::theme::{ThemeColor, ThemeFont};
use crate::types::NavLink;
use leptos::prelude::*;

/// Scroll offset past which the bar switches to its scrolled styling.
const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Default navigation links when the tenant supplies none.
pub fn default_nav_links() -> Vec<NavLink> {
    [
        ("Products", "/products"),
        ("About", "/about"),
        ("The Wire", "/the-wire"),
        ("FAQ", "/faq"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: label.into(),
        href: href.into(),
    })
    .collect()
}

#[component]
pub fn Navigation(
    #[prop(into)] business_name: String,
    #[prop(optional_no_strip)] logo_url: Option<String>,
    /// Link list; defaults to [`default_nav_links`].
    #[prop(optional)]
    links: Option<Vec<NavLink>>,
    #[prop(into, default = String::from("Get Started"))] cta_label: String,
    #[prop(into, default = String::from("/consultation"))] cta_href: String,
) -> impl IntoView {
    let links = links.unwrap_or_else(default_nav_links);
    let (scrolled, set_scrolled) = signal(false);
    let (mobile_open, set_mobile_open) = signal(false);

    let listener = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0);
        set_scrolled.set(offset > SCROLL_THRESHOLD_PX);
    });
    on_cleanup(move || listener.remove());

    let nav_style = move || {
        let background = if scrolled.get() {
            ThemeColor::Background.hsl_alpha(0.98)
        } else {
            ThemeColor::Background.hsl()
        };
        let shadow = if scrolled.get() {
            format!("0 2px 20px {}", ThemeColor::Primary.hsl_alpha(0.1))
        } else {
            "none".to_string()
        };
        format!(
            "background-color: {background}; border-bottom: 1px solid {}; box-shadow: {shadow}",
            ThemeColor::Border.hsl()
        )
    };

    let cta_style = format!(
        "background-color: {}; box-shadow: 0 0 15px {}",
        ThemeColor::Primary.hsl(),
        ThemeColor::Primary.hsl_alpha(0.3)
    );

    let mobile_links = links.clone();
    let mobile_cta_href = cta_href.clone();
    let mobile_cta_label = cta_label.clone();
    let mobile_cta_style = cta_style.clone();

    view! {
        <nav class="nav" style=nav_style>
            <div class="container nav-inner">
                <a href="/" class="nav-brand">
                    {logo_url.map(|logo_url| view! {
                        <img class="nav-logo" src=logo_url alt=business_name.clone() />
                    })}
                    <span
                        class="nav-title"
                        style=format!(
                            "font-family: {}; color: {}",
                            ThemeFont::Heading.var(),
                            ThemeColor::Heading.hsl()
                        )
                    >
                        {business_name}
                    </span>
                </a>

                <div class="nav-links">
                    {links.into_iter().map(|link| view! {
                        <a
                            href=link.href
                            class="nav-link"
                            style=format!("color: {}", ThemeColor::Text.hsl())
                        >
                            {link.label}
                        </a>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="nav-actions">
                    <a href="/cart" aria-label="Cart" style=format!("color: {}", ThemeColor::Text.hsl())>
                        <Icon path=ICON_SHOPPING_CART size="20" />
                    </a>
                    <a href=cta_href class="nav-cta" style=cta_style>
                        {cta_label}
                    </a>
                </div>

                <button
                    class="nav-mobile-toggle"
                    aria-label="Toggle menu"
                    style=format!("color: {}", ThemeColor::Text.hsl())
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() {
                        view! { <Icon path=ICON_X /> }
                    } else {
                        view! { <Icon path=ICON_MENU /> }
                    }}
                </button>
            </div>

            {move || mobile_open.get().then(|| {
                let links = mobile_links.clone();
                view! {
                    <div
                        class="nav-mobile-menu"
                        style=format!(
                            "background-color: {}; border-top: 1px solid {}",
                            ThemeColor::Background.hsl(),
                            ThemeColor::Border.hsl()
                        )
                    >
                        {links.into_iter().map(|link| view! {
                            <a
                                href=link.href
                                class="nav-mobile-link"
                                style=format!("color: {}", ThemeColor::Text.hsl())
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {link.label}
                            </a>
                        }).collect::<Vec<_>>()}
                        <a
                            href=mobile_cta_href.clone()
                            class="nav-cta nav-mobile-cta"
                            style=mobile_cta_style.clone()
                            on:click=move |_| set_mobile_open.set(false)
                        >
                            {mobile_cta_label.clone()}
                        </a>
                    </div>
                }
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links_cover_the_storefront_pages() {
        let links = default_nav_links();
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].href, "/products");
        assert_eq!(links[4].label, "Contact");
    }
}
