//! Footer with brand column, link columns and compliance disclaimer.

use crate::theme::{ThemeColor, ThemeFont};
use crate::types::{FooterColumn, NavLink};
use leptos::prelude::*;

/// Default link columns when the tenant supplies none.
pub fn default_footer_columns() -> Vec<FooterColumn> {
    fn column(title: &str, links: &[(&str, &str)]) -> FooterColumn {
        FooterColumn {
            title: title.into(),
            links: links
                .iter()
                .map(|&(label, href)| NavLink {
                    label: label.into(),
                    href: href.into(),
                })
                .collect(),
        }
    }

    vec![
        column(
            "Shop",
            &[
                ("All Products", "/products"),
                ("Popular Picks", "/products?filter=popular"),
                ("New Drops", "/products?filter=new"),
            ],
        ),
        column(
            "Learn",
            &[
                ("About Us", "/about"),
                ("The Wire", "/the-wire"),
                ("FAQ", "/faq"),
                ("Contact", "/contact"),
            ],
        ),
        column(
            "Legal",
            &[
                ("Privacy Policy", "/privacy"),
                ("Terms of Service", "/terms"),
                ("Compliance", "/regulatory"),
            ],
        ),
    ]
}

#[component]
pub fn Footer(
    #[prop(into)] business_name: String,
    #[prop(optional_no_strip)] logo_url: Option<String>,
    #[prop(into, default = String::from("Your vibe. Your bud. Delivered with care."))]
    tagline: String,
    /// Link columns; defaults to [`default_footer_columns`].
    #[prop(optional)]
    columns: Option<Vec<FooterColumn>>,
    #[prop(into, default = String::from(
        "Cannabis should only be used under the guidance of a licensed healthcare \
         professional. Must be of legal age."
    ))]
    disclaimer: String,
    /// Copyright year; supplied by the caller so rendering stays pure.
    #[prop(default = 2025)]
    year: u32,
) -> impl IntoView {
    let columns = columns.unwrap_or_else(default_footer_columns);
    let copyright_name = business_name.clone();

    view! {
        <footer class="footer" style=format!("background-color: {}", ThemeColor::Heading.hsl())>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-brand-row">
                            {logo_url.map(|logo_url| view! {
                                <img class="footer-logo" src=logo_url alt=business_name.clone() />
                            })}
                            <span
                                class="footer-title"
                                style=format!("font-family: {}", ThemeFont::Heading.var())
                            >
                                {business_name}
                            </span>
                        </div>
                        <p class="footer-tagline">{tagline}</p>
                    </div>

                    {columns.into_iter().map(|column| view! {
                        <div class="footer-column">
                            <h4 class="footer-column-title">{column.title}</h4>
                            <ul class="footer-links">
                                {column.links.into_iter().map(|link| view! {
                                    <li>
                                        <a href=link.href class="footer-link">{link.label}</a>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <p class="footer-disclaimer">{disclaimer}</p>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {year} {copyright_name}. All rights reserved.")}
                    </p>
                    <p class="footer-powered">"Powered by BudStack"</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_cover_shop_learn_legal() {
        let columns = default_footer_columns();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].title, "Shop");
        assert_eq!(columns[1].links.len(), 4);
        assert_eq!(columns[2].links[0].href, "/privacy");
    }
}
