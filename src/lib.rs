//! # cannabizz-storefront
//!
//! A themeable dispensary storefront skin for a multi-tenant site builder,
//! rendered client-side with [Leptos](https://leptos.dev/) 0.8.
//!
//! The page is a fixed sequence of presentational sections (navigation,
//! hero, value props, about, features, stats, FAQ, call-to-action, footer)
//! driven by per-tenant content and CSS-variable theme tokens. Every
//! section follows the same template: optional props with built-in
//! defaults resolved per field, a section-owned scroll reveal, and theme
//! tokens applied through indirection only - the same components render
//! under any tenant theme.
//!
//! ## Architecture
//!
//! - [`types`] - the typed tenant/content schema, validated once at the boundary
//! - [`content`] - the three-tier override resolution (flat, legacy nested, default)
//! - [`theme`] - theme token indirection and missing-media gradient fallbacks
//! - [`interactions`] - the view-state layer: scroll reveal, count-up, accordion
//! - [`components`] - the section components and [`components::StorefrontPage`]
//! - [`styles`] - the stylesheet, including `:root` token defaults
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cannabizz_storefront::{mount_storefront, types::Tenant};
//!
//! let tenant = Tenant {
//!     business_name: "Cannabizz".into(),
//!     ..Default::default()
//! };
//! mount_storefront(tenant);
//! ```
//!
//! Everything degrades gracefully: missing content falls back to typed
//! defaults, missing media to themed gradients, and a missing
//! IntersectionObserver API to always-visible content. No error ever
//! surfaces to the end user.

pub mod components;
pub mod content;
pub mod interactions;
pub mod styles;
pub mod theme;
pub mod types;

use components::StorefrontPage;
use leptos::prelude::*;
use types::Tenant;

/// Mount the complete storefront page (with its stylesheet) to `<body>`.
///
/// This is the all-defaults entry point; hosts that need to override media
/// URLs or link targets compose [`StorefrontPage`] directly.
pub fn mount_storefront(tenant: Tenant) {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(move || {
        view! {
            <style>{styles::STOREFRONT_CSS}</style>
            <StorefrontPage tenant=tenant />
        }
    });
}
