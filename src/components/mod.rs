//! Leptos components for the storefront page.
//!
//! One module per section, each following the shared template: optional
//! content props with built-in defaults, a section-owned scroll reveal,
//! theme tokens via indirection.
//!
//! # Component hierarchy
//!
//! ```text
//! StorefrontPage
//! ├── Navigation
//! ├── Hero
//! ├── ValueProps
//! ├── About
//! ├── Features
//! ├── Stats
//! │   └── AnimatedCounter (per figure)
//! ├── Faq
//! │   └── FaqEntry (accordion)
//! ├── ConsultationCta
//! └── Footer
//! ```

mod about;
mod cta;
mod faq;
mod features;
mod footer;
mod hero;
mod icons;
mod navigation;
mod page;
mod section;
mod stats;
mod value_props;

pub use about::{default_about_stats, About};
pub use cta::ConsultationCta;
pub use faq::{default_faq_items, Faq, DEFAULT_OPEN_INDEX};
pub use features::{default_features, Features};
pub use footer::{default_footer_columns, Footer};
pub use hero::Hero;
pub use icons::*;
pub use navigation::{default_nav_links, Navigation};
pub use page::StorefrontPage;
pub use section::{reveal_class, SectionHeader};
pub use stats::{default_stats, Stats};
pub use value_props::{default_value_props, ValueProps};
