//! Tenant and content data types.
//!
//! These types define the data model a storefront page is rendered from.
//! They're designed to be:
//!
//! - **Serializable** - tenant settings arrive as JSON from the site builder
//! - **Clone-friendly** - components can take owned copies without borrowing issues
//! - **Default-able** - every field is optional with `..Default::default()` support,
//!   so a page renders fully even from an empty config
//!
//! Settings payloads are validated once at the boundary via
//! [`Tenant::from_settings_json`]; past that point nothing branches on
//! untyped data.
//!
//! # Example
//!
//! ```rust
//! use cannabizz_storefront::types::{Tenant, TenantSettings, PageContent};
//!
//! let tenant = Tenant {
//!     business_name: "Green Harbor".into(),
//!     settings: TenantSettings {
//!         page_content: PageContent {
//!             home_hero_title: Some("Welcome aboard".into()),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     },
//! };
//! assert_eq!(tenant.business_name, "Green Harbor");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a tenant payload at the boundary.
#[derive(Debug, Error)]
pub enum TenantError {
    /// The settings payload was not valid JSON for the schema.
    #[error("invalid tenant settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A tenant must carry a non-empty business name.
    #[error("tenant business name is empty")]
    MissingBusinessName,
}

/// The site owner whose business data parameterizes the rendered page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Display name used in the navigation, hero, about and footer sections.
    pub business_name: String,
    /// Per-tenant settings (content overrides, media paths).
    #[serde(default)]
    pub settings: TenantSettings,
}

impl Tenant {
    /// Parse and validate a tenant from a raw settings JSON payload.
    ///
    /// This is the single untyped-to-typed boundary: components downstream
    /// only ever see this schema.
    pub fn from_settings_json(json: &str) -> Result<Self, TenantError> {
        let tenant: Tenant = serde_json::from_str(json)?;
        if tenant.business_name.trim().is_empty() {
            return Err(TenantError::MissingBusinessName);
        }
        Ok(tenant)
    }
}

/// Per-tenant settings supplied by the site builder.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    /// Per-section content overrides.
    #[serde(default)]
    pub page_content: PageContent,
    /// Uploaded logo path, if any.
    pub logo_path: Option<String>,
    /// Uploaded hero background path, if any.
    pub hero_image_path: Option<String>,
}

/// Per-section content overrides.
///
/// Two generations of keys coexist: flat keys (`homeHeroTitle`) and the
/// legacy nested blocks (`home.heroTitle`). Resolution is uniform and lives
/// in [`crate::content::resolve`]: flat wins over nested wins over the
/// section's built-in default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Hero title override (flat key).
    pub home_hero_title: Option<String>,
    /// Hero subtitle override (flat key).
    pub home_hero_subtitle: Option<String>,
    /// Hero description override (flat key).
    pub home_hero_description: Option<String>,
    /// About heading override (flat key).
    pub about_heading: Option<String>,
    /// About mission paragraph override (flat key).
    pub about_mission: Option<String>,
    /// Legacy nested hero overrides.
    #[serde(default)]
    pub home: Option<HomeContent>,
    /// Legacy nested about overrides.
    #[serde(default)]
    pub about: Option<AboutContent>,
}

/// Legacy nested hero overrides (`pageContent.home.*`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
}

/// Legacy nested about overrides (`pageContent.about.*`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub heading: Option<String>,
    pub mission: Option<String>,
}

/// One card in the value-props grid.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValueProp {
    pub title: String,
    pub description: String,
    /// Icon key, resolved via [`crate::components::icon_path`].
    pub icon: String,
}

/// One row in the features grid.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Icon key, resolved via [`crate::components::icon_path`].
    pub icon: String,
}

/// One animated figure in the stats band.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatItem {
    /// Count-up target.
    pub value: u64,
    /// Rendered before the number (e.g. `$`).
    #[serde(default)]
    pub prefix: Option<String>,
    /// Rendered after the number (e.g. `+`, `%`).
    #[serde(default)]
    pub suffix: Option<String>,
    pub label: String,
}

/// A static figure in the about section (pre-formatted, no animation).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AboutStat {
    pub value: String,
    pub label: String,
}

/// One question/answer entry in the FAQ accordion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A navigation link.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// One column of links in the footer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_camel_case_settings() {
        let json = r#"{
            "businessName": "Green Harbor",
            "settings": {
                "pageContent": {
                    "homeHeroTitle": "Welcome aboard",
                    "home": { "heroSubtitle": "Legacy subtitle" }
                },
                "logoPath": "/media/logo.png"
            }
        }"#;

        let tenant = Tenant::from_settings_json(json).unwrap();
        assert_eq!(tenant.business_name, "Green Harbor");
        let content = &tenant.settings.page_content;
        assert_eq!(content.home_hero_title.as_deref(), Some("Welcome aboard"));
        assert_eq!(
            content.home.as_ref().unwrap().hero_subtitle.as_deref(),
            Some("Legacy subtitle")
        );
        assert_eq!(tenant.settings.logo_path.as_deref(), Some("/media/logo.png"));
        assert_eq!(tenant.settings.hero_image_path, None);
    }

    #[test]
    fn empty_payload_still_yields_a_complete_tenant_shape() {
        let tenant = Tenant {
            business_name: "Anything".into(),
            ..Default::default()
        };
        // Every downstream field has a well-defined empty state.
        assert!(tenant.settings.page_content.home_hero_title.is_none());
        assert!(tenant.settings.page_content.home.is_none());
    }

    #[test]
    fn rejects_missing_business_name() {
        let err = Tenant::from_settings_json(r#"{ "businessName": "  " }"#).unwrap_err();
        assert!(matches!(err, TenantError::MissingBusinessName));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Tenant::from_settings_json("{ not json").unwrap_err();
        assert!(matches!(err, TenantError::Parse(_)));
    }
}
