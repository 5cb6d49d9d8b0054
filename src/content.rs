//! Content override resolution.
//!
//! The site builder ships two generations of override keys: flat
//! (`homeHeroTitle`) and legacy nested (`home.heroTitle`). Every field
//! resolves through the same three-tier rule:
//!
//! 1. flat override
//! 2. legacy nested override
//! 3. the section's built-in default
//!
//! [`resolve`] is the single implementation of that rule. The
//! [`PageContent`] accessors collapse tiers 1 and 2 into one `Option`;
//! section props supply tier 3 with `unwrap_or` at the render site.

use crate::types::PageContent;

/// Resolve one content field: flat override, then legacy nested override,
/// then the built-in default.
pub fn resolve(flat: Option<&str>, legacy: Option<&str>, default: &str) -> String {
    flat.or(legacy).unwrap_or(default).to_string()
}

impl PageContent {
    /// Hero title override, flat key winning over `home.heroTitle`.
    pub fn hero_title(&self) -> Option<&str> {
        self.home_hero_title
            .as_deref()
            .or_else(|| self.home.as_ref().and_then(|h| h.hero_title.as_deref()))
    }

    /// Hero subtitle override, flat key winning over `home.heroSubtitle`.
    pub fn hero_subtitle(&self) -> Option<&str> {
        self.home_hero_subtitle
            .as_deref()
            .or_else(|| self.home.as_ref().and_then(|h| h.hero_subtitle.as_deref()))
    }

    /// Hero description override, flat key winning over `home.heroDescription`.
    pub fn hero_description(&self) -> Option<&str> {
        self.home_hero_description.as_deref().or_else(|| {
            self.home
                .as_ref()
                .and_then(|h| h.hero_description.as_deref())
        })
    }

    /// About heading override, flat key winning over `about.heading`.
    pub fn about_heading(&self) -> Option<&str> {
        self.about_heading
            .as_deref()
            .or_else(|| self.about.as_ref().and_then(|a| a.heading.as_deref()))
    }

    /// About mission override, flat key winning over `about.mission`.
    pub fn about_mission(&self) -> Option<&str> {
        self.about_mission
            .as_deref()
            .or_else(|| self.about.as_ref().and_then(|a| a.mission.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AboutContent, HomeContent};
    use pretty_assertions::assert_eq;

    #[test]
    fn flat_wins_over_nested_wins_over_default() {
        assert_eq!(resolve(Some("X"), Some("Y"), "D"), "X");
        assert_eq!(resolve(None, Some("Y"), "D"), "Y");
        assert_eq!(resolve(None, None, "D"), "D");
    }

    #[test]
    fn about_heading_prefers_flat_key() {
        let content = PageContent {
            about_heading: Some("X".into()),
            about: Some(AboutContent {
                heading: Some("Y".into()),
                mission: None,
            }),
            ..Default::default()
        };
        assert_eq!(content.about_heading(), Some("X"));
        assert_eq!(
            resolve(content.about_heading(), None, "The Story"),
            "X"
        );
    }

    #[test]
    fn about_heading_falls_back_to_nested_then_default() {
        let nested_only = PageContent {
            about: Some(AboutContent {
                heading: Some("Y".into()),
                mission: None,
            }),
            ..Default::default()
        };
        assert_eq!(nested_only.about_heading(), Some("Y"));

        let empty = PageContent::default();
        assert_eq!(empty.about_heading(), None);
        assert_eq!(
            resolve(empty.about_heading(), None, "The Story"),
            "The Story"
        );
    }

    #[test]
    fn each_hero_field_resolves_independently() {
        // A flat title must not shadow a nested subtitle: fallback is
        // per field, not all-or-nothing.
        let content = PageContent {
            home_hero_title: Some("Flat title".into()),
            home: Some(HomeContent {
                hero_title: Some("Nested title".into()),
                hero_subtitle: Some("Nested subtitle".into()),
                hero_description: None,
            }),
            ..Default::default()
        };
        assert_eq!(content.hero_title(), Some("Flat title"));
        assert_eq!(content.hero_subtitle(), Some("Nested subtitle"));
        assert_eq!(content.hero_description(), None);
    }
}
