//! Theme token indirection.
//!
//! Components never hard-code colors. Every color or font is addressed
//! through a CSS custom property (`--tenant-color-*`, `--tenant-font-*`)
//! that the site builder resolves per tenant; [`crate::styles`] ships
//! `:root` defaults so the page is complete before any tenant theme loads.
//!
//! The gradient helpers cover the missing-media fallbacks: whenever a hero,
//! about or CTA image is absent, the section paints a themed gradient
//! instead of a broken asset.

use std::fmt;

/// The closed set of tenant color tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeColor {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    Heading,
    Border,
}

impl ThemeColor {
    /// CSS custom property name for this token.
    pub fn var_name(self) -> &'static str {
        match self {
            Self::Primary => "--tenant-color-primary",
            Self::Secondary => "--tenant-color-secondary",
            Self::Accent => "--tenant-color-accent",
            Self::Background => "--tenant-color-background",
            Self::Surface => "--tenant-color-surface",
            Self::Text => "--tenant-color-text",
            Self::Heading => "--tenant-color-heading",
            Self::Border => "--tenant-color-border",
        }
    }

    /// Fully opaque CSS color expression, e.g. `hsl(var(--tenant-color-primary))`.
    pub fn hsl(self) -> String {
        format!("hsl(var({}))", self.var_name())
    }

    /// CSS color expression with an alpha channel,
    /// e.g. `hsl(var(--tenant-color-primary) / 0.3)`.
    pub fn hsl_alpha(self, alpha: f32) -> String {
        format!("hsl(var({}) / {})", self.var_name(), alpha)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hsl())
    }
}

/// The two tenant font tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeFont {
    Heading,
    Base,
}

impl ThemeFont {
    /// CSS `font-family` expression with a sans-serif fallback.
    pub fn var(self) -> &'static str {
        match self {
            Self::Heading => "var(--tenant-font-heading, sans-serif)",
            Self::Base => "var(--tenant-font-base, sans-serif)",
        }
    }
}

/// Hero background when no hero image is configured.
pub fn hero_gradient() -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
        ThemeColor::Background.hsl(),
        ThemeColor::Primary.hsl_alpha(0.3),
        ThemeColor::Background.hsl()
    )
}

/// Dark-to-transparent overlay laid over the hero background (image or not).
pub fn hero_overlay() -> String {
    format!(
        "linear-gradient(180deg, {} 0%, {} 100%)",
        ThemeColor::Primary.hsl_alpha(0.7),
        ThemeColor::Background.hsl_alpha(0.95)
    )
}

/// About image panel when no about image is configured.
pub fn about_gradient() -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
        ThemeColor::Primary.hsl_alpha(0.3),
        ThemeColor::Secondary.hsl_alpha(0.2),
        ThemeColor::Accent.hsl_alpha(0.2)
    )
}

/// Stats band background.
pub fn stats_gradient() -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        ThemeColor::Primary.hsl(),
        ThemeColor::Secondary.hsl()
    )
}

/// CTA band background when no CTA image is configured.
pub fn cta_gradient() -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
        ThemeColor::Primary.hsl_alpha(0.95),
        ThemeColor::Secondary.hsl_alpha(0.85),
        ThemeColor::Accent.hsl_alpha(0.9)
    )
}

/// Overlay used when a CTA image is present.
pub fn cta_overlay() -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        ThemeColor::Primary.hsl_alpha(0.9),
        ThemeColor::Secondary.hsl_alpha(0.85)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_map_to_tenant_custom_properties() {
        assert_eq!(
            ThemeColor::Primary.hsl(),
            "hsl(var(--tenant-color-primary))"
        );
        assert_eq!(ThemeColor::Border.var_name(), "--tenant-color-border");
        assert_eq!(
            ThemeFont::Heading.var(),
            "var(--tenant-font-heading, sans-serif)"
        );
    }

    #[test]
    fn alpha_variant_keeps_the_slash_syntax() {
        assert_eq!(
            ThemeColor::Accent.hsl_alpha(0.15),
            "hsl(var(--tenant-color-accent) / 0.15)"
        );
    }

    #[test]
    fn media_fallbacks_only_reference_tokens() {
        for gradient in [
            hero_gradient(),
            hero_overlay(),
            about_gradient(),
            stats_gradient(),
            cta_gradient(),
            cta_overlay(),
        ] {
            assert!(gradient.starts_with("linear-gradient(135deg")
                || gradient.starts_with("linear-gradient(180deg"));
            assert!(gradient.contains("--tenant-color-"));
            // No literal colors allowed in the fallback paths.
            assert!(!gradient.contains('#'));
        }
    }
}
