//! CSS for the storefront page.
//!
//! All colors and fonts go through the `--tenant-*` custom properties; the
//! site builder overrides them per tenant and `:root` carries defaults so
//! the page renders complete without any theme loaded.
//!
//! The reveal transition pair lives here: `.reveal` is the hidden state
//! (offset, transparent) and `.reveal.in-view` the revealed one; the
//! view-state layer only ever switches classes.

/// Complete stylesheet for [`crate::components::StorefrontPage`].
pub const STOREFRONT_CSS: &str = r#"
:root {
    --tenant-color-primary: 142 70% 35%;
    --tenant-color-secondary: 160 60% 45%;
    --tenant-color-accent: 84 80% 55%;
    --tenant-color-background: 0 0% 100%;
    --tenant-color-surface: 140 20% 97%;
    --tenant-color-text: 150 10% 25%;
    --tenant-color-heading: 150 30% 12%;
    --tenant-color-border: 140 15% 88%;
    --tenant-font-heading: 'Poppins', sans-serif;
    --tenant-font-base: 'Inter', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    line-height: 1.6;
}

.storefront {
    overflow-x: hidden;
}

img {
    max-width: 100%;
    display: block;
}

button {
    font: inherit;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0;
}

a {
    text-decoration: none;
    color: inherit;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow {
    max-width: 768px;
}

/* ---- Reveal transitions ---------------------------------------------- */

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition:
        opacity 500ms cubic-bezier(0.22, 1, 0.36, 1),
        transform 500ms cubic-bezier(0.22, 1, 0.36, 1);
}

.reveal.in-view {
    opacity: 1;
    transform: translateY(0);
}

.reveal-from-left {
    transform: translateX(-30px);
}

.reveal-from-right {
    transform: translateX(30px);
}

.reveal-from-left.in-view,
.reveal-from-right.in-view {
    transform: translateX(0);
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}

/* ---- Navigation ------------------------------------------------------ */

.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    padding: 12px 0;
    transition: background-color 300ms ease, box-shadow 300ms ease;
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.nav-logo {
    width: 40px;
    height: 40px;
    object-fit: contain;
}

.nav-title {
    font-size: 20px;
    font-weight: 800;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 32px;
}

.nav-link {
    font-size: 14px;
    font-weight: 500;
    transition: opacity 200ms ease;
}

.nav-link:hover {
    opacity: 0.8;
}

.nav-actions {
    display: none;
    align-items: center;
    gap: 16px;
}

.nav-cta {
    padding: 8px 24px;
    font-size: 14px;
    font-weight: 700;
    color: #ffffff;
    border-radius: 9999px;
    transition: transform 200ms ease;
}

.nav-cta:hover {
    transform: scale(1.05);
}

.nav-mobile-toggle {
    display: block;
}

.nav-mobile-menu {
    padding: 16px 24px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.nav-mobile-link {
    font-size: 16px;
    font-weight: 500;
    padding: 8px 0;
}

.nav-mobile-cta {
    text-align: center;
    padding: 12px 24px;
}

@media (min-width: 1024px) {
    .nav-links,
    .nav-actions {
        display: flex;
    }
    .nav-mobile-toggle,
    .nav-mobile-menu {
        display: none;
    }
}

/* ---- Hero ------------------------------------------------------------ */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-bg,
.hero-overlay {
    position: absolute;
    inset: 0;
}

.hero-glow {
    position: absolute;
    inset: 0;
    pointer-events: none;
    overflow: hidden;
}

.hero-glow-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(120px);
}

.hero-glow-top-left {
    top: -25%;
    left: -25%;
    width: 50%;
    height: 50%;
    opacity: 0.2;
}

.hero-glow-bottom-right {
    bottom: -25%;
    right: -25%;
    width: 50%;
    height: 50%;
    opacity: 0.15;
}

.hero-glow-mid-right {
    top: 33%;
    right: 25%;
    width: 33%;
    height: 33%;
    filter: blur(100px);
    opacity: 0.1;
}

.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
}

.hero-logo-badge {
    width: 128px;
    height: 128px;
    margin: 0 auto 32px;
    border-radius: 50%;
    overflow: hidden;
}

.hero-logo-badge img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-title {
    font-size: clamp(48px, 8vw, 96px);
    font-weight: 800;
    color: #ffffff;
    margin: 0 0 24px;
}

.hero-subtitle {
    font-size: clamp(20px, 3vw, 24px);
    color: rgba(255, 255, 255, 0.9);
    max-width: 672px;
    margin: 0 auto 16px;
}

.hero-description {
    font-size: 18px;
    color: rgba(255, 255, 255, 0.7);
    max-width: 576px;
    margin: 0 auto 40px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
    margin-top: 32px;
}

.hero-scroll-indicator {
    position: absolute;
    bottom: 32px;
    left: 50%;
    transform: translateX(-50%);
    animation: bounce 1.5s infinite;
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 10px); }
}

/* ---- Buttons --------------------------------------------------------- */

.btn {
    display: inline-block;
    padding: 16px 40px;
    font-size: 16px;
    font-weight: 700;
    border-radius: 9999px;
    transition: transform 200ms ease, box-shadow 200ms ease;
}

.btn:hover {
    transform: scale(1.05);
}

.btn-primary {
    color: #ffffff;
}

.btn-secondary {
    border: 2px solid;
}

.btn-secondary:hover {
    background: rgba(255, 255, 255, 0.1);
}

.btn-cta {
    background: #ffffff;
    padding: 16px 48px;
    font-size: 18px;
    box-shadow: 0 0 30px rgba(255, 255, 255, 0.2);
}

/* ---- Sections -------------------------------------------------------- */

.section {
    padding: 80px 0;
}

.section-header {
    text-align: center;
    max-width: 768px;
    margin: 0 auto 64px;
}

.section-title {
    font-size: clamp(30px, 5vw, 48px);
    font-weight: 800;
    margin: 0 0 24px;
}

.section-subtitle {
    font-size: 18px;
    margin: 0;
}

.card-grid {
    display: grid;
    gap: 32px;
}

@media (min-width: 768px) {
    .card-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .card-grid-3 {
        grid-template-columns: repeat(3, 1fr);
    }
    .card-grid-4 {
        grid-template-columns: repeat(4, 1fr);
    }
}

/* ---- Value props ----------------------------------------------------- */

.value-card {
    text-align: center;
    padding: 32px;
    border-radius: 16px;
    transition-property: opacity, transform;
}

.value-card:hover {
    transform: scale(1.03);
}

.value-card-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto 24px;
    border-radius: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.value-card-title {
    font-size: 20px;
    font-weight: 700;
    margin: 0 0 12px;
}

/* ---- About ----------------------------------------------------------- */

.about-grid {
    display: grid;
    gap: 64px;
    align-items: center;
}

@media (min-width: 1024px) {
    .about-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

.about-panel {
    position: relative;
    aspect-ratio: 4 / 3;
    border-radius: 16px;
    overflow: hidden;
}

.about-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.about-mission {
    font-size: 18px;
    line-height: 1.7;
    margin: 0 0 32px;
}

.about-stats {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
    margin-bottom: 32px;
}

.about-stat {
    text-align: center;
}

.about-stat-value {
    font-size: 30px;
    font-weight: 800;
    margin: 0;
}

.about-stat-label {
    font-size: 14px;
    margin: 0;
}

/* ---- Features -------------------------------------------------------- */

.feature-row {
    display: flex;
    gap: 16px;
    padding: 24px;
    border-radius: 12px;
    transition-property: opacity, transform;
}

.feature-row:hover {
    transform: scale(1.02);
}

.feature-row-icon {
    width: 48px;
    height: 48px;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
}

.feature-row-title {
    font-size: 18px;
    font-weight: 700;
    margin: 0 0 4px;
}

.feature-row-description {
    font-size: 14px;
    line-height: 1.6;
    margin: 0;
}

/* ---- Stats band ------------------------------------------------------ */

.stats {
    position: relative;
    overflow: hidden;
}

.stats-glow {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.stats-glow-orb {
    position: absolute;
    top: 0;
    left: 25%;
    width: 50%;
    height: 50%;
    border-radius: 50%;
    filter: blur(100px);
    opacity: 0.2;
}

.stats-content {
    position: relative;
    z-index: 10;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 32px;
}

@media (min-width: 1024px) {
    .stats-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

.stat {
    text-align: center;
    transition-property: opacity, transform;
}

.stat-value {
    font-size: clamp(48px, 6vw, 60px);
    font-weight: 800;
    color: #ffffff;
    margin: 0 0 8px;
}

.stat-label {
    font-size: 18px;
    color: rgba(255, 255, 255, 0.8);
    margin: 0;
}

/* ---- FAQ ------------------------------------------------------------- */

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 20px 0;
    text-align: left;
    font-size: 18px;
    font-weight: 600;
}

.faq-caret {
    display: inline-flex;
    transition: transform 300ms cubic-bezier(0.22, 1, 0.36, 1);
}

.faq-caret.open {
    transform: rotate(180deg);
}

.faq-answer {
    overflow: hidden;
    max-height: 0;
    opacity: 0;
    transition:
        max-height 350ms cubic-bezier(0.22, 1, 0.36, 1),
        opacity 350ms cubic-bezier(0.22, 1, 0.36, 1);
}

.faq-answer.open {
    max-height: 320px;
    opacity: 1;
}

.faq-answer p {
    margin: 0;
    padding-bottom: 20px;
    line-height: 1.7;
}

/* ---- CTA band -------------------------------------------------------- */

.cta {
    position: relative;
    padding: 96px 0;
    overflow: hidden;
}

.cta-bg {
    position: absolute;
    inset: 0;
}

.cta-glow {
    position: absolute;
    inset: 0;
    pointer-events: none;
    overflow: hidden;
}

.cta-glow-orb {
    position: absolute;
    top: -33%;
    right: -25%;
    width: 66%;
    height: 66%;
    border-radius: 50%;
    filter: blur(120px);
    opacity: 0.25;
}

.cta-content {
    position: relative;
    z-index: 10;
    text-align: center;
}

.cta-heading {
    font-family: var(--tenant-font-heading, sans-serif);
    font-size: clamp(36px, 6vw, 60px);
    font-weight: 800;
    color: #ffffff;
    margin: 0 0 24px;
}

.cta-subtitle {
    font-size: 20px;
    color: rgba(255, 255, 255, 0.9);
    max-width: 672px;
    margin: 0 auto 40px;
}

/* ---- Footer ---------------------------------------------------------- */

.footer {
    padding: 64px 0 32px;
    color: #ffffff;
}

.footer-grid {
    display: grid;
    gap: 48px;
    margin-bottom: 48px;
}

@media (min-width: 768px) {
    .footer-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .footer-grid {
        grid-template-columns: 2fr 1fr 1fr 1fr;
    }
}

.footer-brand-row {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 16px;
}

.footer-logo {
    width: 40px;
    height: 40px;
    object-fit: contain;
}

.footer-title {
    font-size: 20px;
    font-weight: 800;
}

.footer-tagline {
    color: rgba(255, 255, 255, 0.7);
    font-size: 14px;
    line-height: 1.6;
    max-width: 384px;
    margin: 0;
}

.footer-column-title {
    font-size: 14px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: rgba(255, 255, 255, 0.9);
    margin: 0 0 16px;
}

.footer-links {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.footer-link {
    font-size: 14px;
    color: rgba(255, 255, 255, 0.6);
    transition: color 200ms ease;
}

.footer-link:hover {
    color: #ffffff;
}

.footer-disclaimer {
    font-size: 12px;
    color: rgba(255, 255, 255, 0.4);
    max-width: 768px;
    margin: 0 0 32px;
}

.footer-bottom {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding-top: 24px;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
}

.footer-copyright {
    font-size: 14px;
    color: rgba(255, 255, 255, 0.5);
    margin: 0;
}

.footer-powered {
    font-size: 12px;
    color: rgba(255, 255, 255, 0.3);
    margin: 0;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeColor;

    #[test]
    fn root_declares_a_default_for_every_color_token() {
        let tokens = [
            ThemeColor::Primary,
            ThemeColor::Secondary,
            ThemeColor::Accent,
            ThemeColor::Background,
            ThemeColor::Surface,
            ThemeColor::Text,
            ThemeColor::Heading,
            ThemeColor::Border,
        ];
        for token in tokens {
            assert!(
                STOREFRONT_CSS.contains(token.var_name()),
                "missing default for {}",
                token.var_name()
            );
        }
    }

    #[test]
    fn reveal_pair_is_defined() {
        assert!(STOREFRONT_CSS.contains(".reveal {"));
        assert!(STOREFRONT_CSS.contains(".reveal.in-view {"));
    }
}
