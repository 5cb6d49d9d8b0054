//! SVG icon components.
//!
//! Inline stroke icons in the Lucide style (24x24 viewBox, `currentColor`).
//! Content configs reference icons by string key; [`icon_path`] is the
//! finite mapping over that closed key set. Unknown keys return `None` and
//! each consuming section substitutes its own designated fallback icon, so
//! a typo in a config never renders an empty slot.

use leptos::prelude::*;

/// Renders an inline stroke icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_LEAF size="32" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Stroke color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            stroke=color
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Lightning bolt (fast processing)
pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

/// Shield (certified quality)
pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";

/// Sparkles (premium)
pub const ICON_SPARKLES: &str = "M12 3l1.9 5.8a2 2 0 0 0 1.3 1.3L21 12l-5.8 1.9a2 2 0 0 0-1.3 1.3L12 21l-1.9-5.8a2 2 0 0 0-1.3-1.3L3 12l5.8-1.9a2 2 0 0 0 1.3-1.3L12 3z";

/// Delivery truck
pub const ICON_TRUCK: &str = "M10 17h4V5H2v12h3m10 0h2l3-5h-5V7h-2v10zM5 17a2 2 0 1 0 4 0 2 2 0 0 0-4 0zm11 0a2 2 0 1 0 4 0 2 2 0 0 0-4 0z";

/// Leaf (clean grown)
pub const ICON_LEAF: &str = "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10zM2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12";

/// Clock (same-day processing)
pub const ICON_CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2";

/// Award ribbon
pub const ICON_AWARD: &str = "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89 7 23l5-3 5 3-1.21-9.12";

/// Heart with pulse line (wellness)
pub const ICON_HEART_PULSE: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7zM3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27";

/// Chevron pointing down (scroll indicator, accordion caret)
pub const ICON_CHEVRON_DOWN: &str = "m6 9 6 6 6-6";

/// Hamburger menu (mobile navigation)
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

/// Close cross (mobile navigation)
pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

/// Shopping cart
pub const ICON_SHOPPING_CART: &str = "M8 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM19 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57L23 6H6";

/// Resolve a content-config icon key to its path data.
///
/// The key set is closed; anything else returns `None` and the caller
/// falls back to its section default.
pub fn icon_path(key: &str) -> Option<&'static str> {
    match key {
        "Zap" => Some(ICON_ZAP),
        "Shield" => Some(ICON_SHIELD),
        "Sparkles" => Some(ICON_SPARKLES),
        "Truck" => Some(ICON_TRUCK),
        "Leaf" => Some(ICON_LEAF),
        "Clock" => Some(ICON_CLOCK),
        "Award" => Some(ICON_AWARD),
        "HeartPulse" => Some(ICON_HEART_PULSE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(icon_path("Zap"), Some(ICON_ZAP));
        assert_eq!(icon_path("HeartPulse"), Some(ICON_HEART_PULSE));
    }

    #[test]
    fn unknown_keys_are_rejected_for_the_caller_to_fall_back() {
        assert_eq!(icon_path("Cannabis"), None);
        assert_eq!(icon_path(""), None);
        // Keys are exact, not case-folded.
        assert_eq!(icon_path("zap"), None);
    }
}
