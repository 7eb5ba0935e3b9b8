//! SVG icon components using Phosphor Icons.
//!
//! This module provides inline SVG icons for the pricing page.
//! All icons are from the [Phosphor Icons](https://phosphoricons.com/) library (Regular weight).

use leptos::prelude::*;

/// Inline SVG icon.
///
/// Decorative by default (`aria-hidden`); pass `label` when the icon carries
/// meaning on its own, e.g. the check/cross cells of the comparison table.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CHECK size="16" label="Included" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Accessible name; omit for decorative icons
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    let hidden = if label.is_some() { "false" } else { "true" };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            role=label.map(|_| "img")
            aria-label=label
            aria-hidden=hidden
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Check mark (included feature)
pub const ICON_CHECK: &str = "M229.66,77.66l-128,128a8,8,0,0,1-11.32,0l-56-56a8,8,0,0,1,11.32-11.32L96,188.69,218.34,66.34a8,8,0,0,1,11.32,11.32Z";

/// Cross (excluded feature)
pub const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Caret/chevron down icon (accordion)
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

/// Shield (brand mark)
pub const ICON_SHIELD: &str = "M208,40H48A16,16,0,0,0,32,56v58.78c0,89.61,75.82,119.34,91,124.39a15.53,15.53,0,0,0,10,0c15.2-5.05,91-34.78,91-124.39V56A16,16,0,0,0,208,40Zm0,74.79c0,78.42-66.35,104.62-80,109.18-13.53-4.51-80-30.69-80-109.18V56H208Z";
