//! Top navigation bar

use leptos::prelude::*;

use super::{Icon, ICON_SHIELD};
use crate::content::SIGNUP_URL;

/// Sticky top bar with section anchors.
#[component]
pub fn Nav(product_name: String) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <Icon path=ICON_SHIELD size="24" class="nav-logo" />
                    <span class="nav-title">{product_name}</span>
                </a>
                <div class="nav-links">
                    <a href="#pricing" class="nav-link">"Pricing"</a>
                    <a href="#compare" class="nav-link">"Compare"</a>
                    <a href="#roi" class="nav-link">"ROI"</a>
                    <a href="#faq" class="nav-link">"FAQ"</a>
                    <a href=SIGNUP_URL class="nav-cta">"Start free"</a>
                </div>
            </div>
        </nav>
    }
}
