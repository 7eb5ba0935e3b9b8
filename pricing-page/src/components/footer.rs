//! Page footer

use leptos::prelude::*;

use crate::content::CONTACT_URL;

/// Footer links and copyright line.
#[component]
pub fn Footer(product_name: String) -> impl IntoView {
    let copyright = format!("© {} · Developed by The Bastion Team (c)2025", product_name);
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    <a href="#pricing" class="footer-link">"Pricing"</a>
                    <a href="#faq" class="footer-link">"FAQ"</a>
                    <a href=CONTACT_URL class="footer-link">"Contact sales"</a>
                    <a href="/legal/terms" class="footer-link">"Terms"</a>
                    <a href="/legal/privacy" class="footer-link">"Privacy"</a>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
