//! Hero banner at the top of the page

use leptos::prelude::*;

/// Headline and calls to action.
#[component]
pub fn Hero(product_name: String) -> impl IntoView {
    let badge = format!("{} pricing", product_name);
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    {badge}
                </div>
                <h1 class="hero-title">
                    "Stop paying for incidents."
                    <br />
                    <span class="hero-title-accent">"Start preventing them."</span>
                </h1>
                <p class="hero-description">
                    "Simple, transparent plans for teams of every size. "
                    "See what you would save before you talk to anyone."
                </p>
                <div class="hero-actions">
                    <a href="#pricing" class="btn btn-primary">"See plans"</a>
                    <a href="#roi" class="btn btn-secondary">"Estimate your ROI →"</a>
                </div>
            </div>
        </section>
    }
}
