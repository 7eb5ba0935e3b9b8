//! Pricing cards with the billing period switch.

use leptos::prelude::*;

use super::{BillingTabs, Icon, PeriodPanel, ICON_CHECK, ICON_X};
use crate::content::{BillingPeriod, Plan, PlanFeature, PLANS};
use crate::format::format_currency;

/// Plans section: tab bar plus one card per plan.
#[component]
pub fn PricingTiers(
    #[prop(default = PLANS)] plans: &'static [Plan],
) -> impl IntoView {
    let (period, set_period) = signal(BillingPeriod::Monthly);

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Pricing"</p>
                    <h2 class="section-title">"Plans that scale with your team"</h2>
                    <p class="section-description">
                        "Start free, upgrade when you need automation. Annual billing saves 20%."
                    </p>
                </div>
                <BillingTabs period=period set_period=set_period />
                <div class="pricing-grid">
                    {plans
                        .iter()
                        .map(|plan| view! { <PlanCard plan=plan period=period /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, period: ReadSignal<BillingPeriod>) -> impl IntoView {
    let card_class = if plan.highlighted { "plan-card highlighted" } else { "plan-card" };

    view! {
        <div class=card_class data-plan=plan.name>
            {plan.highlighted.then(|| view! { <span class="plan-badge">"Most popular"</span> })}
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-tagline">{plan.tagline}</p>
            <div class="plan-price">
                {BillingPeriod::ALL
                    .into_iter()
                    .map(|option| {
                        let (amount, suffix) = match plan.price.monthly_for(option) {
                            Some(price) => (format_currency(price), option.price_suffix()),
                            None => ("Custom".to_string(), "tailored to your organization"),
                        };
                        view! {
                            <PeriodPanel period=period show_for=option>
                                <span class="price-amount">{amount}</span>
                                <span class="price-suffix">{suffix}</span>
                            </PeriodPanel>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <FeatureBullet feature=feature /> })
                    .collect::<Vec<_>>()}
            </ul>
            <a href=plan.cta_href class={if plan.highlighted { "btn btn-primary" } else { "btn btn-secondary" }}>
                {plan.cta}
            </a>
        </div>
    }
}

#[component]
fn FeatureBullet(feature: &'static PlanFeature) -> impl IntoView {
    let (icon, class, label) = if feature.included {
        (ICON_CHECK, "feature included", "Included")
    } else {
        (ICON_X, "feature excluded", "Not included")
    };

    view! {
        <li class=class>
            <Icon path=icon size="16" class="feature-icon" label=label />
            <span>{feature.text}</span>
        </li>
    }
}
