//! Billing period tab bar

use leptos::prelude::*;

use crate::content::BillingPeriod;

/// Monthly / Annual switch above the pricing cards.
///
/// Buttons carry `data-period` so the static document script can drive the
/// same markup without the reactive runtime.
#[component]
pub fn BillingTabs(
    period: ReadSignal<BillingPeriod>,
    set_period: WriteSignal<BillingPeriod>,
) -> impl IntoView {
    view! {
        <div class="tab-bar billing-tabs" role="tablist" data-tab-scope="billing">
            {BillingPeriod::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            role="tab"
                            class=move || if period.get() == option { "tab active" } else { "tab" }
                            aria-selected=move || (period.get() == option).to_string()
                            data-period=option.as_label()
                            on:click=move |_| set_period.set(option)
                        >
                            {option.tab_title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Content shown only while `show_for` is the selected period.
#[component]
pub fn PeriodPanel(
    period: ReadSignal<BillingPeriod>,
    show_for: BillingPeriod,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=move || if period.get() == show_for { "period-panel" } else { "period-panel hidden" }
            data-period-panel=show_for.as_label()
        >
            {children()}
        </span>
    }
}
