//! ROI estimator form and results panel.
//!
//! The committed input lives in one signal. Every form edit goes through
//! [`EstimatorInput::with_field`] (tolerant coercion) and the result is a
//! memo over that signal, so the panel always shows the figures for the
//! latest committed input and nothing else.
//!
//! Every figure carries a `data-result` id so the static document's script
//! can refresh the same elements without the reactive runtime.

use leptos::prelude::*;
use roi_core::{
    CostEstimator, EstimatorInput, EstimatorPolicy, EstimatorResult, InputField, SolutionTier,
};

use crate::format::{format_currency, format_months, format_percent};

/// Committed estimator input and the result derived from it.
#[derive(Clone, Copy)]
struct EstimatorState {
    set_input: WriteSignal<EstimatorInput>,
    result: Memo<EstimatorResult>,
}

impl EstimatorState {
    fn new(policy: EstimatorPolicy, initial: EstimatorInput) -> Self {
        let estimator = CostEstimator::new(policy);
        let (input, set_input) = signal(initial);
        let result = Memo::new(move |_| estimator.compute(&input.get()));
        Self { set_input, result }
    }

    fn commit(&self, field: InputField, raw: &str) {
        self.set_input
            .update(|current| *current = current.with_field(field, raw));
    }
}

/// Estimator section.
#[component]
pub fn RoiEstimator(
    #[prop(optional)] policy: EstimatorPolicy,
    #[prop(optional)] initial: Option<EstimatorInput>,
) -> impl IntoView {
    let initial = initial.unwrap_or_default();
    let state = EstimatorState::new(policy, initial);
    let result = state.result;

    let commit = move |field: InputField, raw: String| state.commit(field, &raw);

    view! {
        <section id="roi" class="estimator">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"ROI estimator"</p>
                    <h2 class="section-title">"What would you save?"</h2>
                    <p class="section-description">
                        "Plug in your numbers. Figures update as you type."
                    </p>
                </div>
                <div class="estimator-grid">
                    <form class="estimator-form" on:submit=|ev| ev.prevent_default()>
                        <NumberField
                            field=InputField::EmployeeCount
                            label="Employees"
                            initial=initial
                            on_commit=commit
                        />
                        <NumberField
                            field=InputField::AnnualIncidentCount
                            label="Security incidents per year"
                            initial=initial
                            on_commit=commit
                        />
                        <NumberField
                            field=InputField::CostPerIncident
                            label="Average cost per incident ($)"
                            initial=initial
                            on_commit=commit
                        />
                        <TierSelect initial=initial.current_solution_tier on_commit=commit />
                        <NumberField
                            field=InputField::MonthlyProcessingVolume
                            label="Events processed per month"
                            initial=initial
                            on_commit=commit
                        />
                    </form>
                    <ResultsPanel result=result />
                </div>
                <p class="estimator-footnote">
                    "Assumes a 60% reduction in incident cost. Estimates are illustrative, not a quote."
                </p>
            </div>
        </section>
    }
}

#[component]
fn NumberField<F>(
    field: InputField,
    label: &'static str,
    initial: EstimatorInput,
    on_commit: F,
) -> impl IntoView
where
    F: Fn(InputField, String) + Copy + Send + Sync + 'static,
{
    let step = if field == InputField::CostPerIncident { "100" } else { "1" };

    view! {
        <label class="field" for=field.id()>
            <span class="field-label">{label}</span>
            <input
                id=field.id()
                name=field.id()
                type="number"
                min="0"
                step=step
                inputmode="numeric"
                value=initial.field_text(field)
                on:input=move |ev| on_commit(field, event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn TierSelect<F>(initial: SolutionTier, on_commit: F) -> impl IntoView
where
    F: Fn(InputField, String) + Copy + Send + Sync + 'static,
{
    let field = InputField::CurrentSolutionTier;

    view! {
        <label class="field" for=field.id()>
            <span class="field-label">"Current security solution"</span>
            <select
                id=field.id()
                name=field.id()
                on:change=move |ev| on_commit(field, event_target_value(&ev))
            >
                {SolutionTier::ALL
                    .into_iter()
                    .map(|tier| {
                        view! {
                            <option value=tier.as_label() selected={tier == initial}>
                                {tier.display_name()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn ResultsPanel(result: Memo<EstimatorResult>) -> impl IntoView {
    let savings_class = move || {
        if result.get().annual_savings >= 0.0 {
            "result-value positive"
        } else {
            "result-value negative"
        }
    };

    view! {
        <div class="estimator-results" aria-live="polite">
            <ResultRow
                label="Current annual cost"
                id="current-annual-cost"
                value=Signal::derive(move || format_currency(result.get().current_annual_cost))
            />
            <ResultRow
                label="Projected annual cost"
                id="projected-annual-cost"
                value=Signal::derive(move || format_currency(result.get().projected_annual_cost))
            />
            <div class="result-row result-highlight">
                <span class="result-label">"Annual savings"</span>
                <span class=savings_class data-result="annual-savings">
                    {move || format_currency(result.get().annual_savings)}
                </span>
            </div>
            <ResultRow
                label="Return on investment"
                id="return-on-investment"
                value=Signal::derive(move || format_percent(result.get().return_on_investment_pct))
            />
            <ResultRow
                label="Payback period"
                id="payback-months"
                value=Signal::derive(move || format_months(result.get().payback_months))
            />
            <details class="result-breakdown">
                <summary>"How we got there"</summary>
                <ul>
                    <li>
                        "Current tooling: "
                        <span data-result="baseline-monthly-cost">
                            {move || format_currency(result.get().baseline_monthly_cost)}
                        </span>
                        " per month"
                    </li>
                    <li>
                        "Incidents: "
                        <span data-result="annual-incident-cost">
                            {move || format_currency(result.get().annual_incident_cost)}
                        </span>
                        " per year"
                    </li>
                    <li>
                        "Subscription: "
                        <span data-result="subscription-monthly-cost">
                            {move || format_currency(result.get().subscription_monthly_cost)}
                        </span>
                        " per month"
                    </li>
                </ul>
            </details>
        </div>
    }
}

#[component]
fn ResultRow(label: &'static str, id: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="result-row">
            <span class="result-label">{label}</span>
            <span class="result-value" data-result=id>
                {move || value.get()}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn starts_from_initial_input() {
        let owner = Owner::new();
        owner.set();

        let state = EstimatorState::new(EstimatorPolicy::default(), EstimatorInput::default());
        assert_eq!(
            state.result.get_untracked(),
            CostEstimator::default().compute(&EstimatorInput::default())
        );
        assert_eq!(state.result.get_untracked().current_annual_cost, 106_000.0);
    }

    #[test]
    fn result_follows_each_committed_edit() {
        let owner = Owner::new();
        owner.set();

        let state = EstimatorState::new(EstimatorPolicy::default(), EstimatorInput::default());

        state.commit(InputField::EmployeeCount, "250");
        // 5 * 250 * 12 + 100000
        assert_eq!(state.result.get_untracked().current_annual_cost, 115_000.0);

        state.commit(InputField::CurrentSolutionTier, "inhouse");
        // 25 * 250 * 12 + 100000
        assert_eq!(state.result.get_untracked().current_annual_cost, 175_000.0);

        state.commit(InputField::CostPerIncident, "not a number");
        let result = state.result.get_untracked();
        assert_eq!(result.annual_incident_cost, 0.0);
        assert_eq!(result.current_annual_cost, 75_000.0);

        let expected = EstimatorInput {
            employee_count: 250,
            current_solution_tier: SolutionTier::Inhouse,
            cost_per_incident: 0.0,
            ..Default::default()
        };
        assert_eq!(result, CostEstimator::default().compute(&expected));
    }
}
