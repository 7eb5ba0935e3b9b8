// Bastion pricing page — Leptos 0.8 CSR build
// Developed by The Bastion Team (c)2025

use leptos::prelude::*;
use pricing_page::PageOptions;
use pricing_page::components::PricingPage;
use pricing_page::styles::PAGE_CSS;
use roi_core::{EstimatorInput, InputField};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();

    let options = PageOptions {
        initial_input: input_from_query(&search),
        ..Default::default()
    };

    view! {
        <style>{PAGE_CSS}</style>
        <PricingPage options=options />
    }
}

/// Seed the estimator from a shared link such as
/// `?employees=250&incidents=4&tier=inhouse`. Unknown keys are ignored and
/// percent-decoded values go through the same coercion as form edits.
fn input_from_query(search: &str) -> EstimatorInput {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(key, value)| query_field(key).map(|field| (field, query_value(value))))
        .fold(EstimatorInput::default(), |input, (field, value)| {
            input.with_field(field, &value)
        })
}

/// Form-urlencoded value to plain text; undecodable bytes stay as typed.
fn query_value(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn query_field(key: &str) -> Option<InputField> {
    match key {
        "employees" => Some(InputField::EmployeeCount),
        "incidents" => Some(InputField::AnnualIncidentCount),
        "cost" => Some(InputField::CostPerIncident),
        "tier" => Some(InputField::CurrentSolutionTier),
        "volume" => Some(InputField::MonthlyProcessingVolume),
        _ => None,
    }
}
