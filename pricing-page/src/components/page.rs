//! Full page body - shared by the static document and the browser app

use leptos::prelude::*;

use super::{
    FaqAccordion, FeatureComparison, Footer, Hero, Nav, PricingTiers, RoiEstimator, Testimonials,
};
use crate::PageOptions;

/// Every section of the pricing page in display order.
#[component]
pub fn PricingPage(#[prop(optional)] options: PageOptions) -> impl IntoView {
    let PageOptions {
        product_name,
        policy,
        initial_input,
    } = options;

    view! {
        <Nav product_name=product_name.clone() />
        <main>
            <Hero product_name=product_name.clone() />
            <PricingTiers />
            <FeatureComparison />
            <RoiEstimator policy=policy initial=initial_input />
            <Testimonials />
            <FaqAccordion />
        </main>
        <Footer product_name=product_name />
    }
}
