//! Leptos UI components for the pricing page.
//!
//! Every section is a `#[component]` function. They render the same way
//! under SSR (static document) and CSR (landing app); interactive state is
//! held in signals owned by the section that needs it.
//!
//! # Component Hierarchy
//!
//! ```text
//! PricingDocument (SSR only: <html>, styles, page script)
//! └── PricingPage
//!     ├── Nav
//!     ├── Hero
//!     ├── PricingTiers        (billing period signal)
//!     │   ├── BillingTabs
//!     │   └── PlanCard × n
//!     ├── FeatureComparison
//!     ├── RoiEstimator        (input signal + result memo)
//!     ├── Testimonials
//!     ├── FaqAccordion        (open item signal)
//!     └── Footer
//! ```

mod comparison;
mod document;
mod estimator;
mod faq;
mod footer;
mod hero;
mod icons;
mod nav;
mod page;
mod pricing_tiers;
mod tabs;
mod testimonials;

pub use comparison::FeatureComparison;
pub use document::{PricingDocument, PAGE_SCRIPT, POLICY_ELEMENT_ID};
pub use estimator::RoiEstimator;
pub use faq::{toggle_open, FaqAccordion};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use nav::Nav;
pub use page::PricingPage;
pub use pricing_tiers::PricingTiers;
pub use tabs::{BillingTabs, PeriodPanel};
pub use testimonials::Testimonials;
