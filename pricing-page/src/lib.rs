//! # pricing-page
//!
//! Leptos components and static renderer for the Bastion pricing page.
//!
//! The page is composed of pricing cards with a billing period switch, a
//! feature comparison matrix, the ROI estimator, testimonials and an FAQ
//! accordion. The same components are used twice:
//!
//! - **SSR** (`ssr` feature, default) - [`render_page`] prerenders a complete
//!   HTML document; the `pricing-render` binary writes it to disk
//! - **CSR** (`csr` feature) - the landing app mounts [`components::PricingPage`]
//!   in the browser and the estimator recomputes on every keystroke
//!
//! ## Quick Start
//!
//! ```rust
//! use pricing_page::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("$106,000"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components
//! - [`content`] - static plans, comparison matrix, testimonials, FAQ
//! - [`format`] - currency/percent/month display formatting
//! - [`styles`] - CSS constants
//!
//! The cost model itself lives in [`roi_core`].
//!
//! ---
//!
//! Developed by The Bastion Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod format;
pub mod styles;

use roi_core::{EstimatorInput, EstimatorPolicy};

/// Default product name shown in the nav, hero, title and footer.
pub const DEFAULT_PRODUCT_NAME: &str = "Bastion";

/// Inputs for one rendering of the page.
///
/// ```rust
/// use pricing_page::PageOptions;
/// use roi_core::{EstimatorInput, SolutionTier};
///
/// let options = PageOptions {
///     initial_input: EstimatorInput {
///         current_solution_tier: SolutionTier::Competitor,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(options.product_name, "Bastion");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PageOptions {
    /// Product name used in headings and the document title
    pub product_name: String,
    /// Cost model assumptions for the estimator
    pub policy: EstimatorPolicy,
    /// Values the estimator form starts with
    pub initial_input: EstimatorInput,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            policy: EstimatorPolicy::default(),
            initial_input: EstimatorInput::default(),
        }
    }
}

/// Render the complete pricing page as an HTML document.
///
/// The estimator section shows the figures for `options.initial_input`
/// computed with `options.policy`.
///
/// # Example
///
/// ```rust
/// use pricing_page::{render_page, PageOptions};
///
/// let html = render_page(&PageOptions {
///     product_name: "Acme Shield".into(),
///     ..Default::default()
/// });
/// assert!(html.contains("<title>Acme Shield | Pricing</title>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(options: &PageOptions) -> String {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    use components::PricingDocument;

    let doc = view! { <PricingDocument options=options.clone() /> };
    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), "rendered pricing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use content::{COMPARISON, FAQS, PLANS, TESTIMONIALS};
    use roi_core::{SolutionTier, SubscriptionTier};

    fn default_html() -> String {
        render_page(&PageOptions::default())
    }

    #[test]
    fn renders_document_shell() {
        let html = default_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Bastion | Pricing</title>"));
        assert!(html.contains("data-accordion=\"faq\""));
    }

    #[test]
    fn renders_every_section() {
        let html = default_html();
        for id in ["pricing", "compare", "roi", "testimonials", "faq"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {id}");
        }
    }

    #[test]
    fn renders_every_plan_with_monthly_tab_active() {
        let html = default_html();
        for plan in PLANS {
            assert!(html.contains(plan.name));
            assert!(html.contains(plan.cta));
        }
        assert!(html.contains("$49"));
        assert!(html.contains("$39"));
        assert!(html.contains("Custom"));
        assert!(html.contains("Most popular"));
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-selected=\"false\"").count(), 1);
    }

    #[test]
    fn renders_a_row_per_comparison_feature() {
        let html = default_html();
        let rows: usize = COMPARISON.iter().map(|g| g.rows.len()).sum();
        assert_eq!(html.matches("class=\"comparison-row\"").count(), rows);
        for group in COMPARISON {
            assert!(html.contains(group.category));
        }
    }

    #[test]
    fn renders_default_estimate() {
        let html = default_html();
        assert!(html.contains("$106,000"));
        assert!(html.contains("$40,588"));
        assert!(html.contains("$65,412"));
        assert!(html.contains("11,124%"));
        assert!(html.contains("0.1 months"));
    }

    #[test]
    fn renders_initial_input_into_form() {
        let html = render_page(&PageOptions {
            initial_input: EstimatorInput {
                employee_count: 250,
                current_solution_tier: SolutionTier::Inhouse,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(html.contains("value=\"250\""));
        // 25 * 250 * 12 + 100000
        assert!(html.contains("$175,000"));
    }

    #[test]
    fn undefined_roi_renders_as_not_available() {
        let html = render_page(&PageOptions {
            policy: roi_core::EstimatorPolicy {
                subscription_tiers: vec![SubscriptionTier {
                    max_volume: None,
                    monthly_price: 0.0,
                }],
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(html.contains("n/a"));
    }

    #[test]
    fn faq_starts_collapsed() {
        let html = default_html();
        for faq in FAQS {
            assert!(html.contains(faq.question));
        }
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), FAQS.len());
        assert!(!html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn in_page_links_resolve() {
        let html = default_html();
        let mut anchors = 0;
        for chunk in html.split("href=\"#").skip(1) {
            let target = &chunk[..chunk.find('"').expect("href closed")];
            assert!(
                html.contains(&format!("id=\"{}\"", target)),
                "#{target} has no target"
            );
            anchors += 1;
        }
        assert!(anchors > 0);
        assert!(html.contains(&format!("href=\"{}\"", content::SIGNUP_URL)));
        assert!(html.contains(&format!("href=\"{}\"", content::CONTACT_URL)));
    }

    #[test]
    fn renders_testimonials() {
        let html = default_html();
        for item in TESTIMONIALS {
            assert!(html.contains(item.author));
        }
    }
}
