//! Render the pricing page with default options.
//!
//! Run with: `cargo run --example render_default`

use pricing_page::{PageOptions, render_page};
use roi_core::{EstimatorInput, SolutionTier};

fn main() {
    // Start the estimator on a mid-size team migrating from a competitor
    let options = PageOptions {
        initial_input: EstimatorInput {
            employee_count: 400,
            current_solution_tier: SolutionTier::Competitor,
            ..Default::default()
        },
        ..Default::default()
    };

    let html = render_page(&options);

    let output_path = "pricing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
