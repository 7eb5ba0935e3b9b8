//! CSS styles for the pricing page.
//!
//! One stylesheet serves both the prerendered document (inlined in `<head>`)
//! and the landing app (injected by the app root).
//!
//! # Customization
//!
//! ```rust
//! use pricing_page::styles::PAGE_CSS;
//!
//! let my_css = ".plan-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.contains(".pricing-grid"));
//! ```

/// Complete CSS for the page - dark theme, single accent color.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-black: #05070a;
    --bg-dark: #0b0f14;
    --bg-mid: #131a22;
    --text-bright: #e6edf3;
    --text-dim: #9aa7b4;
    --text-muted: #5b6672;
    --border-subtle: rgba(230, 237, 243, 0.08);
    --border-visible: rgba(230, 237, 243, 0.18);
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --container-max: 1120px;
    --accent: #3b82f6;
    --accent-soft: rgba(59, 130, 246, 0.15);
    --positive: #10b981;
    --negative: #ef4444;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg-black);
    color: var(--text-bright);
    font-family: var(--font-sans);
    line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.hidden { display: none !important; }

/* Nav */
.nav {
    position: sticky;
    top: 0;
    z-index: 10;
    background: rgba(5, 7, 10, 0.85);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border-subtle);
}
.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 14px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-brand { display: flex; align-items: center; gap: 10px; font-weight: 700; }
.nav-logo { color: var(--accent); }
.nav-links { display: flex; align-items: center; gap: 24px; }
.nav-link { color: var(--text-dim); font-size: 14px; }
.nav-link:hover { color: var(--text-bright); }
.nav-cta {
    padding: 8px 16px;
    border-radius: 8px;
    background: var(--accent);
    color: #fff;
    font-weight: 600;
    font-size: 14px;
}

/* Hero */
.hero { padding: 96px 0 64px; text-align: center; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 12px;
    border: 1px solid var(--border-visible);
    border-radius: 999px;
    font-size: 13px;
    color: var(--text-dim);
}
.hero-badge-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--positive); }
.hero-title { font-size: clamp(36px, 6vw, 60px); line-height: 1.1; margin: 24px 0; }
.hero-title-accent { color: var(--accent); }
.hero-description { max-width: 640px; margin: 0 auto 32px; color: var(--text-dim); font-size: 18px; }
.hero-actions { display: flex; justify-content: center; gap: 16px; flex-wrap: wrap; }

/* Buttons */
.btn {
    display: inline-block;
    padding: 12px 22px;
    border-radius: 10px;
    font-weight: 600;
    text-align: center;
    transition: background 0.15s ease;
}
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { background: #2563eb; }
.btn-secondary { border: 1px solid var(--border-visible); color: var(--text-bright); }
.btn-secondary:hover { background: var(--bg-mid); }

/* Sections */
section { padding: 80px 0; }
.section-header { text-align: center; margin-bottom: 40px; }
.section-eyebrow {
    text-transform: uppercase;
    letter-spacing: 0.12em;
    font-size: 12px;
    color: var(--accent);
    margin: 0 0 8px;
}
.section-title { font-size: 34px; margin: 0 0 12px; }
.section-description { color: var(--text-dim); margin: 0 auto; max-width: 560px; }

/* Billing tabs */
.tab-bar {
    display: flex;
    justify-content: center;
    gap: 4px;
    margin: 0 auto 40px;
    padding: 4px;
    width: fit-content;
    border-radius: 12px;
    background: var(--bg-mid);
}
.tab {
    border: 0;
    background: transparent;
    color: var(--text-dim);
    padding: 8px 18px;
    border-radius: 8px;
    font: inherit;
    cursor: pointer;
}
.tab.active { background: var(--accent); color: #fff; }

/* Pricing cards */
.pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
    align-items: stretch;
}
.plan-card {
    position: relative;
    display: flex;
    flex-direction: column;
    padding: 32px;
    border: 1px solid var(--border-subtle);
    border-radius: 16px;
    background: var(--bg-dark);
}
.plan-card.highlighted { border-color: var(--accent); box-shadow: 0 0 0 4px var(--accent-soft); }
.plan-badge {
    position: absolute;
    top: -12px;
    left: 32px;
    padding: 2px 10px;
    border-radius: 999px;
    background: var(--accent);
    color: #fff;
    font-size: 12px;
    font-weight: 600;
}
.plan-name { margin: 0; font-size: 20px; }
.plan-tagline { color: var(--text-dim); margin: 4px 0 20px; font-size: 14px; }
.plan-price { min-height: 64px; margin-bottom: 20px; }
.price-amount { font-size: 40px; font-weight: 700; margin-right: 6px; }
.price-suffix { color: var(--text-dim); font-size: 14px; }
.plan-features { list-style: none; padding: 0; margin: 0 0 28px; flex: 1; }
.feature { display: flex; align-items: center; gap: 10px; padding: 6px 0; font-size: 14px; }
.feature.included .feature-icon { color: var(--positive); }
.feature.excluded { color: var(--text-muted); }

/* Comparison table */
.table-scroll { overflow-x: auto; }
.comparison-table { width: 100%; border-collapse: collapse; font-size: 14px; }
.comparison-table th, .comparison-table td {
    padding: 12px 16px;
    border-bottom: 1px solid var(--border-subtle);
    text-align: center;
}
.comparison-table th[scope="row"] { text-align: left; font-weight: 400; color: var(--text-dim); }
.comparison-category th {
    text-align: left;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    font-size: 12px;
    color: var(--accent);
    padding-top: 28px;
}
.cell-yes { color: var(--positive); }
.cell-no { color: var(--text-muted); }

/* ROI estimator */
.estimator-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 32px;
}
.estimator-form, .estimator-results {
    padding: 28px;
    border-radius: 16px;
    border: 1px solid var(--border-subtle);
    background: var(--bg-dark);
}
.field { display: block; margin-bottom: 18px; }
.field-label { display: block; font-size: 13px; color: var(--text-dim); margin-bottom: 6px; }
.field input, .field select {
    width: 100%;
    padding: 10px 12px;
    border-radius: 8px;
    border: 1px solid var(--border-visible);
    background: var(--bg-mid);
    color: var(--text-bright);
    font: inherit;
}
.result-row {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    padding: 12px 0;
    border-bottom: 1px solid var(--border-subtle);
}
.result-label { color: var(--text-dim); }
.result-value { font-weight: 700; font-size: 20px; font-variant-numeric: tabular-nums; }
.result-highlight .result-value { font-size: 28px; }
.result-value.positive { color: var(--positive); }
.result-value.negative { color: var(--negative); }
.result-breakdown { margin-top: 16px; color: var(--text-dim); font-size: 14px; }
.result-breakdown summary { cursor: pointer; }
.estimator-footnote { text-align: center; color: var(--text-muted); font-size: 13px; margin-top: 24px; }

/* Testimonials */
.testimonial-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
}
.testimonial-card {
    margin: 0;
    padding: 28px;
    border-radius: 16px;
    background: var(--bg-dark);
    border: 1px solid var(--border-subtle);
}
.testimonial-card blockquote { margin: 0 0 20px; font-size: 16px; }
.testimonial-author { display: block; font-weight: 600; }
.testimonial-role { display: block; color: var(--text-dim); font-size: 13px; }

/* FAQ */
.faq-list { max-width: 760px; margin: 0 auto; }
.faq-item { border-bottom: 1px solid var(--border-subtle); }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
    padding: 20px 0;
    border: 0;
    background: transparent;
    color: var(--text-bright);
    font: inherit;
    font-weight: 600;
    text-align: left;
    cursor: pointer;
}
.faq-caret { transition: transform 0.2s ease; flex-shrink: 0; }
.faq-item.open .faq-caret { transform: rotate(180deg); }
.faq-answer { padding: 0 0 20px; color: var(--text-dim); }
.faq-answer p { margin: 0; }

/* Footer */
.footer { padding: 48px 0; border-top: 1px solid var(--border-subtle); text-align: center; }
.footer-links { display: flex; justify-content: center; gap: 24px; flex-wrap: wrap; margin-bottom: 16px; }
.footer-link { color: var(--text-dim); font-size: 14px; }
.footer-copyright { color: var(--text-muted); font-size: 13px; margin: 0; }

@media (max-width: 720px) {
    .nav-links .nav-link { display: none; }
    section { padding: 56px 0; }
}
"#;
