//! Root document component - the complete static HTML page

use leptos::prelude::*;
use tracing::warn;

use super::PricingPage;
use crate::styles::PAGE_CSS;
use crate::PageOptions;

/// The complete HTML document for the prerendered page.
///
/// Without the reactive runtime [`PAGE_SCRIPT`] drives the billing tabs,
/// the FAQ accordion and the estimator. The estimator reads its policy from
/// the JSON block with id [`POLICY_ELEMENT_ID`].
#[component]
pub fn PricingDocument(options: PageOptions) -> impl IntoView {
    let title = format!("{} | Pricing", options.product_name);
    let policy_json = serde_json::to_string(&options.policy).unwrap_or_else(|err| {
        warn!(%err, "cannot embed estimator policy, static estimator stays fixed");
        String::new()
    });

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <PricingPage options=options />
                <script type="application/json" id=POLICY_ELEMENT_ID>
                    {policy_json}
                </script>
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Id of the `<script type="application/json">` holding the estimator policy.
pub const POLICY_ELEMENT_ID: &str = "estimator-policy";

/// Billing tabs, accordion and estimator behavior for the static page.
pub const PAGE_SCRIPT: &str = r#"
(() => {
  // Billing period tabs
  const tabs = document.querySelectorAll('[data-tab-scope="billing"] [data-period]');
  tabs.forEach(tab => {
    tab.addEventListener('click', () => {
      const period = tab.dataset.period;
      tabs.forEach(t => {
        const active = t === tab;
        t.classList.toggle('active', active);
        t.setAttribute('aria-selected', String(active));
      });
      document.querySelectorAll('[data-period-panel]').forEach(panel => {
        panel.classList.toggle('hidden', panel.dataset.periodPanel !== period);
      });
    });
  });

  // FAQ accordion: one item open at a time
  const questions = document.querySelectorAll('[data-accordion="faq"] .faq-question');
  questions.forEach(btn => {
    btn.addEventListener('click', () => {
      const wasOpen = btn.getAttribute('aria-expanded') === 'true';
      questions.forEach(other => {
        other.setAttribute('aria-expanded', 'false');
        other.parentElement.classList.remove('open');
        const panel = document.getElementById(other.getAttribute('aria-controls'));
        if (panel) panel.hidden = true;
      });
      if (!wasOpen) {
        btn.setAttribute('aria-expanded', 'true');
        btn.parentElement.classList.add('open');
        const panel = document.getElementById(btn.getAttribute('aria-controls'));
        if (panel) panel.hidden = false;
      }
    });
  });

  // ROI estimator: mirrors roi_core::CostEstimator
  const policyEl = document.getElementById('estimator-policy');
  const form = document.querySelector('.estimator-form');
  let policy = null;
  try { policy = policyEl ? JSON.parse(policyEl.textContent) : null; } catch (_) { policy = null; }
  if (!form || !policy) return;

  const MAX_COUNT = 1e9;
  const MAX_COST_PER_INCIDENT = 1e12;
  const strip = raw => raw.trim().replace(/^\$/, '').replace(/[,_ ]/g, '');
  const number = raw => {
    const text = strip(raw);
    if (text === '' || !/^[0-9.eE+-]+$/.test(text)) return 0;
    const value = Number(text);
    return Number.isFinite(value) && value >= 0 ? value : 0;
  };
  const count = id => Math.min(Math.trunc(number(document.getElementById(id).value)), MAX_COUNT);
  const amount = id => Math.min(number(document.getElementById(id).value), MAX_COST_PER_INCIDENT);
  const saturate = v => Number.isNaN(v) ? 0 : Math.max(-Number.MAX_VALUE, Math.min(Number.MAX_VALUE, v));
  const band = volume => {
    const tiers = policy.subscription_tiers || [];
    const hit = tiers.find(t => t.max_volume === null || t.max_volume === undefined || volume <= t.max_volume)
      || tiers[tiers.length - 1];
    return hit ? hit.monthly_price : 0;
  };

  const roundAway = v => Math.sign(v) * Math.round(Math.abs(v));
  const group = v => Math.abs(v).toLocaleString('en-US', { maximumFractionDigits: 0 });
  const currency = v => {
    if (!Number.isFinite(v)) return '$0';
    const r = roundAway(v);
    return (r < 0 ? '-$' : '$') + group(r);
  };
  const percent = v => {
    if (v === null || !Number.isFinite(v)) return 'n/a';
    const r = roundAway(v);
    return (r < 0 ? '-' : '') + group(r) + '%';
  };
  const months = v => (Number.isFinite(v) ? Math.max(v, 0) : 0).toFixed(1) + ' months';

  const show = (key, text) => {
    const el = document.querySelector(`[data-result="${key}"]`);
    if (el) el.textContent = text;
  };

  const recompute = () => {
    const rates = policy.baseline_rates || {};
    const tierLabel = document.getElementById('current-solution-tier').value;
    const rate = tierLabel in rates ? rates[tierLabel] : rates.basic;

    const baseline = saturate(rate * count('employee-count'));
    const subscription = saturate(band(count('monthly-processing-volume')));
    const incidents = saturate(count('annual-incident-count') * amount('cost-per-incident'));
    const current = saturate(baseline * 12 + incidents);
    const subscriptionAnnual = saturate(subscription * 12);
    const projected = saturate(subscriptionAnnual + incidents * policy.incident_cost_retained);
    const savings = saturate(current - projected);
    const roi = subscriptionAnnual === 0 ? null : savings / subscriptionAnnual * 100;
    const payback = subscriptionAnnual / (savings / 12);

    show('current-annual-cost', currency(current));
    show('projected-annual-cost', currency(projected));
    show('annual-savings', currency(savings));
    show('return-on-investment', percent(roi));
    show('payback-months', months(Number.isFinite(payback) && payback > 0 ? payback : 0));
    show('baseline-monthly-cost', currency(baseline));
    show('annual-incident-cost', currency(incidents));
    show('subscription-monthly-cost', currency(subscription));

    const savingsEl = document.querySelector('[data-result="annual-savings"]');
    if (savingsEl) {
      savingsEl.classList.toggle('positive', savings >= 0);
      savingsEl.classList.toggle('negative', savings < 0);
    }
  };

  form.addEventListener('input', recompute);
  form.addEventListener('change', recompute);
})();
"#;

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use roi_core::{EstimatorPolicy, InputField, SubscriptionTier};

    fn render(options: PageOptions) -> String {
        view! { <PricingDocument options=options /> }.to_html()
    }

    fn embedded_policy(html: &str) -> EstimatorPolicy {
        let open = format!("id=\"{}\">", POLICY_ELEMENT_ID);
        let start = html.find(&open).expect("policy block rendered") + open.len();
        let len = html[start..].find("</script>").expect("policy block closed");
        serde_json::from_str(html[start..start + len].trim()).expect("policy block is JSON")
    }

    #[test]
    fn embeds_the_page_policy() {
        let policy = EstimatorPolicy {
            subscription_tiers: vec![SubscriptionTier {
                max_volume: None,
                monthly_price: 10.0,
            }],
            incident_cost_retained: 0.25,
            ..Default::default()
        };
        let html = render(PageOptions {
            policy: policy.clone(),
            ..Default::default()
        });
        assert_eq!(embedded_policy(&html), policy);
    }

    #[test]
    fn script_is_not_escaped() {
        let html = render(PageOptions::default());
        assert!(html.contains("tabs.forEach(tab => {"));
        assert!(!html.contains("=&gt;"));
    }

    #[test]
    fn script_reads_every_estimator_field() {
        assert!(PAGE_SCRIPT.contains(POLICY_ELEMENT_ID));
        for field in InputField::ALL {
            if field == InputField::CurrentSolutionTier {
                assert!(PAGE_SCRIPT.contains(&format!("getElementById('{}')", field.id())));
            } else {
                assert!(PAGE_SCRIPT.contains(&format!("('{}')", field.id())), "{:?}", field);
            }
        }
    }

    #[test]
    fn script_refreshes_every_rendered_figure() {
        let html = render(PageOptions::default());
        let body = &html[..html.find("<script").expect("scripts rendered")];
        let mut rendered = 0;
        for chunk in body.split("data-result=\"").skip(1) {
            let key = &chunk[..chunk.find('"').expect("attribute closed")];
            assert!(
                PAGE_SCRIPT.contains(&format!("show('{}'", key)),
                "figure {key} is never refreshed"
            );
            rendered += 1;
        }
        assert_eq!(rendered, 8);
    }
}
