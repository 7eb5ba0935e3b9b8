//! Static page content: plans, comparison matrix, testimonials and FAQ.
//!
//! Everything here is configuration data consumed by the components. Editing
//! copy or prices means editing these tables, not the views.

/// Account sign-up, the target of every self-serve call to action.
pub const SIGNUP_URL: &str = "/signup";
/// Where enterprise leads go.
pub const CONTACT_URL: &str = "mailto:sales@bastion.dev";

/// Discount applied to plan prices when billed annually.
pub const ANNUAL_DISCOUNT: f64 = 0.20;

/// Billing period selected in the pricing tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BillingPeriod {
    /// Pay month to month
    #[default]
    Monthly,
    /// Pay for a year up front at [`ANNUAL_DISCOUNT`]
    Annual,
}

impl BillingPeriod {
    /// Both periods in tab order.
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Annual];

    /// Value of the `data-period` attribute.
    pub fn as_label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Annual => "annual",
        }
    }

    /// Tab caption.
    pub fn tab_title(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Annual => "Annual (save 20%)",
        }
    }

    /// Caption shown under a numeric price.
    pub fn price_suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Annual => "/month, billed annually",
        }
    }
}

/// How a plan is priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanPrice {
    /// List price per month
    Monthly(f64),
    /// Negotiated with sales
    Custom,
}

impl PlanPrice {
    /// Effective monthly price for `period`; `None` for custom pricing.
    pub fn monthly_for(&self, period: BillingPeriod) -> Option<f64> {
        match (self, period) {
            (PlanPrice::Monthly(price), BillingPeriod::Monthly) => Some(*price),
            (PlanPrice::Monthly(price), BillingPeriod::Annual) => {
                Some(price * (1.0 - ANNUAL_DISCOUNT))
            }
            (PlanPrice::Custom, _) => None,
        }
    }
}

/// One bullet on a pricing card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanFeature {
    /// Bullet text
    pub text: &'static str,
    /// Whether the plan includes it
    pub included: bool,
}

/// A pricing card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    /// Plan name
    pub name: &'static str,
    /// One-line audience description
    pub tagline: &'static str,
    /// Price
    pub price: PlanPrice,
    /// Card bullets
    pub features: &'static [PlanFeature],
    /// Call-to-action label
    pub cta: &'static str,
    /// Call-to-action target
    pub cta_href: &'static str,
    /// Rendered as the featured card
    pub highlighted: bool,
}

const fn yes(text: &'static str) -> PlanFeature {
    PlanFeature { text, included: true }
}

const fn no(text: &'static str) -> PlanFeature {
    PlanFeature { text, included: false }
}

/// The three public plans.
pub const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        tagline: "For individuals evaluating Bastion",
        price: PlanPrice::Monthly(0.0),
        features: &[
            yes("Up to 5 protected seats"),
            yes("1,000 events per month"),
            yes("Community support"),
            no("Automated incident response"),
            no("SSO & audit log"),
            no("Dedicated success manager"),
        ],
        cta: "Start for free",
        cta_href: SIGNUP_URL,
        highlighted: false,
    },
    Plan {
        name: "Professional",
        tagline: "For security teams that need automation",
        price: PlanPrice::Monthly(49.0),
        features: &[
            yes("Unlimited protected seats"),
            yes("10,000 events per month"),
            yes("Priority email support"),
            yes("Automated incident response"),
            yes("SSO & audit log"),
            no("Dedicated success manager"),
        ],
        cta: "Start 14-day trial",
        cta_href: SIGNUP_URL,
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        tagline: "For organizations with compliance needs",
        price: PlanPrice::Custom,
        features: &[
            yes("Unlimited protected seats"),
            yes("Unlimited events"),
            yes("24/7 phone support"),
            yes("Automated incident response"),
            yes("SSO & audit log"),
            yes("Dedicated success manager"),
        ],
        cta: "Contact sales",
        cta_href: CONTACT_URL,
        highlighted: false,
    },
];

/// A cell of the comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Feature available
    Included,
    /// Feature not available
    Excluded,
    /// Free-form limit, e.g. "30 days"
    Text(&'static str),
}

/// One row of the comparison matrix, one cell per plan in [`PLANS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Feature name
    pub feature: &'static str,
    /// Free, Professional, Enterprise
    pub cells: [Cell; 3],
}

/// A titled group of comparison rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonGroup {
    /// Group heading
    pub category: &'static str,
    /// Rows in display order
    pub rows: &'static [ComparisonRow],
}

use Cell::{Excluded as N, Included as Y, Text as T};

/// Full feature matrix.
pub const COMPARISON: &[ComparisonGroup] = &[
    ComparisonGroup {
        category: "Detection",
        rows: &[
            ComparisonRow { feature: "Threat detection", cells: [Y, Y, Y] },
            ComparisonRow { feature: "Behavioral analytics", cells: [N, Y, Y] },
            ComparisonRow { feature: "Custom detection rules", cells: [N, T("25 rules"), T("Unlimited")] },
            ComparisonRow { feature: "Event retention", cells: [T("7 days"), T("90 days"), T("1 year")] },
        ],
    },
    ComparisonGroup {
        category: "Response",
        rows: &[
            ComparisonRow { feature: "Alert notifications", cells: [Y, Y, Y] },
            ComparisonRow { feature: "Automated playbooks", cells: [N, Y, Y] },
            ComparisonRow { feature: "Forensic timeline", cells: [N, Y, Y] },
        ],
    },
    ComparisonGroup {
        category: "Administration",
        rows: &[
            ComparisonRow { feature: "SSO / SAML", cells: [N, Y, Y] },
            ComparisonRow { feature: "Audit log", cells: [N, Y, Y] },
            ComparisonRow { feature: "On-premise deployment", cells: [N, N, Y] },
            ComparisonRow { feature: "Uptime SLA", cells: [N, T("99.9%"), T("99.99%")] },
        ],
    },
];

/// A customer quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// The quote itself
    pub quote: &'static str,
    /// Who said it
    pub author: &'static str,
    /// Their job title
    pub role: &'static str,
    /// Their employer
    pub company: &'static str,
}

/// Testimonials in display order.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We cut our mean time to respond from days to minutes. Bastion paid for itself after the first incident it caught.",
        author: "Maria Chen",
        role: "CISO",
        company: "Northwind Logistics",
    },
    Testimonial {
        quote: "Replacing our in-house tooling freed two engineers to work on the product again.",
        author: "David Okafor",
        role: "Head of Platform",
        company: "Lumen Health",
    },
    Testimonial {
        quote: "The audit log and SSO got us through SOC 2 without a single finding on access control.",
        author: "Sofia Lindqvist",
        role: "Compliance Lead",
        company: "Fjord Payments",
    },
];

/// A question/answer pair in the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    /// Question, always visible
    pub question: &'static str,
    /// Answer, visible when expanded
    pub answer: &'static str,
}

/// FAQ entries in display order.
pub const FAQS: &[Faq] = &[
    Faq {
        question: "How is the ROI estimate calculated?",
        answer: "We compare what you spend today (per-employee tooling cost plus the cost of incidents) with the Bastion subscription for your volume plus the incident cost that remains. We assume Bastion prevents 60% of incident cost.",
    },
    Faq {
        question: "Can I change plans later?",
        answer: "Yes. Upgrades take effect immediately and are prorated. Downgrades apply from the next billing cycle.",
    },
    Faq {
        question: "What counts as an event?",
        answer: "Any log line, alert or telemetry record ingested by Bastion. Events above your plan's monthly volume are never dropped; we will contact you about upgrading.",
    },
    Faq {
        question: "Is there a free trial of Professional?",
        answer: "Every Professional subscription starts with a 14-day trial. No credit card is required.",
    },
    Faq {
        question: "Where is my data stored?",
        answer: "In the region you choose at signup (EU or US). Enterprise customers can deploy on-premise.",
    },
];
