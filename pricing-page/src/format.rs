//! Display formatting for estimator figures.
//!
//! Currency is shown in whole units; the cost model itself keeps full
//! precision.

/// Whole-unit currency with thousands separators, e.g. `$106,000` or `-$588`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let rounded = amount.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Whole percent with separators; `n/a` when the ratio is undefined.
pub fn format_percent(pct: Option<f64>) -> String {
    match pct {
        Some(value) if value.is_finite() => {
            let rounded = value.round();
            let digits = group_thousands(&format!("{:.0}", rounded.abs()));
            if rounded < 0.0 {
                format!("-{}%", digits)
            } else {
                format!("{}%", digits)
            }
        }
        _ => "n/a".to_string(),
    }
}

/// Payback period with one decimal.
pub fn format_months(months: f64) -> String {
    let months = if months.is_finite() { months.max(0.0) } else { 0.0 };
    format!("{:.1} months", months)
}

/// Insert separators into a plain digit string.
fn group_thousands(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, ch) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(49.0), "$49");
        assert_eq!(format_currency(106_000.0), "$106,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_currency(39.2), "$39");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn currency_negative_and_non_finite() {
        assert_eq!(format_currency(-588.0), "-$588");
        assert_eq!(format_currency(-12_345.0), "-$12,345");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }

    #[test]
    fn currency_beyond_u64_keeps_every_digit() {
        assert_eq!(format_currency(5.5e21), "$5,500,000,000,000,000,000,000");
        assert_eq!(format_currency(-1e20), "-$100,000,000,000,000,000,000");
        assert_eq!(format_percent(Some(2e19)), "20,000,000,000,000,000,000%");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(Some(11_124.49)), "11,124%");
        assert_eq!(format_percent(Some(-100.0)), "-100%");
        assert_eq!(format_percent(None), "n/a");
        assert_eq!(format_percent(Some(f64::NAN)), "n/a");
    }

    #[test]
    fn months_formatting() {
        assert_eq!(format_months(0.10787), "0.1 months");
        assert_eq!(format_months(12.0), "12.0 months");
        assert_eq!(format_months(-3.0), "0.0 months");
    }
}
