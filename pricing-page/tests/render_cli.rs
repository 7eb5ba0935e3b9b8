//! End-to-end tests for the pricing-render binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn pricing_render() -> Command {
    cargo_bin_cmd!("pricing-render")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        pricing_render()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--estimate-json"))
            .stdout(predicate::str::contains("--policy"));
    }

    #[test]
    fn shows_version() {
        pricing_render()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_tier() {
        pricing_render()
            .args(["--tier", "platinum", "--estimate-json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown solution tier"));
    }
}

mod estimate_json {
    use super::*;

    #[test]
    fn prints_default_scenario() {
        let output = pricing_render()
            .arg("--estimate-json")
            .output()
            .expect("run pricing-render");
        assert!(output.status.success());

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout is JSON");
        assert_eq!(json["current_annual_cost"], 106_000.0);
        assert_eq!(json["projected_annual_cost"], 40_588.0);
        assert_eq!(json["annual_savings"], 65_412.0);
        assert_eq!(json["subscription_monthly_cost"], 49.0);
    }

    #[test]
    fn respects_input_flags() {
        let output = pricing_render()
            .args(["--estimate-json", "--tier", "none", "--incidents", "0"])
            .output()
            .expect("run pricing-render");
        assert!(output.status.success());

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout is JSON");
        assert_eq!(json["current_annual_cost"], 0.0);
        assert_eq!(json["payback_months"], 0.0);
    }

    #[test]
    fn applies_policy_file() {
        let temp = TempDir::new().expect("temp dir");
        let policy = temp.path().join("policy.toml");
        std::fs::write(&policy, "[[subscription_tiers]]\nmonthly_price = 0.0\n")
            .expect("write policy");

        let output = pricing_render()
            .arg("--estimate-json")
            .arg("--policy")
            .arg(&policy)
            .output()
            .expect("run pricing-render");
        assert!(output.status.success());

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout is JSON");
        assert!(json["return_on_investment_pct"].is_null());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn writes_html_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist").join("pricing.html");

        pricing_render()
            .arg("--out")
            .arg(&out)
            .args(["--product-name", "Acme Shield"])
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("output written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Acme Shield | Pricing"));
        assert!(html.contains("$106,000"));
    }

    #[test]
    fn writes_to_stdout_with_dash() {
        pricing_render()
            .args(["--out", "-", "--employees", "250", "--tier", "inhouse"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("$175,000"));
    }

    #[test]
    fn malformed_policy_fails_with_context() {
        let temp = TempDir::new().expect("temp dir");
        let policy = temp.path().join("policy.toml");
        std::fs::write(&policy, "incident_cost_retained = 3.0\n").expect("write policy");

        pricing_render()
            .arg("--policy")
            .arg(&policy)
            .arg("--out")
            .arg(temp.path().join("pricing.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot use policy file"))
            .stderr(predicate::str::contains("incident_cost_retained"));

        assert!(!temp.path().join("pricing.html").exists());
    }

    #[test]
    fn missing_policy_file_fails() {
        pricing_render()
            .args(["--policy", "/definitely/not/here.toml", "--estimate-json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read policy file"));
    }
}
