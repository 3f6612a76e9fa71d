use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::estimate::{Driver, Estimate, Impact, Profile};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a whole-dollar amount with thousands separators ("$194,012")
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Format an estimate as a multi-line text report
///
/// Headline range first, then the drivers in the order the estimator
/// produced them. Nothing here recomputes pricing.
pub fn format_estimate(profile: &Profile, estimate: &Estimate, use_colors: bool) -> String {
    let subject = format!("{}, {}", profile.fund_type.label(), profile.aum.label());
    let range = format!(
        "{} - {}",
        format_amount(estimate.low),
        format_amount(estimate.high)
    );
    let medium = format_amount(estimate.medium);
    let base = format!(
        "Base fee {} x {:.4}",
        format_amount(estimate.base_price.round() as u64),
        estimate.total_multiplier
    );

    let mut lines = Vec::new();
    if use_colors {
        lines.push(subject.bold().to_string());
        lines.push(format!(
            "Estimated annual audit fee: {} (most likely {})",
            range.bold(),
            medium.bold().cyan()
        ));
        lines.push(base.dimmed().to_string());
    } else {
        lines.push(subject);
        lines.push(format!(
            "Estimated annual audit fee: {} (most likely {})",
            range, medium
        ));
        lines.push(base);
    }

    if !estimate.drivers.is_empty() {
        lines.push(String::new());
        lines.push("Drivers:".to_string());
        lines.extend(
            estimate
                .drivers
                .iter()
                .map(|driver| format_driver(driver, use_colors)),
        );
    }

    lines.join("\n")
}

fn format_driver(driver: &Driver, use_colors: bool) -> String {
    let marker = match driver.impact {
        Impact::Negative => "▲",
        Impact::Positive => "▼",
        Impact::Neutral => "•",
    };

    if use_colors {
        let marker = match driver.impact {
            Impact::Negative => marker.red().to_string(),
            Impact::Positive => marker.green().to_string(),
            Impact::Neutral => marker.dimmed().to_string(),
        };
        format!(
            "  {} {}: {}",
            marker,
            driver.title.bold(),
            driver.description
        )
    } else {
        format!("  {} {}: {}", marker, driver.title, driver.description)
    }
}

/// Profile and estimate together, as written by `--json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub profile: &'a Profile,
    pub estimate: &'a Estimate,
}

/// Format profile and estimate as pretty-printed JSON, drivers in order
pub fn format_report_json(profile: &Profile, estimate: &Estimate) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { profile, estimate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{Estimator, FundType};

    fn sample() -> (Profile, Estimate) {
        let profile = Profile {
            rush: true,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let estimate = Estimator::default().estimate(&profile).unwrap();
        (profile, estimate)
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(999), "$999");
        assert_eq!(format_amount(1_000), "$1,000");
        assert_eq!(format_amount(21_250), "$21,250");
        assert_eq!(format_amount(194_012), "$194,012");
        assert_eq!(format_amount(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_format_estimate_plain() {
        let (profile, estimate) = sample();
        let output = format_estimate(&profile, &estimate, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Hedge fund, Under $50M");
        assert_eq!(
            lines[1],
            "Estimated annual audit fee: $20,400 - $31,875 (most likely $25,500)"
        );
        assert_eq!(lines[2], "Base fee $25,000 x 1.0200");
        assert_eq!(lines[4], "Drivers:");
        assert!(lines[5].starts_with("  ▲ Rush timeline: "));
        assert!(lines[6].starts_with("  ▼ Third-party administrator: "));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_format_estimate_neutral_marker() {
        let profile = Profile {
            has_administrator: false,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let estimate = Estimator::default().estimate(&profile).unwrap();
        let output = format_estimate(&profile, &estimate, false);

        assert!(output.contains("  • Third-party administrator: No third-party administrator"));
    }

    #[test]
    fn test_format_report_json_keeps_driver_order() {
        let (profile, estimate) = sample();
        let json = format_report_json(&profile, &estimate).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["profile"]["fund_type"], "hedge-fund");
        assert_eq!(value["estimate"]["medium"], 25_500);
        let drivers = value["estimate"]["drivers"].as_array().unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0]["rule"], "timeline");
        assert_eq!(drivers[0]["impact"], "negative");
        assert_eq!(drivers[1]["rule"], "administrator");
        assert_eq!(drivers[1]["impact"], "positive");
    }
}
