//! Display names for raw profile keys, as found in exported reports or form
//! submissions. Unknown keys are shown as-is.

use tracing::debug;

use super::profile::{AumBucket, FundType, ReportingFramework};

/// "hedge-fund" -> "Hedge fund"
pub fn fund_type_name(key: &str) -> String {
    display_name(key, FundType::ALL.iter().map(|v| (v.as_key(), v.label())))
}

/// "250m-1b" -> "$250M - $1B"
pub fn aum_name(key: &str) -> String {
    display_name(key, AumBucket::ALL.iter().map(|v| (v.as_key(), v.label())))
}

/// "ifrs" -> "IFRS"
pub fn framework_name(key: &str) -> String {
    display_name(
        key,
        ReportingFramework::ALL.iter().map(|v| (v.as_key(), v.label())),
    )
}

fn display_name<'a>(key: &str, mut known: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    match known.find(|(k, _)| *k == key) {
        Some((_, label)) => label.to_string(),
        None => {
            debug!(key, "no display name, using raw key");
            key.to_string()
        }
    }
}
