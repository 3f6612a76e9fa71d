use serde::{Deserialize, Serialize};

use crate::estimate::ReferenceTables;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// tracing filter directive, e.g. "info" or "audit_fee=debug"
    #[serde(default)]
    pub log_level: Option<String>,

    /// Replaces the built-in rate card when present
    #[serde(default)]
    pub rates: Option<ReferenceTables>,
}

impl Config {
    /// Rate card in effect: the configured one, or the built-in card.
    pub fn effective_rates(&self) -> ReferenceTables {
        self.rates.clone().unwrap_or_default()
    }
}
