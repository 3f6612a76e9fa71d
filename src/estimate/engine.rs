use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::ConfigurationError;
use super::profile::Profile;
use super::rules::{Narration, Rule};
use super::tables::ReferenceTables;

/// Low end of the range as a share of the medium estimate.
pub const LOW_RATIO: f64 = 0.80;
/// High end of the range as a share of the medium estimate.
pub const HIGH_RATIO: f64 = 1.25;

/// How a driver moved the fee, framed from the client's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Raises the fee
    Negative,
    /// Lowers the fee
    Positive,
    /// No price effect
    Neutral,
}

impl Impact {
    fn of(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            Self::Negative
        } else if multiplier < 1.0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Driver {
    pub rule: Rule,
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Estimate {
    /// Fee for the fund type and AUM before any adjustment
    pub base_price: f64,
    /// Product of every applied rule multiplier
    pub total_multiplier: f64,
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    /// In rule evaluation order
    pub drivers: Vec<Driver>,
}

/// Fee estimator over an immutable rate card.
///
/// Holds no mutable state, so one instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Estimator {
    tables: ReferenceTables,
    rules: Vec<Rule>,
}

impl Estimator {
    pub fn new(tables: ReferenceTables) -> Self {
        Self::with_rules(tables, Rule::ORDER.to_vec())
    }

    /// Estimator evaluating `rules` in the given order instead of `Rule::ORDER`.
    pub fn with_rules(tables: ReferenceTables, rules: Vec<Rule>) -> Self {
        Self { tables, rules }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn estimate(&self, profile: &Profile) -> Result<Estimate, ConfigurationError> {
        let base_price = self.tables.base_price(profile.fund_type, profile.aum)?;
        let mut applied = Vec::new();
        let mut drivers = Vec::new();

        for &rule in &self.rules {
            let multiplier = rule.multiplier(profile, &self.tables)?;
            let applies = multiplier != 1.0;

            if applies {
                trace!(?rule, multiplier, "rule applied");
                applied.push((rule, multiplier));
            }

            if applies || rule.narration() == Narration::Always {
                drivers.push(Driver {
                    rule,
                    title: rule.title().to_string(),
                    description: rule.describe(profile, multiplier),
                    impact: Impact::of(multiplier),
                });
            }
        }

        // Float products depend on operand order; fold in declaration order
        // so the total is bit-identical for any evaluation order.
        applied.sort_by_key(|(rule, _)| *rule);
        let total_multiplier = applied
            .iter()
            .fold(1.0, |total, (_, multiplier)| total * multiplier);

        let medium = round_currency(base_price * total_multiplier);
        let low = round_currency(medium as f64 * LOW_RATIO);
        let high = round_currency(medium as f64 * HIGH_RATIO);

        debug!(
            fund_type = %profile.fund_type,
            aum = %profile.aum,
            base_price,
            total_multiplier,
            medium,
            drivers = drivers.len(),
            "estimate computed"
        );

        Ok(Estimate {
            base_price,
            total_multiplier,
            low,
            medium,
            high,
            drivers,
        })
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(ReferenceTables::default())
    }
}

/// One-off estimate against `tables`.
pub fn estimate(profile: &Profile, tables: &ReferenceTables) -> Result<Estimate, ConfigurationError> {
    Estimator::new(tables.clone()).estimate(profile)
}

/// Round to whole currency units, halves away from zero (19687.5 -> 19688).
pub fn round_currency(amount: f64) -> u64 {
    amount.round() as u64
}
