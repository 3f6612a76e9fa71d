use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

use super::error::ConfigurationError;
use super::profile::{
    AumBucket, Complexity, EntityCount, FundType, InvestorCount, ReportingFramework,
};

pub const ENTITIES_TABLE: &str = "entity count";
pub const INVESTORS_TABLE: &str = "investor count";
pub const STRUCTURE_TABLE: &str = "structure complexity";
pub const STRATEGY_TABLE: &str = "strategy complexity";
pub const FRAMEWORK_TABLE: &str = "reporting framework";

/// Rate card used by the estimator.
///
/// A multiplier of `1.0` means the value has no effect on the fee. The
/// built-in card (`ReferenceTables::default()`) covers every profile value;
/// a card loaded from config may not, which is what `validate_tables` and the
/// fallible lookups below are for.
///
/// Example YAML:
/// ```yaml
/// base_prices:
///   hedge-fund: { under-50m: 25000, 50m-250m: 40000 }
/// entities: { one: 1.0, two-to-five: 1.15 }
/// adjustments:
///   first_year: 1.35
///   rush: 1.2
///   sec_registered: 1.1
///   cross_border: 1.15
///   administrator: 0.85
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReferenceTables {
    /// Annual fee before adjustments, by fund type then AUM bucket
    pub base_prices: BTreeMap<FundType, BTreeMap<AumBucket, f64>>,

    #[serde(default)]
    pub entities: BTreeMap<EntityCount, f64>,

    #[serde(default)]
    pub investors: BTreeMap<InvestorCount, f64>,

    #[serde(default)]
    pub structure: BTreeMap<Complexity, f64>,

    #[serde(default)]
    pub strategy: BTreeMap<Complexity, f64>,

    #[serde(default)]
    pub framework: BTreeMap<ReportingFramework, f64>,

    pub adjustments: Adjustments,
}

/// Multipliers for the yes/no conditions. Each applies only when its
/// condition holds.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Adjustments {
    pub first_year: f64,
    pub rush: f64,
    pub sec_registered: f64,
    pub cross_border: f64,
    /// Discount for funds with a third-party administrator
    pub administrator: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            first_year: 1.35,
            rush: 1.20,
            sec_registered: 1.10,
            cross_border: 1.15,
            administrator: 0.85,
        }
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        let rows: [(FundType, [f64; 5]); 6] = [
            (FundType::HedgeFund, [25_000.0, 40_000.0, 65_000.0, 110_000.0, 180_000.0]),
            (FundType::PrivateEquity, [30_000.0, 45_000.0, 70_000.0, 120_000.0, 200_000.0]),
            (FundType::VentureCapital, [20_000.0, 32_000.0, 50_000.0, 85_000.0, 140_000.0]),
            (FundType::RealEstate, [35_000.0, 50_000.0, 80_000.0, 130_000.0, 210_000.0]),
            (FundType::FundOfFunds, [18_000.0, 28_000.0, 45_000.0, 75_000.0, 120_000.0]),
            (FundType::CreditFund, [28_000.0, 42_000.0, 68_000.0, 115_000.0, 190_000.0]),
        ];
        let base_prices: BTreeMap<FundType, BTreeMap<AumBucket, f64>> = rows
            .into_iter()
            .map(|(fund_type, prices)| {
                let row = AumBucket::ALL.into_iter().zip(prices).collect::<BTreeMap<_, _>>();
                (fund_type, row)
            })
            .collect();

        Self {
            base_prices,
            entities: EntityCount::ALL.into_iter().zip([1.00, 1.15, 1.30, 1.50]).collect(),
            investors: InvestorCount::ALL.into_iter().zip([1.00, 1.05, 1.10, 1.20]).collect(),
            structure: Complexity::ALL.into_iter().zip([1.00, 1.15, 1.35]).collect(),
            strategy: Complexity::ALL.into_iter().zip([1.00, 1.10, 1.25]).collect(),
            framework: ReportingFramework::ALL.into_iter().zip([1.00, 1.05, 1.10]).collect(),
            adjustments: Adjustments::default(),
        }
    }
}

impl ReferenceTables {
    pub fn base_price(&self, fund_type: FundType, aum: AumBucket) -> Result<f64, ConfigurationError> {
        self.base_prices
            .get(&fund_type)
            .and_then(|row| row.get(&aum))
            .copied()
            .ok_or(ConfigurationError::MissingBasePrice { fund_type, aum })
    }

    pub fn entities_multiplier(&self, key: EntityCount) -> Result<f64, ConfigurationError> {
        lookup(&self.entities, ENTITIES_TABLE, key)
    }

    pub fn investors_multiplier(&self, key: InvestorCount) -> Result<f64, ConfigurationError> {
        lookup(&self.investors, INVESTORS_TABLE, key)
    }

    pub fn structure_multiplier(&self, key: Complexity) -> Result<f64, ConfigurationError> {
        lookup(&self.structure, STRUCTURE_TABLE, key)
    }

    pub fn strategy_multiplier(&self, key: Complexity) -> Result<f64, ConfigurationError> {
        lookup(&self.strategy, STRATEGY_TABLE, key)
    }

    pub fn framework_multiplier(&self, key: ReportingFramework) -> Result<f64, ConfigurationError> {
        lookup(&self.framework, FRAMEWORK_TABLE, key)
    }
}

fn lookup<K: Ord + Display>(
    table: &BTreeMap<K, f64>,
    name: &'static str,
    key: K,
) -> Result<f64, ConfigurationError> {
    table
        .get(&key)
        .copied()
        .ok_or_else(|| ConfigurationError::MissingMultiplier {
            table: name,
            key: key.to_string(),
        })
}
