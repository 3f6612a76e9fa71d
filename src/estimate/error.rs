use thiserror::Error;

use super::profile::{AumBucket, FundType};

/// A profile value with no entry in its reference table.
///
/// This is a defect in the rate card (or in a caller that bypassed profile
/// validation), never something to recover from with a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no base price configured for {fund_type} at {aum}")]
    MissingBasePrice { fund_type: FundType, aum: AumBucket },

    #[error("no {table} multiplier configured for '{key}'")]
    MissingMultiplier { table: &'static str, key: String },
}
