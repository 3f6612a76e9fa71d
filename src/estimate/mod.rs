pub mod engine;
pub mod error;
pub mod labels;
pub mod profile;
pub mod rules;
pub mod tables;
pub mod validation;

pub use engine::{estimate, round_currency, Driver, Estimate, Estimator, Impact};
pub use error::ConfigurationError;
pub use profile::*;
pub use rules::{Narration, Rule};
pub use tables::{Adjustments, ReferenceTables};
pub use validation::validate_tables;
