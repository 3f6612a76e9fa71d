use std::collections::BTreeMap;
use std::fmt::Display;

use super::profile::{
    AumBucket, Complexity, EntityCount, FundType, InvestorCount, ReportingFramework,
};
use super::tables::ReferenceTables;

/// Validate a rate card at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_tables(tables: &ReferenceTables) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for fund_type in FundType::ALL {
        let Some(row) = tables.base_prices.get(&fund_type) else {
            errors.push(format!("rates.base_prices.{}: missing", fund_type));
            continue;
        };
        for aum in AumBucket::ALL {
            let path = format!("rates.base_prices.{}.{}", fund_type, aum);
            match row.get(&aum) {
                Some(price) => check_positive(&mut errors, &path, *price),
                None => errors.push(format!("{}: missing", path)),
            }
        }
    }

    check_table(&mut errors, "entities", &tables.entities, &EntityCount::ALL);
    check_table(&mut errors, "investors", &tables.investors, &InvestorCount::ALL);
    check_table(&mut errors, "structure", &tables.structure, &Complexity::ALL);
    check_table(&mut errors, "strategy", &tables.strategy, &Complexity::ALL);
    check_table(&mut errors, "framework", &tables.framework, &ReportingFramework::ALL);

    let adjustments = &tables.adjustments;
    for (name, value) in [
        ("first_year", adjustments.first_year),
        ("rush", adjustments.rush),
        ("sec_registered", adjustments.sec_registered),
        ("cross_border", adjustments.cross_border),
        ("administrator", adjustments.administrator),
    ] {
        check_positive(&mut errors, &format!("rates.adjustments.{}", name), value);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_table<K: Ord + Copy + Display>(
    errors: &mut Vec<String>,
    name: &str,
    table: &BTreeMap<K, f64>,
    keys: &[K],
) {
    for key in keys {
        let path = format!("rates.{}.{}", name, key);
        match table.get(key) {
            Some(multiplier) => check_positive(errors, &path, *multiplier),
            None => errors.push(format!("{}: missing", path)),
        }
    }
}

fn check_positive(errors: &mut Vec<String>, path: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{}: must be a positive number, got {}", path, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_valid() {
        assert!(validate_tables(&ReferenceTables::default()).is_ok());
    }

    #[test]
    fn test_missing_fund_type_row() {
        let mut tables = ReferenceTables::default();
        tables.base_prices.remove(&FundType::RealEstate);

        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors, vec!["rates.base_prices.real-estate: missing".to_string()]);
    }

    #[test]
    fn test_missing_base_price_cell() {
        let mut tables = ReferenceTables::default();
        tables
            .base_prices
            .get_mut(&FundType::HedgeFund)
            .unwrap()
            .remove(&AumBucket::Over5b);

        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("rates.base_prices.hedge-fund.over-5b"));
    }

    #[test]
    fn test_missing_multiplier() {
        let mut tables = ReferenceTables::default();
        tables.framework.remove(&ReportingFramework::Other);

        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors, vec!["rates.framework.other: missing".to_string()]);
    }

    #[test]
    fn test_non_positive_values() {
        let mut tables = ReferenceTables::default();
        tables.structure.insert(Complexity::Complex, 0.0);
        tables.adjustments.rush = -1.2;

        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("rates.structure.complex"));
        assert!(errors[1].contains("rates.adjustments.rush"));
    }

    #[test]
    fn test_non_finite_value() {
        let mut tables = ReferenceTables::default();
        tables
            .base_prices
            .get_mut(&FundType::CreditFund)
            .unwrap()
            .insert(AumBucket::Under50m, f64::NAN);

        let errors = validate_tables(&tables).unwrap_err();
        assert!(errors[0].contains("must be a positive number"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut tables = ReferenceTables::default();
        tables.entities.clear();
        tables.adjustments.administrator = 0.0;

        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors.len(), EntityCount::ALL.len() + 1);
    }
}
