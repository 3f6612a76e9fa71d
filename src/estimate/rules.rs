use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::profile::Profile;
use super::tables::ReferenceTables;

/// One pricing adjustment, evaluated in `Rule::ORDER`.
///
/// Ordering follows declaration order; the estimator folds multipliers in
/// that order whatever order the rules were evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Entities,
    Investors,
    Structure,
    Strategy,
    FirstYear,
    Timeline,
    Framework,
    Registration,
    CrossBorder,
    Administrator,
}

/// When a rule produces a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narration {
    /// Only when its multiplier changes the fee.
    EffectOnly,
    /// On every evaluation; a neutral driver when the fee is unchanged.
    Always,
}

impl Rule {
    /// Evaluation order, which is also the order drivers are reported in.
    pub const ORDER: [Self; 10] = [
        Self::Entities,
        Self::Investors,
        Self::Structure,
        Self::Strategy,
        Self::FirstYear,
        Self::Timeline,
        Self::Framework,
        Self::Registration,
        Self::CrossBorder,
        Self::Administrator,
    ];

    pub const fn narration(self) -> Narration {
        match self {
            Self::Administrator => Narration::Always,
            _ => Narration::EffectOnly,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Entities => "Fund structure entities",
            Self::Investors => "Investor base",
            Self::Structure => "Structural complexity",
            Self::Strategy => "Strategy complexity",
            Self::FirstYear => "First-year audit",
            Self::Timeline => "Rush timeline",
            Self::Framework => "Reporting framework",
            Self::Registration => "SEC registration",
            Self::CrossBorder => "Cross-border structure",
            Self::Administrator => "Third-party administrator",
        }
    }

    /// Local multiplier for this rule. `1.0` when the rule does not apply.
    pub fn multiplier(
        self,
        profile: &Profile,
        tables: &ReferenceTables,
    ) -> Result<f64, ConfigurationError> {
        let adjustments = &tables.adjustments;
        let multiplier = match self {
            Self::Entities => tables.entities_multiplier(profile.entities)?,
            Self::Investors => tables.investors_multiplier(profile.investors)?,
            Self::Structure => tables.structure_multiplier(profile.structure)?,
            Self::Strategy => tables.strategy_multiplier(profile.strategy)?,
            Self::FirstYear => when(profile.first_year, adjustments.first_year),
            Self::Timeline => when(profile.rush, adjustments.rush),
            Self::Framework => tables.framework_multiplier(profile.framework)?,
            Self::Registration => when(profile.sec_registered, adjustments.sec_registered),
            Self::CrossBorder => when(profile.cross_border, adjustments.cross_border),
            Self::Administrator => when(profile.has_administrator, adjustments.administrator),
        };
        Ok(multiplier)
    }

    /// Driver sentence for this rule given the multiplier it produced.
    pub fn describe(self, profile: &Profile, multiplier: f64) -> String {
        let effect = effect_phrase(multiplier);
        match self {
            Self::Entities => format!(
                "{} in the structure {} for entity-level statements and consolidation work.",
                profile.entities.label(),
                effect
            ),
            Self::Investors => format!(
                "{} {} for capital activity and allocation testing.",
                profile.investors.label(),
                effect
            ),
            Self::Structure => format!(
                "{} fund structure {} for feeder, side-pocket and allocation work.",
                profile.structure.label(),
                effect
            ),
            Self::Strategy => format!(
                "{} investment strategy {} for valuation and derivatives testing.",
                profile.strategy.label(),
                effect
            ),
            Self::FirstYear => format!(
                "A first-year audit {} for opening balances and onboarding the fund.",
                effect
            ),
            Self::Timeline => format!(
                "A rush timeline {} for compressed fieldwork and extra staffing.",
                effect
            ),
            Self::Framework => format!(
                "Reporting under {} {} for framework-specific disclosures.",
                profile.framework.label(),
                effect
            ),
            Self::Registration => format!(
                "An SEC-registered adviser {} for custody rule and regulatory procedures.",
                effect
            ),
            Self::CrossBorder => format!(
                "A cross-border structure {} for multi-jurisdiction coordination.",
                effect
            ),
            Self::Administrator if !profile.has_administrator => {
                "No third-party administrator, so the audit team tests NAV and investor records directly and no discount applies.".to_string()
            }
            Self::Administrator if multiplier == 1.0 => {
                "A third-party administrator supports the fund; no discount is configured.".to_string()
            }
            Self::Administrator if multiplier > 1.0 => format!(
                "Working with a third-party administrator {} for confirming and reconciling its reporting.",
                effect
            ),
            Self::Administrator => format!(
                "Administrator-maintained NAV and investor records {} because the audit can rely on them.",
                effect
            ),
        }
    }
}

/// Size of a multiplier's effect in whole percent, for display only.
///
/// `1.35` gives 35 and `0.85` gives 15 (the discount).
pub fn percent_delta(multiplier: f64) -> u32 {
    ((multiplier - 1.0).abs() * 100.0).round() as u32
}

fn effect_phrase(multiplier: f64) -> String {
    let percent = percent_delta(multiplier);
    if multiplier >= 1.0 {
        format!("adds {}% to the fee", percent)
    } else {
        format!("takes {}% off the fee", percent)
    }
}

fn when(condition: bool, multiplier: f64) -> f64 {
    if condition {
        multiplier
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::profile::{Complexity, EntityCount, FundType};
    use std::collections::HashSet;

    #[test]
    fn test_order_lists_every_rule_once() {
        let unique: HashSet<Rule> = Rule::ORDER.iter().copied().collect();
        assert_eq!(unique.len(), Rule::ORDER.len());
    }

    #[test]
    fn test_only_administrator_is_always_narrated() {
        for rule in Rule::ORDER {
            let expected = if rule == Rule::Administrator {
                Narration::Always
            } else {
                Narration::EffectOnly
            };
            assert_eq!(rule.narration(), expected, "{:?}", rule);
        }
    }

    #[test]
    fn test_percent_delta() {
        assert_eq!(percent_delta(1.35), 35);
        assert_eq!(percent_delta(1.2), 20);
        assert_eq!(percent_delta(0.85), 15);
        assert_eq!(percent_delta(1.0), 0);
        assert_eq!(percent_delta(1.5), 50);
    }

    #[test]
    fn test_flag_rules_inactive_when_condition_false() {
        let profile = Profile {
            has_administrator: false,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let tables = ReferenceTables::default();
        for rule in Rule::ORDER {
            assert_eq!(rule.multiplier(&profile, &tables).unwrap(), 1.0, "{:?}", rule);
        }
    }

    #[test]
    fn test_flag_rules_use_adjustments() {
        let profile = Profile {
            first_year: true,
            rush: true,
            sec_registered: true,
            cross_border: true,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let tables = ReferenceTables::default();
        assert_eq!(Rule::FirstYear.multiplier(&profile, &tables).unwrap(), 1.35);
        assert_eq!(Rule::Timeline.multiplier(&profile, &tables).unwrap(), 1.20);
        assert_eq!(Rule::Registration.multiplier(&profile, &tables).unwrap(), 1.10);
        assert_eq!(Rule::CrossBorder.multiplier(&profile, &tables).unwrap(), 1.15);
        assert_eq!(Rule::Administrator.multiplier(&profile, &tables).unwrap(), 0.85);
    }

    #[test]
    fn test_table_rule_propagates_missing_entry() {
        let profile = Profile {
            entities: EntityCount::OverTen,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let mut tables = ReferenceTables::default();
        tables.entities.remove(&EntityCount::OverTen);
        assert!(Rule::Entities.multiplier(&profile, &tables).is_err());
    }

    #[test]
    fn test_describe_interpolates_value_and_percent() {
        let profile = Profile {
            structure: Complexity::Complex,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let text = Rule::Structure.describe(&profile, 1.35);
        assert!(text.starts_with("Complex fund structure"));
        assert!(text.contains("adds 35% to the fee"));
    }

    #[test]
    fn test_describe_discount_uses_complement() {
        let profile = Profile::baseline(FundType::HedgeFund);
        let text = Rule::Administrator.describe(&profile, 0.85);
        assert!(text.contains("takes 15% off the fee"));
    }

    #[test]
    fn test_describe_administrator_surcharge_wording() {
        let profile = Profile::baseline(FundType::HedgeFund);
        let text = Rule::Administrator.describe(&profile, 1.1);
        assert!(text.contains("adds 10% to the fee"));
        assert!(!text.contains("can rely on them"));
    }

    #[test]
    fn test_describe_administrator_without_support() {
        let profile = Profile {
            has_administrator: false,
            ..Profile::baseline(FundType::HedgeFund)
        };
        let text = Rule::Administrator.describe(&profile, 1.0);
        assert!(text.starts_with("No third-party administrator"));
        assert!(!text.contains('%'));
    }
}
