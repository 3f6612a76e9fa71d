use serde::{Deserialize, Serialize};
use std::fmt;

/// Fund profile the fee is estimated for.
///
/// Every field is required. Enum values are written in kebab-case:
/// ```yaml
/// fund_type: hedge-fund
/// aum: 250m-1b
/// entities: two-to-five
/// investors: 50-to-200
/// structure: moderate
/// strategy: simple
/// framework: us-gaap
/// first_year: false
/// rush: false
/// sec_registered: true
/// cross_border: false
/// has_administrator: true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub fund_type: FundType,
    /// Assets under management
    pub aum: AumBucket,
    /// Legal entities in the fund structure (feeders, blockers, SPVs)
    pub entities: EntityCount,
    pub investors: InvestorCount,
    pub structure: Complexity,
    pub strategy: Complexity,
    pub framework: ReportingFramework,
    /// First audit of this fund by the firm
    pub first_year: bool,
    /// Reporting deadline shorter than the usual fieldwork window
    pub rush: bool,
    /// Adviser is registered with the SEC
    pub sec_registered: bool,
    /// Offshore or multi-jurisdiction structure
    pub cross_border: bool,
    /// NAV and investor records kept by a third-party administrator
    pub has_administrator: bool,
}

impl Profile {
    /// Smallest, simplest repeat engagement with administrator support.
    pub fn baseline(fund_type: FundType) -> Self {
        Self {
            fund_type,
            aum: AumBucket::Under50m,
            entities: EntityCount::One,
            investors: InvestorCount::Under50,
            structure: Complexity::Simple,
            strategy: Complexity::Simple,
            framework: ReportingFramework::UsGaap,
            first_year: false,
            rush: false,
            sec_registered: false,
            cross_border: false,
            has_administrator: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundType {
    HedgeFund,
    PrivateEquity,
    VentureCapital,
    RealEstate,
    FundOfFunds,
    CreditFund,
}

impl FundType {
    pub const ALL: [Self; 6] = [
        Self::HedgeFund,
        Self::PrivateEquity,
        Self::VentureCapital,
        Self::RealEstate,
        Self::FundOfFunds,
        Self::CreditFund,
    ];

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::HedgeFund => "hedge-fund",
            Self::PrivateEquity => "private-equity",
            Self::VentureCapital => "venture-capital",
            Self::RealEstate => "real-estate",
            Self::FundOfFunds => "fund-of-funds",
            Self::CreditFund => "credit-fund",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HedgeFund => "Hedge fund",
            Self::PrivateEquity => "Private equity fund",
            Self::VentureCapital => "Venture capital fund",
            Self::RealEstate => "Real estate fund",
            Self::FundOfFunds => "Fund of funds",
            Self::CreditFund => "Private credit fund",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum AumBucket {
    #[serde(rename = "under-50m")]
    Under50m,
    #[serde(rename = "50m-250m")]
    From50mTo250m,
    #[serde(rename = "250m-1b")]
    From250mTo1b,
    #[serde(rename = "1b-5b")]
    From1bTo5b,
    #[serde(rename = "over-5b")]
    Over5b,
}

impl AumBucket {
    pub const ALL: [Self; 5] = [
        Self::Under50m,
        Self::From50mTo250m,
        Self::From250mTo1b,
        Self::From1bTo5b,
        Self::Over5b,
    ];

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Under50m => "under-50m",
            Self::From50mTo250m => "50m-250m",
            Self::From250mTo1b => "250m-1b",
            Self::From1bTo5b => "1b-5b",
            Self::Over5b => "over-5b",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under50m => "Under $50M",
            Self::From50mTo250m => "$50M - $250M",
            Self::From250mTo1b => "$250M - $1B",
            Self::From1bTo5b => "$1B - $5B",
            Self::Over5b => "Over $5B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityCount {
    One,
    TwoToFive,
    SixToTen,
    OverTen,
}

impl EntityCount {
    pub const ALL: [Self; 4] = [Self::One, Self::TwoToFive, Self::SixToTen, Self::OverTen];

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::TwoToFive => "two-to-five",
            Self::SixToTen => "six-to-ten",
            Self::OverTen => "over-ten",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "A single entity",
            Self::TwoToFive => "2-5 entities",
            Self::SixToTen => "6-10 entities",
            Self::OverTen => "More than 10 entities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum InvestorCount {
    #[serde(rename = "under-50")]
    Under50,
    #[serde(rename = "50-to-200")]
    From50To200,
    #[serde(rename = "200-to-500")]
    From200To500,
    #[serde(rename = "over-500")]
    Over500,
}

impl InvestorCount {
    pub const ALL: [Self; 4] = [
        Self::Under50,
        Self::From50To200,
        Self::From200To500,
        Self::Over500,
    ];

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Under50 => "under-50",
            Self::From50To200 => "50-to-200",
            Self::From200To500 => "200-to-500",
            Self::Over500 => "over-500",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under50 => "Fewer than 50 investors",
            Self::From50To200 => "50-200 investors",
            Self::From200To500 => "200-500 investors",
            Self::Over500 => "More than 500 investors",
        }
    }
}

/// Shared scale for structure and strategy complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Moderate, Self::Complex];

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Moderate => "Moderate",
            Self::Complex => "Complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportingFramework {
    UsGaap,
    Ifrs,
    Other,
}

impl ReportingFramework {
    pub const ALL: [Self; 3] = [Self::UsGaap, Self::Ifrs, Self::Other];

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::UsGaap => "us-gaap",
            Self::Ifrs => "ifrs",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UsGaap => "US GAAP",
            Self::Ifrs => "IFRS",
            Self::Other => "Other framework",
        }
    }
}

macro_rules! display_as_key {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_key())
                }
            }
        )*
    };
}

display_as_key!(
    FundType,
    AumBucket,
    EntityCount,
    InvestorCount,
    Complexity,
    ReportingFramework
);
