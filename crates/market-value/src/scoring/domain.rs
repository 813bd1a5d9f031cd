use std::fmt;

use serde::{Deserialize, Serialize};

use super::bands::ExperienceBand;
use super::role::RoleCategory;

/// Industry segment used as part of the benchmark key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Tech,
    Creative,
    Industrial,
    Other,
}

impl Industry {
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Creative => "creative",
            Industry::Industrial => "industrial",
            Industry::Other => "other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipLevel {
    None,
    Small,
    Org,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Employee,
    Owner,
    SelfEmployed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Postgraduate,
    Bootcamp,
    SelfTaught,
}

/// Stated pay, either as a yearly figure or as an hourly rate and weekly load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Compensation {
    Annual { amount: f64 },
    Hourly { rate: f64, hours_per_week: f64 },
}

impl Compensation {
    pub const WEEKS_PER_YEAR: f64 = 52.0;

    /// Yearly figure in USD. Non-positive inputs annualize to zero.
    pub fn annualized(&self) -> f64 {
        match *self {
            Compensation::Annual { amount } if amount > 0.0 => amount,
            Compensation::Hourly {
                rate,
                hours_per_week,
            } if rate > 0.0 && hours_per_week > 0.0 => {
                rate * hours_per_week * Self::WEEKS_PER_YEAR
            }
            _ => 0.0,
        }
    }
}

/// Validated scoring request handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub role: String,
    pub industry: Industry,
    pub residence_country: String,
    pub work_country: String,
    pub exp_years: f64,
    pub leadership: LeadershipLevel,
    pub languages_count: u32,
    pub employment: EmploymentType,
    pub education: EducationLevel,
    pub ethnicity: Option<String>,
    pub compensation: Compensation,
}

/// Binary classification of stated pay against the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceLabel {
    Overpriced,
    Underpriced,
}

impl PriceLabel {
    /// Classify the unrounded gap; zero counts as underpriced.
    pub fn from_gap(gap_usd: f64) -> Self {
        if gap_usd > 0.0 {
            PriceLabel::Overpriced
        } else {
            PriceLabel::Underpriced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceLabel::Overpriced => "OVERPRICED",
            PriceLabel::Underpriced => "UNDERPRICED",
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scoring output returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub role_category: RoleCategory,
    pub residence_tier: u8,
    pub exp_band: ExperienceBand,
    pub annual_usd: i64,
    pub real_value_usd: i64,
    pub gap_usd: i64,
    pub gap_pct: f64,
    pub label: PriceLabel,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}
