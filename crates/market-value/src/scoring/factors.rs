use serde::Serialize;

use super::bias::bias_bucket;
use super::domain::{EducationLevel, EmploymentType, LeadershipLevel, ScoreInput};
use super::geography::MarketAccessLevel;

/// Maximum number of labels reported on each side.
pub const MAX_LABELS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Leadership,
    Languages,
    MarketAccess,
    Education,
    Ownership,
    PerceivedBias,
}

impl FactorKind {
    pub fn strength_label(&self) -> &'static str {
        match self {
            FactorKind::Leadership => "Leadership exposure",
            FactorKind::Languages => "Multilingual edge",
            FactorKind::MarketAccess => "Tier-1 market access",
            FactorKind::Education => "Education signal",
            FactorKind::Ownership => "Ownership leverage",
            FactorKind::PerceivedBias => "Perceived market bias tailwind",
        }
    }

    pub fn weakness_label(&self) -> &'static str {
        match self {
            FactorKind::Leadership => "No leadership exposure",
            FactorKind::Languages => "Single-language footprint",
            FactorKind::MarketAccess => "Low Tier-1 market access",
            FactorKind::Education => "Low formal education signal",
            FactorKind::Ownership => "Employee-only leverage",
            FactorKind::PerceivedBias => "Perceived market bias headwind",
        }
    }
}

/// A profile signal on a 0-3 scale (the bias signal may dip to -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    pub kind: FactorKind,
    pub value: i8,
    pub threshold: i8,
}

impl Factor {
    fn new(kind: FactorKind, value: i8) -> Self {
        Self {
            kind,
            value,
            threshold: 1,
        }
    }

    pub fn is_strength(&self) -> bool {
        self.value >= self.threshold
    }
}

pub fn leadership_signal(level: LeadershipLevel) -> i8 {
    match level {
        LeadershipLevel::Org => 2,
        LeadershipLevel::Small => 1,
        LeadershipLevel::None => 0,
    }
}

pub fn language_signal(count: u32) -> i8 {
    match count {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    }
}

pub fn market_access_signal(access: MarketAccessLevel) -> i8 {
    match access {
        MarketAccessLevel::Strong => 2,
        MarketAccessLevel::Some => 1,
        MarketAccessLevel::None => 0,
    }
}

pub fn education_signal(level: EducationLevel) -> i8 {
    match level {
        EducationLevel::Postgraduate => 3,
        EducationLevel::Master => 2,
        EducationLevel::Bachelor => 1,
        EducationLevel::HighSchool | EducationLevel::Bootcamp | EducationLevel::SelfTaught => 0,
    }
}

pub fn ownership_signal(employment: EmploymentType) -> i8 {
    match employment {
        EmploymentType::Owner => 2,
        EmploymentType::SelfEmployed => 1,
        EmploymentType::Employee => 0,
    }
}

/// Build the factor list in its fixed order. The bias factor is appended only
/// when a bias value was resolved for the input.
pub fn collect_factors(
    input: &ScoreInput,
    market_access: MarketAccessLevel,
    bias: Option<f64>,
) -> Vec<Factor> {
    let mut factors = vec![
        Factor::new(FactorKind::Leadership, leadership_signal(input.leadership)),
        Factor::new(FactorKind::Languages, language_signal(input.languages_count)),
        Factor::new(FactorKind::MarketAccess, market_access_signal(market_access)),
        Factor::new(FactorKind::Education, education_signal(input.education)),
        Factor::new(FactorKind::Ownership, ownership_signal(input.employment)),
    ];

    if let Some(bias) = bias {
        factors.push(Factor::new(FactorKind::PerceivedBias, bias_bucket(bias)));
    }

    factors
}

/// Top strengths that clear their threshold, and the two weakest factors
/// regardless of threshold. Ties keep factor order.
pub fn strengths_and_weaknesses(factors: &[Factor]) -> (Vec<String>, Vec<String>) {
    let mut strong: Vec<&Factor> = factors.iter().filter(|factor| factor.is_strength()).collect();
    strong.sort_by(|a, b| b.value.cmp(&a.value));
    let strengths = strong
        .into_iter()
        .take(MAX_LABELS)
        .map(|factor| factor.kind.strength_label().to_string())
        .collect();

    let mut weakest: Vec<&Factor> = factors.iter().collect();
    weakest.sort_by(|a, b| a.value.cmp(&b.value));
    let weaknesses = weakest
        .into_iter()
        .take(MAX_LABELS)
        .map(|factor| factor.kind.weakness_label().to_string())
        .collect();

    (strengths, weaknesses)
}
