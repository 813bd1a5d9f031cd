use std::sync::Arc;

use serde::Serialize;

use super::bands::{clamp, experience_band, ExperienceBand};
use super::benchmarks::BenchmarkSet;
use super::bias::EthnicityBiasTable;
use super::domain::{
    EmploymentType, Industry, LeadershipLevel, PriceLabel, ScoreInput, ScoreResult,
};
use super::factors::{collect_factors, strengths_and_weaknesses};
use super::geography::{country_tier, market_access_level, MarketAccessLevel};
use super::role::{normalize_role, RoleCategory};

/// Blend weights for the general and platform p50 figures.
pub const GENERAL_WEIGHT: f64 = 0.6;
pub const PLATFORM_WEIGHT: f64 = 0.4;

/// Bounds applied to the summed adjustment fraction.
pub const MIN_ADJUSTMENT: f64 = -0.10;
pub const MAX_ADJUSTMENT: f64 = 0.25;

pub fn leadership_adjustment(level: LeadershipLevel) -> f64 {
    match level {
        LeadershipLevel::Org => 0.15,
        LeadershipLevel::Small => 0.08,
        LeadershipLevel::None => 0.0,
    }
}

pub fn language_adjustment(count: u32) -> f64 {
    match count {
        0 | 1 => 0.0,
        2 => 0.03,
        _ => 0.06,
    }
}

pub fn market_access_adjustment(access: MarketAccessLevel) -> f64 {
    match access {
        MarketAccessLevel::Strong => 0.08,
        MarketAccessLevel::Some => 0.04,
        MarketAccessLevel::None => 0.0,
    }
}

pub fn employment_adjustment(employment: EmploymentType) -> f64 {
    match employment {
        EmploymentType::Owner => 0.05,
        EmploymentType::SelfEmployed => 0.03,
        EmploymentType::Employee => 0.0,
    }
}

/// Gap as a fraction of the real value; zero when the real value is zero.
pub fn gap_percentage(gap_usd: f64, real_value_usd: i64) -> f64 {
    if real_value_usd == 0 {
        0.0
    } else {
        gap_usd / real_value_usd as f64
    }
}

/// Per-factor adjustment fractions applied on top of the blended benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustments {
    pub leadership: f64,
    pub languages: f64,
    pub market_access: f64,
    pub employment: f64,
}

impl Adjustments {
    pub fn for_input(input: &ScoreInput, market_access: MarketAccessLevel) -> Self {
        Self {
            leadership: leadership_adjustment(input.leadership),
            languages: language_adjustment(input.languages_count),
            market_access: market_access_adjustment(market_access),
            employment: employment_adjustment(input.employment),
        }
    }

    pub fn sum(&self) -> f64 {
        self.leadership + self.languages + self.market_access + self.employment
    }

    pub fn clamped(&self) -> f64 {
        clamp(self.sum(), MIN_ADJUSTMENT, MAX_ADJUSTMENT)
    }
}

/// Stateless scorer over immutable reference tables.
///
/// Cloning is cheap; the tables are shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    benchmarks: Arc<BenchmarkSet>,
    bias: Option<Arc<EthnicityBiasTable>>,
}

impl ScoringEngine {
    pub fn new(benchmarks: BenchmarkSet) -> Self {
        Self {
            benchmarks: Arc::new(benchmarks),
            bias: None,
        }
    }

    /// Enable the perceived-bias factor in strengths and weaknesses.
    pub fn with_bias_table(mut self, table: EthnicityBiasTable) -> Self {
        self.bias = Some(Arc::new(table));
        self
    }

    pub fn benchmarks(&self) -> &BenchmarkSet {
        &self.benchmarks
    }

    pub fn bias_enabled(&self) -> bool {
        self.bias.is_some()
    }

    /// Blended p50 before adjustments.
    pub fn base_value(
        &self,
        role_category: RoleCategory,
        industry: Industry,
        residence_tier: u8,
        exp_band: ExperienceBand,
    ) -> f64 {
        let tables = &self.benchmarks;
        let general = tables
            .general
            .lookup(role_category, industry, residence_tier, exp_band);
        let platform = tables
            .platform
            .lookup(role_category, industry, residence_tier, exp_band);

        GENERAL_WEIGHT * f64::from(general.row.annual_usd_p50)
            + PLATFORM_WEIGHT * f64::from(platform.row.annual_usd_p50)
    }

    pub fn score(&self, input: &ScoreInput) -> ScoreResult {
        let role_category = normalize_role(&input.role);
        let residence_tier = country_tier(&input.residence_country);
        let exp_band = experience_band(input.exp_years);
        let market_access = market_access_level(&input.work_country);

        let base_value =
            self.base_value(role_category, input.industry, residence_tier, exp_band);
        let adjustments = Adjustments::for_input(input, market_access);
        let real_value_usd = (base_value * (1.0 + adjustments.clamped())).round() as i64;

        // Gap and label come from the stated figure as given; only the reported amounts are rounded.
        let annual = input.compensation.annualized();
        let gap = annual - real_value_usd as f64;
        let gap_pct = gap_percentage(gap, real_value_usd);

        let bias = self.resolve_bias(input);
        let factors = collect_factors(input, market_access, bias);
        let (strengths, weaknesses) = strengths_and_weaknesses(&factors);

        ScoreResult {
            role_category,
            residence_tier,
            exp_band,
            annual_usd: annual.round() as i64,
            real_value_usd,
            gap_usd: gap.round() as i64,
            gap_pct,
            label: PriceLabel::from_gap(gap),
            strengths,
            weaknesses,
        }
    }

    fn resolve_bias(&self, input: &ScoreInput) -> Option<f64> {
        let table = self.bias.as_ref()?;
        let ethnicity = input.ethnicity.as_deref()?;
        table.bias_for(ethnicity)
    }
}
