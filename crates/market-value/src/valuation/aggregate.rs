use serde::{Deserialize, Serialize};
use tracing::info;

use super::intake::ScoreRequest;
use crate::scoring::{
    age_band, language_band, market_access_level, AgeBand, EducationLevel, EmploymentType,
    ExperienceBand, Industry, LanguageBand, LeadershipLevel, MarketAccessLevel, PriceLabel,
    RoleCategory, ScoreInput, ScoreResult,
};

/// Form value meaning the respondent declined to state an ethnicity.
pub const UNDISCLOSED_ETHNICITY: &str = "Prefer not to say";

/// Anonymized, banded record published when the caller consents to aggregation.
///
/// Carries no free text: no role title, company, countries, or exact age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub role_category: RoleCategory,
    pub industry: Industry,
    pub residence_tier: u8,
    pub exp_band: ExperienceBand,
    pub age_band: AgeBand,
    pub education_level: EducationLevel,
    pub languages_band: LanguageBand,
    pub leadership_level: LeadershipLevel,
    pub market_access: MarketAccessLevel,
    pub employment_type: EmploymentType,
    pub ethnicity: Option<String>,
    pub real_value_usd: i64,
    pub gap_usd: i64,
    pub label: PriceLabel,
}

impl AggregateRecord {
    /// `None` unless `consent_aggregate` was given.
    pub fn from_scoring(
        request: &ScoreRequest,
        input: &ScoreInput,
        result: &ScoreResult,
    ) -> Option<Self> {
        if !request.consent_aggregate {
            return None;
        }

        let ethnicity = input
            .ethnicity
            .as_deref()
            .filter(|value| !value.eq_ignore_ascii_case(UNDISCLOSED_ETHNICITY))
            .map(str::to_string);

        Some(Self {
            role_category: result.role_category,
            industry: input.industry,
            residence_tier: result.residence_tier,
            exp_band: result.exp_band,
            age_band: age_band(request.age),
            education_level: input.education,
            languages_band: language_band(input.languages_count),
            leadership_level: input.leadership,
            market_access: market_access_level(&input.work_country),
            employment_type: input.employment,
            ethnicity,
            real_value_usd: result.real_value_usd,
            gap_usd: result.gap_usd,
            label: result.label,
        })
    }
}

/// Destination for aggregate records.
pub trait AggregateSink: Send + Sync {
    fn publish(&self, record: AggregateRecord) -> Result<(), AggregateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("aggregate sink unavailable: {0}")]
    Unavailable(String),
}

/// Emits each record as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAggregateSink;

impl AggregateSink for TracingAggregateSink {
    fn publish(&self, record: AggregateRecord) -> Result<(), AggregateError> {
        info!(
            role_category = %record.role_category,
            industry = %record.industry,
            residence_tier = record.residence_tier,
            exp_band = %record.exp_band,
            age_band = record.age_band.label(),
            languages_band = record.languages_band.label(),
            market_access = record.market_access.label(),
            ethnicity = record.ethnicity.as_deref().unwrap_or("-"),
            real_value_usd = record.real_value_usd,
            gap_usd = record.gap_usd,
            label = %record.label,
            "aggregate event"
        );
        Ok(())
    }
}
