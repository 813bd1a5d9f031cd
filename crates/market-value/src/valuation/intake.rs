use serde::{Deserialize, Serialize};

use crate::scoring::{
    Compensation, EducationLevel, EmploymentType, Industry, LeadershipLevel, ScoreInput,
};

/// Inbound valuation request as submitted by the form or API client.
///
/// `birth_country` and `company_name` are accepted for form compatibility and
/// are dropped during intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub industry: Option<Industry>,
    #[serde(default)]
    pub residence_country: String,
    #[serde(default)]
    pub work_country: String,
    #[serde(default)]
    pub birth_country: Option<String>,
    pub age: u32,
    pub exp_years: f64,
    pub leadership: LeadershipLevel,
    #[serde(default)]
    pub company_name: Option<String>,
    pub employment: EmploymentType,
    pub languages_count: u32,
    pub education: EducationLevel,
    #[serde(default)]
    pub annual_compensation: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub hours_per_week: Option<f64>,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub consent_concept: bool,
    #[serde(default)]
    pub consent_aggregate: bool,
}

/// Caller-side validation failures, raised before the engine runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("consent required")]
    ConsentRequired,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("compensation input required")]
    CompensationRequired,
    #[error("experience years must be a non-negative number")]
    InvalidExperience,
}

/// Validate a request and convert it into engine input.
///
/// Checks run in a fixed order: consent, required fields, compensation. An
/// annual figure takes precedence when both compensation forms are present.
pub fn input_from_request(request: &ScoreRequest) -> Result<ScoreInput, IntakeError> {
    if !request.consent_concept {
        return Err(IntakeError::ConsentRequired);
    }

    let role = required_text(&request.role, "role")?;
    let residence_country = required_text(&request.residence_country, "residence_country")?;
    let work_country = required_text(&request.work_country, "work_country")?;
    let industry = request
        .industry
        .ok_or(IntakeError::MissingField("industry"))?;

    let compensation = compensation_from(request).ok_or(IntakeError::CompensationRequired)?;

    if !request.exp_years.is_finite() || request.exp_years < 0.0 {
        return Err(IntakeError::InvalidExperience);
    }

    Ok(ScoreInput {
        role,
        industry,
        residence_country,
        work_country,
        exp_years: request.exp_years,
        leadership: request.leadership,
        languages_count: request.languages_count,
        employment: request.employment,
        education: request.education,
        ethnicity: request
            .ethnicity
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string),
        compensation,
    })
}

fn required_text(value: &str, field: &'static str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(IntakeError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn compensation_from(request: &ScoreRequest) -> Option<Compensation> {
    if let Some(amount) = request.annual_compensation.filter(|amount| *amount > 0.0) {
        return Some(Compensation::Annual { amount });
    }

    match (request.hourly_rate, request.hours_per_week) {
        (Some(rate), Some(hours_per_week)) if rate > 0.0 && hours_per_week > 0.0 => {
            Some(Compensation::Hourly {
                rate,
                hours_per_week,
            })
        }
        _ => None,
    }
}
