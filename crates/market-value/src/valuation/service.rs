use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::aggregate::{AggregateError, AggregateRecord, AggregateSink};
use super::intake::{input_from_request, IntakeError, ScoreRequest};
use crate::scoring::{ScoreResult, ScoringEngine};

/// Service composing request intake, the scoring engine, and the aggregate sink.
pub struct ValuationService<S> {
    engine: ScoringEngine,
    sink: Arc<S>,
}

/// Result of a single valuation, plus the aggregate record when one was published.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub result: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<AggregateRecord>,
}

impl<S> ValuationService<S>
where
    S: AggregateSink + 'static,
{
    pub fn new(engine: ScoringEngine, sink: Arc<S>) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate, score, and publish the aggregate record if consented.
    pub fn evaluate(&self, request: ScoreRequest) -> Result<Valuation, ValuationServiceError> {
        let input = input_from_request(&request)?;
        let result = self.engine.score(&input);
        debug!(
            role_category = %result.role_category,
            residence_tier = result.residence_tier,
            label = %result.label,
            "valuation scored"
        );

        let aggregate = AggregateRecord::from_scoring(&request, &input, &result);
        if let Some(record) = &aggregate {
            self.sink.publish(record.clone())?;
        }

        Ok(Valuation { result, aggregate })
    }
}

/// Error raised by the valuation service.
#[derive(Debug, thiserror::Error)]
pub enum ValuationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}
