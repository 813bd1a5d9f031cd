use std::sync::{Arc, Mutex};

use crate::scoring::{
    BenchmarkSet, EducationLevel, EmploymentType, Industry, LeadershipLevel, ScoringEngine,
};
use crate::valuation::aggregate::{AggregateError, AggregateRecord, AggregateSink};
use crate::valuation::intake::ScoreRequest;
use crate::valuation::service::ValuationService;

pub(super) fn request() -> ScoreRequest {
    ScoreRequest {
        role: "Software Engineer".to_string(),
        industry: Some(Industry::Tech),
        residence_country: "Germany".to_string(),
        work_country: "United States".to_string(),
        birth_country: Some("Portugal".to_string()),
        age: 31,
        exp_years: 7.0,
        leadership: LeadershipLevel::Org,
        company_name: Some("Acme GmbH".to_string()),
        employment: EmploymentType::Owner,
        languages_count: 3,
        education: EducationLevel::Master,
        annual_compensation: Some(120_000.0),
        hourly_rate: None,
        hours_per_week: None,
        ethnicity: None,
        consent_concept: true,
        consent_aggregate: false,
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(BenchmarkSet::bundled().expect("bundled tables load"))
}

#[derive(Default, Clone)]
pub(super) struct RecordingSink {
    events: Arc<Mutex<Vec<AggregateRecord>>>,
}

impl AggregateSink for RecordingSink {
    fn publish(&self, record: AggregateRecord) -> Result<(), AggregateError> {
        let mut guard = self.events.lock().expect("sink mutex poisoned");
        guard.push(record);
        Ok(())
    }
}

impl RecordingSink {
    pub(super) fn events(&self) -> Vec<AggregateRecord> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

pub(super) struct UnavailableSink;

impl AggregateSink for UnavailableSink {
    fn publish(&self, _record: AggregateRecord) -> Result<(), AggregateError> {
        Err(AggregateError::Unavailable("warehouse offline".to_string()))
    }
}

pub(super) fn service() -> (Arc<ValuationService<RecordingSink>>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let service = Arc::new(ValuationService::new(engine(), sink.clone()));
    (service, sink)
}
