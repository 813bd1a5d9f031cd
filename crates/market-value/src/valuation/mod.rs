//! Request intake, aggregate publishing, and the HTTP surface around the scoring engine.

pub mod aggregate;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{
    AggregateError, AggregateRecord, AggregateSink, TracingAggregateSink, UNDISCLOSED_ETHNICITY,
};
pub use intake::{input_from_request, IntakeError, ScoreRequest};
pub use router::valuation_router;
pub use service::{Valuation, ValuationService, ValuationServiceError};
