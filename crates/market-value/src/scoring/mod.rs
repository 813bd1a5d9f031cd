//! Market value scoring: banding, role and geography normalization, benchmark
//! lookup, and the weighted adjustment arithmetic that produces a valuation.

pub mod bands;
pub mod benchmarks;
pub mod bias;
pub mod domain;
pub mod engine;
pub mod factors;
pub mod geography;
pub mod role;

pub use bands::{
    age_band, clamp, experience_band, language_band, AgeBand, ExperienceBand, LanguageBand,
};
pub use benchmarks::{
    BenchmarkError, BenchmarkMatch, BenchmarkRow, BenchmarkSet, BenchmarkTable, LookupStep,
};
pub use bias::{BiasTableError, EthnicityBiasTable};
pub use domain::{
    Compensation, EducationLevel, EmploymentType, Industry, LeadershipLevel, PriceLabel,
    ScoreInput, ScoreResult,
};
pub use engine::{Adjustments, ScoringEngine};
pub use factors::{Factor, FactorKind};
pub use geography::{
    country_tier, market_access_for_tier, market_access_level, MarketAccessLevel, FALLBACK_TIER,
};
pub use role::{normalize_role, RoleCategory};
