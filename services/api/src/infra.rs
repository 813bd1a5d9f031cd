use market_value::config::BenchmarkConfig;
use market_value::error::AppError;
use market_value::scoring::{BenchmarkSet, EthnicityBiasTable, ScoringEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load and validate reference data once; failures abort startup.
pub(crate) fn load_engine(config: &BenchmarkConfig) -> Result<ScoringEngine, AppError> {
    let engine = ScoringEngine::new(BenchmarkSet::load(config)?);

    match &config.bias_table_path {
        Some(path) => {
            let table = EthnicityBiasTable::from_path(path)?;
            info!(entries = table.len(), path = %path.display(), "bias factor enabled");
            Ok(engine.with_bias_table(table))
        }
        None => Ok(engine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn bundled_reference_data_loads_without_bias() {
        let engine = load_engine(&BenchmarkConfig::default()).expect("engine loads");
        assert!(!engine.bias_enabled());
        assert!(!engine.benchmarks().general.is_empty());
    }

    #[test]
    fn missing_override_file_is_fatal() {
        let config = BenchmarkConfig {
            general_path: Some(PathBuf::from("/nonexistent/general.csv")),
            ..BenchmarkConfig::default()
        };
        let err = load_engine(&config).expect_err("missing file rejected");
        assert!(matches!(err, AppError::ReferenceData(_)));
    }
}
