use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use market_value::valuation::{valuation_router, AggregateSink, ValuationService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_valuation_routes<S>(service: Arc<ValuationService<S>>) -> axum::Router
where
    S: AggregateSink + 'static,
{
    valuation_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use market_value::scoring::{BenchmarkSet, ScoringEngine};
    use market_value::valuation::TracingAggregateSink;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let engine = ScoringEngine::new(BenchmarkSet::bundled().expect("bundled tables load"));
        let service = Arc::new(ValuationService::new(engine, Arc::new(TracingAggregateSink)));
        with_valuation_routes(service)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn score_route_is_mounted_alongside_probes() {
        let request = json!({
            "role": "Growth Marketing Manager",
            "industry": "other",
            "residence_country": "Portugal",
            "work_country": "United Kingdom",
            "age": 29,
            "exp_years": 3,
            "leadership": "small",
            "employment": "self-employed",
            "languages_count": 2,
            "education": "bachelor",
            "annual_compensation": 52000,
            "consent_concept": true,
            "consent_aggregate": true
        });

        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/score")
                    .header("content-type", "application/json")
                    .body(Body::from(request.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["role_category"], "product");
        assert_eq!(body["residence_tier"], 3);
        assert_eq!(body["exp_band"], "3-5");
    }
}
