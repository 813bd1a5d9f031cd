use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::aggregate::AggregateSink;
use super::intake::ScoreRequest;
use super::service::{ValuationService, ValuationServiceError};

/// Router builder exposing the scoring endpoint.
pub fn valuation_router<S>(service: Arc<ValuationService<S>>) -> Router
where
    S: AggregateSink + 'static,
{
    Router::new()
        .route("/api/v1/score", post(score_handler::<S>))
        .with_state(service)
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<ValuationService<S>>>,
    body: Result<axum::Json<ScoreRequest>, JsonRejection>,
) -> Response
where
    S: AggregateSink + 'static,
{
    // Bodies that fail to deserialize answer 400 like any other intake failure.
    let axum::Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let payload = json!({
                "error": format!("invalid request: {}", rejection.body_text()),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.evaluate(request) {
        Ok(valuation) => (StatusCode::OK, axum::Json(valuation.result)).into_response(),
        Err(ValuationServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
