//! HTTP layer: a thin axum router over the prediction service.

use crate::error::ServiceError;
use crate::request::PredictRequest;
use crate::service::PredictionService;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Successful prediction body.
#[derive(Debug, Serialize)]
struct PredictResponse {
    runtime: f64,
}

/// Error body; `field` is present for validation failures.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, field) = match &self {
            ServiceError::Validation { field, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(*field))
            }
            ServiceError::Predictor(_) => {
                error!(error = %self, "Predictor failure");
                (StatusCode::SERVICE_UNAVAILABLE, None)
            }
        };
        let body = ErrorResponse {
            error: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

/// JSON extractor whose rejection keeps the `ErrorResponse` body shape, so
/// a missing or malformed field is answered in the same JSON format as a
/// semantic validation failure. The serde message names the field.
struct ApiJson<T>(T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                let body = ErrorResponse {
                    error: rejection.body_text(),
                    field: None,
                };
                Err((rejection.status(), Json(body)).into_response())
            }
        }
    }
}

async fn predict(
    State(service): State<PredictionService>,
    ApiJson(request): ApiJson<PredictRequest>,
) -> Result<Json<PredictResponse>, ServiceError> {
    let runtime = service.predict(&request)?;
    Ok(Json(PredictResponse { runtime }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the router: `POST /predict` and `GET /health`.
pub fn router(service: PredictionService) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
