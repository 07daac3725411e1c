use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::profile::HealthProfile;
use super::{DiagnosisEngine, DiagnosisResult};
use crate::error::AppError;

/// Evaluation result stamped with the time it was produced, ready for the caller to store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub evaluated_at: DateTime<Utc>,
    pub diagnosis: DiagnosisResult,
}

/// Stateless HTTP surface over a shared engine.
pub fn diagnosis_router(engine: Arc<DiagnosisEngine>) -> Router {
    Router::new()
        .route("/api/v1/health/diagnose", post(diagnose_handler))
        .route("/api/v1/health/thresholds", get(thresholds_handler))
        .with_state(engine)
}

pub(crate) async fn diagnose_handler(
    State(engine): State<Arc<DiagnosisEngine>>,
    Json(profile): Json<HealthProfile>,
) -> Result<Json<DiagnosisResponse>, AppError> {
    let diagnosis = engine.evaluate_checked(&profile).map_err(|error| {
        warn!(%error, "rejected out-of-domain profile");
        AppError::from(error)
    })?;

    Ok(Json(DiagnosisResponse {
        evaluated_at: Utc::now(),
        diagnosis,
    }))
}

pub(crate) async fn thresholds_handler(State(engine): State<Arc<DiagnosisEngine>>) -> Response {
    (StatusCode::OK, Json(engine.thresholds().clone())).into_response()
}
