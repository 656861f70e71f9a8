// Axum API Server Module
//
// Purpose: JSON surface over the growth assessor for form handlers
// Assessments are microsecond-scale; only large batches leave the async runtime

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::assessor::{AssessorConfig, GrowthAssessor};
use crate::error::{GrowthError, ValidationErrors};
use crate::reference::{Indicator, Sex};
use crate::validation::RawMeasurement;

/// Batches at or above this size are scored on the blocking pool with Rayon
const PARALLEL_BATCH_THRESHOLD: usize = 64;
const MAX_BATCH_SIZE: usize = 10_000;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub assessor: Arc<GrowthAssessor>,
}

impl AppState {
    pub fn new(config: &AssessorConfig) -> anyhow::Result<Self> {
        match &config.reference_path {
            Some(path) => tracing::info!("Loading LMS reference overlay from {:?}...", path),
            None => tracing::info!("Using embedded WHO reference tables"),
        }

        let assessor = GrowthAssessor::with_config(config)?;
        tracing::info!(
            "Growth assessor ready ({} tables, {:?} z-scores)",
            assessor.reference().len(),
            assessor.method()
        );

        Ok(Self {
            assessor: Arc::new(assessor),
        })
    }

    pub fn from_assessor(assessor: GrowthAssessor) -> Self {
        Self {
            assessor: Arc::new(assessor),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Assessment endpoints
        .route("/api/growth/assess", post(assess))
        .route("/api/growth/batch", post(assess_batch))

        // Reference lookup
        .route("/api/growth/reference/:indicator/:sex", get(reference_params))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn assess(
    State(state): State<AppState>,
    Json(payload): Json<RawMeasurement>,
) -> Result<Json<serde_json::Value>, AppError> {
    let assessment = state.assessor.assess(&payload).map_err(|e| {
        tracing::debug!("Assessment rejected: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(serde_json::to_value(assessment).map_err(|e| {
        AppError::Internal(format!("Serialization error: {}", e))
    })?))
}

#[derive(Deserialize)]
struct BatchRequest {
    measurements: Vec<RawMeasurement>,
}

async fn assess_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let count = payload.measurements.len();
    if count > MAX_BATCH_SIZE {
        return Err(AppError::BadRequest(format!(
            "Batch of {} exceeds the limit of {}",
            count, MAX_BATCH_SIZE
        )));
    }

    tracing::info!("Assessing batch of {} measurements", count);

    let results = if count >= PARALLEL_BATCH_THRESHOLD {
        // CPU-bound work: run in blocking thread pool
        let assessor = state.assessor.clone();
        tokio::task::spawn_blocking(move || assessor.assess_batch_parallel(&payload.measurements))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
    } else {
        state.assessor.assess_batch(&payload.measurements)
    };

    let results: Vec<serde_json::Value> = results
        .into_iter()
        .map(|result| match result {
            Ok(assessment) => serde_json::json!({ "ok": assessment }),
            Err(e) => error_body(&e),
        })
        .collect();

    Ok(Json(serde_json::json!({
        "count": count,
        "results": results,
    })))
}

#[derive(Deserialize)]
struct ReferenceQuery {
    key: f64,
}

async fn reference_params(
    State(state): State<AppState>,
    Path((indicator, sex)): Path<(String, String)>,
    Query(query): Query<ReferenceQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let indicator: Indicator = indicator.parse()?;
    let sex: Sex = sex.parse()?;
    let params = state.assessor.reference_params(indicator, sex, query.key)?;

    Ok(Json(serde_json::json!({
        "indicator": indicator,
        "sex": sex,
        "key": query.key,
        "l": params.l,
        "m": params.m,
        "s": params.s,
    })))
}

fn error_body(error: &GrowthError) -> serde_json::Value {
    match error {
        GrowthError::Validation(violations) => serde_json::json!({
            "error": error.to_string(),
            "violations": violations,
        }),
        other => serde_json::json!({ "error": other.to_string() }),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound(String),
    Unsupported(String),
    Internal(String),
}

impl From<GrowthError> for AppError {
    fn from(error: GrowthError) -> Self {
        match error {
            GrowthError::Validation(violations) => AppError::Validation(violations),
            GrowthError::InvalidInput(msg) => AppError::BadRequest(msg),
            GrowthError::Unsupported(msg) => AppError::Unsupported(msg),
            lookup @ GrowthError::Lookup { .. } => AppError::NotFound(lookup.to_string()),
            GrowthError::Reference(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                error_body(&GrowthError::Validation(violations)),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            AppError::Unsupported(msg) => {
                (StatusCode::NOT_IMPLEMENTED, serde_json::json!({ "error": msg }))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}
