mod payload;
mod store;

use axum::{
    Router,
    extract::{Json, Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::core::{
    ChartBundle, ProjectionResult, RandomVariance, ResultSummary, build_chart_bundle,
    run_projection,
};
use crate::error::ApiError;

pub use payload::{
    CalculatePayload, MAX_MONETARY_AMOUNT, MAX_TIMEFRAME_MONTHS, NumericField, build_inputs,
    inputs_from_payload,
};
pub use store::{InMemoryResultStore, ResultStore, StoredResult};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ResultStore>,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    id: u64,
    result: ProjectionResult,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Input(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        error_response(status, &self.to_string())
    }
}

pub fn router(store: Arc<dyn ResultStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/roi", post(calculate_handler))
        .route("/api/roi/:id", get(result_handler))
        .route("/api/roi/:id/charts", get(charts_handler))
        .fallback(not_found_handler)
        .with_state(AppState { store })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(Arc::new(InMemoryResultStore::new()));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "ROI estimator HTTP API listening");

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let inputs = inputs_from_payload(payload)?;
    let result = run_projection(&inputs, &mut RandomVariance::from_entropy());
    let stored = state.store.save(inputs, ResultSummary::from(&result))?;

    tracing::info!(
        id = stored.id,
        months = stored.inputs.timeframe_months,
        roi_percentage = result.roi_percentage,
        payback_period_years = result.payback_period_years,
        "projection computed"
    );
    Ok(json_response(
        StatusCode::OK,
        CalculateResponse {
            id: stored.id,
            result,
        },
    ))
}

async fn result_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let stored = load(&state, id)?;
    Ok(json_response(StatusCode::OK, stored))
}

async fn charts_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let stored = load(&state, id)?;
    let bundle: ChartBundle = build_chart_bundle(
        &stored.inputs,
        &stored.result,
        &mut RandomVariance::from_entropy(),
    );

    tracing::debug!(
        id,
        points = bundle.monthly_data.len(),
        "chart bundle rebuilt"
    );
    Ok(json_response(StatusCode::OK, bundle))
}

fn load(state: &AppState, id: u64) -> Result<StoredResult, ApiError> {
    state.store.get(id)?.ok_or(ApiError::NotFound(id))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
