//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, Utc};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::closures::{ClosureResult, compute_intervals};
use crate::rasp::RaspError;

use super::dto::{ClosuresResponse, ErrorResponse};
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the front-end assets directory; any
/// path not handled by the API falls through to it.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/closures", get(closures))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Closure windows for today.
///
/// Served from the daily cache when fresh; otherwise fetches the
/// schedule, computes the windows and stores them before responding.
/// Concurrent misses may fetch redundantly; the later store wins.
async fn closures(State(state): State<AppState>) -> Result<Json<ClosuresResponse>, AppError> {
    let today = Local::now().date_naive();

    if let Some(cached) = state.cache.get(today, Utc::now()).await {
        return Ok(Json(ClosuresResponse::from_result(&cached)));
    }

    let payload = state.rasp.fetch_arrivals(today).await?;
    let intervals = compute_intervals(
        &payload.schedule,
        state.closures.closed_before_min,
        state.closures.closed_after_min,
    );

    let result = Arc::new(ClosureResult {
        intervals,
        station: state.rasp.station().to_owned(),
        date: today,
        closed_before_min: state.closures.closed_before_min,
        closed_after_min: state.closures.closed_after_min,
    });

    state.cache.put(today, Arc::clone(&result), Utc::now()).await;

    Ok(Json(ClosuresResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Required credential absent; fatal for the request, not the process
    Configuration,

    /// Upstream responded with a non-success status
    Upstream { status: u16, body: String },

    /// Network or parse failure talking to upstream
    Transport { detail: String },
}

impl From<RaspError> for AppError {
    fn from(e: RaspError) -> Self {
        match e {
            RaspError::MissingApiKey => AppError::Configuration,
            RaspError::Api { status, body } => AppError::Upstream { status, body },
            RaspError::Http(e) => AppError::Transport {
                detail: e.to_string(),
            },
            RaspError::Json { message, .. } => AppError::Transport { detail: message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("YANDEX_RASP_API_KEY is not set"),
            ),
            AppError::Upstream { status, body } => {
                // Pass the provider's status through; fall back to 502
                // if it is not a representable HTTP code.
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let mut resp = ErrorResponse::new("schedule provider returned an error");
                resp.status = Some(status);
                resp.body = Some(body);
                (code, resp)
            }
            AppError::Transport { detail } => {
                let mut resp = ErrorResponse::new("failed to query the schedule API");
                resp.detail = Some(detail);
                (StatusCode::INTERNAL_SERVER_ERROR, resp)
            }
        };

        warn!(status = %status, error = %body.error, "request failed");

        (status, Json(body)).into_response()
    }
}
