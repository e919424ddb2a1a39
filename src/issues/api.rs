use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use serde_json::{Value, json};

use super::models::{CreateIssueRequest, UpdateStatusRequest};
use super::store::IssueStore;
use crate::errors::StoreError;

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub store: IssueStore,
    /// Port reported on the status page.
    pub port: u16,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: IssueStore, port: u16) -> SharedState {
        Arc::new(Self { store, port })
    }
}

// ── Error handling ────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(json!({"error": message}))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::IssueNotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::MissingFields { .. } | StoreError::InvalidStatus { .. } => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/issues", get(list_issues).post(create_issue))
        .route("/api/issues/{id}", get(get_issue))
        .route("/api/issues/{id}/status", patch(update_issue_status))
        .route("/health", get(health_check))
}

// ── Handlers ──────────────────────────────────────────────────────────

/// Parse a request body as JSON whatever its content type. An empty body
/// reads as `{}`.
fn json_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn list_issues(State(state): State<SharedState>) -> impl IntoResponse {
    let issues = state.store.list();
    tracing::debug!(count = issues.len(), "listing issues");
    Json(json!({"issues": issues}))
}

async fn get_issue(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let issue = state.store.get_by_id(&id).inspect_err(|_| {
        tracing::debug!(%id, "issue lookup missed");
    })?;
    Ok(Json(json!({"issue": issue})))
}

async fn create_issue(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = CreateIssueRequest::from_json(&json_body(&body)?);

    // IssueStore::create repeats this check for callers outside HTTP.
    let missing = req.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(?missing, "rejected issue report");
        return Err(StoreError::MissingFields { fields: missing }.into());
    }

    let issue = state.store.create(req)?;
    tracing::info!(id = %issue.id, category = %issue.category, "issue reported");
    Ok((StatusCode::CREATED, Json(json!({"issue": issue}))))
}

async fn update_issue_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // An unreadable body counts as a missing status, so an unknown id still
    // answers 404 first.
    let req = json_body(&body)
        .map(|value| UpdateStatusRequest::from_json(&value))
        .unwrap_or_default();
    let issue = state
        .store
        .update_status(&id, req.status.as_deref())
        .inspect_err(|e| {
            tracing::warn!(%id, error = %e, "status update rejected");
        })?;
    tracing::info!(%id, status = %issue.status, "issue status changed");
    Ok(Json(json!({"issue": issue})))
}

// ── Tests ─────────────────────────────────────────────────────────────
