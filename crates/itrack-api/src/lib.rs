//! itrack-api: REST API server for the itrack issue tracker
//!
//! Provides HTTP endpoints for CRUD operations on issues. The router is
//! built over an injected [`IssueStore`] handle so tests can run it against
//! an in-memory store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use itrack_core::{Error, IssueStore, IssueUpdate, NewIssue};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state
pub struct AppState {
    pub store: RwLock<Box<dyn IssueStore>>,
}

impl AppState {
    pub fn new(store: impl IssueStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            store: RwLock::new(Box::new(store)),
        })
    }
}

/// Error (and delete-confirmation) body: `{"message": "..."}`
#[derive(Debug, Serialize)]
struct Message {
    message: String,
}

impl Message {
    fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

fn not_found() -> (StatusCode, Json<Message>) {
    (StatusCode::NOT_FOUND, Message::json("Issue not found"))
}

/// Root banner
async fn index() -> &'static str {
    "itrack API"
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// List all issues
async fn list_issues(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().unwrap();
    (StatusCode::OK, Json(store.list()))
}

/// Get a single issue by ID
async fn get_issue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.read().unwrap();
    match store.get(&id) {
        Some(issue) => (StatusCode::OK, Json(issue)).into_response(),
        None => not_found().into_response(),
    }
}

/// Create a new issue
async fn create_issue(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewIssue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return (StatusCode::BAD_REQUEST, Message::json(rejection.body_text()))
                .into_response();
        }
    };

    let mut store = state.store.write().unwrap();
    match store.insert(new) {
        Ok(issue) => (StatusCode::CREATED, Json(issue)).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Message::json(e.to_string())).into_response(),
    }
}

/// Update an existing issue
async fn update_issue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<IssueUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return (StatusCode::BAD_REQUEST, Message::json(rejection.body_text()))
                .into_response();
        }
    };

    let mut store = state.store.write().unwrap();
    match store.replace(&id, update) {
        Ok(issue) => (StatusCode::OK, Json(issue)).into_response(),
        Err(Error::NotFound) => not_found().into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Message::json(e.to_string())).into_response(),
    }
}

/// Delete an issue
async fn delete_issue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut store = state.store.write().unwrap();
    match store.remove(&id) {
        Ok(()) => (
            StatusCode::OK,
            Message::json("Issue deleted successfully"),
        )
            .into_response(),
        Err(Error::NotFound) => not_found().into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Message::json(e.to_string()),
        )
            .into_response(),
    }
}

/// Build the API router over the given state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/issues", get(list_issues).post(create_issue))
        .route(
            "/api/issues/{id}",
            get(get_issue).put(update_issue).delete(delete_issue),
        )
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
