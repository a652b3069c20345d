//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::services::ServeDir;

use approvals_domain::RequestId;
use approvals_shared::{routes, CreateRequestBody, DeleteRequestForm, RequestDto, UpdateStatusBody};

use crate::app::App;
use crate::use_cases::RequestError;

/// Create all HTTP routes.
///
/// With a `static_dir`, the built web client is served for every path the
/// API does not claim, so `/` loads its `index.html`.
pub fn routes(static_dir: Option<&FsPath>) -> Router<Arc<App>> {
    let api = Router::new()
        .route(routes::HEALTH, get(health))
        .route(routes::VIEW_REQUESTS, get(view_requests))
        .route(routes::UPDATE_REQUEST_PATTERN, post(update_request))
        .route(routes::DELETE_REQUEST, post(delete_request))
        .route(routes::SUBMIT_REQUEST, post(submit_request));

    match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.route("/", get(health)),
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn view_requests(State(app): State<Arc<App>>) -> Result<Json<Vec<RequestDto>>, ApiError> {
    let requests = app.requests.list().await?;
    Ok(Json(requests.into_iter().map(RequestDto::from).collect()))
}

async fn update_request(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<RequestDto>, ApiError> {
    let id = RequestId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let request = app.requests.decide(&id, body.status).await?;
    Ok(Json(request.into()))
}

async fn delete_request(
    State(app): State<Arc<App>>,
    Form(form): Form<DeleteRequestForm>,
) -> Result<StatusCode, ApiError> {
    app.requests.delete(&form.id).await?;
    Ok(StatusCode::OK)
}

async fn submit_request(
    State(app): State<Arc<App>>,
    Json(body): Json<CreateRequestBody>,
) -> Result<(StatusCode, Json<RequestDto>), ApiError> {
    let request = app
        .requests
        .submit(body.name, body.date, body.reason)
        .await?;
    Ok((StatusCode::CREATED, Json(request.into())))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::NotFound(_) => ApiError::NotFound,
            RequestError::Conflict(msg) => ApiError::Conflict(msg),
            RequestError::InvalidInput(msg) => ApiError::BadRequest(msg),
            RequestError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}
