use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::Deserialize;

use crate::directory::{ActivityDirectory, DirectoryError};
use crate::models::{Activity, ErrorResponse, MessageResponse};

// ============================================================
// Error Handling
// ============================================================

/// Map a directory error to its HTTP response.
///
/// Unknown activity names are 404; membership conflicts (already signed up,
/// not registered) are 400. Both carry the error's display string in the
/// `detail` field.
fn error_response(e: DirectoryError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
        DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => StatusCode::BAD_REQUEST,
    };

    tracing::warn!("Request rejected: {}", e);
    (
        status,
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Landing Page
// ============================================================

pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

// ============================================================
// Activities
// ============================================================

pub async fn list_activities(
    State(directory): State<ActivityDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    Json(directory.list())
}

/// Query parameters for signup and unregister.
///
/// The email is a plain string; no format validation is applied.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup(
    State(directory): State<ActivityDirectory>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    directory
        .signup(&activity_name, &query.email)
        .map(|message| Json(MessageResponse { message }))
        .map_err(error_response)
}

pub async fn unregister(
    State(directory): State<ActivityDirectory>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    directory
        .unregister(&activity_name, &query.email)
        .map(|message| Json(MessageResponse { message }))
        .map_err(error_response)
}
