//! User handlers.
//!
//! Each handler performs exactly one repository call and shares nothing with
//! the others besides the injected [`AppState`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use userstore_core::user::{CreateUserRequest, CreateUserResponse, MessageResponse};

use super::error::MalformedInput;
use crate::{handlers::AppError, state::AppState};

/// Create a new user (POST /users).
///
/// Generates the `user_id`; any id in the body is ignored.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let Json(request) = payload.map_err(|e| MalformedInput(e.body_text()))?;
    let user = request.into_user()?;

    state.user_repo.put_user(&user).await?;

    tracing::info!(user_id = %user.user_id, "Created new user");

    Ok(Json(CreateUserResponse::created(user.user_id)))
}

/// Get a single user by ID (GET /users/{userId}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    match state.user_repo.get_user(&user_id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => {
            tracing::debug!(%user_id, "User not found");
            Ok((StatusCode::NOT_FOUND, Json(MessageResponse::not_found())).into_response())
        }
    }
}

/// Delete a user by ID (DELETE /users/{userId}).
///
/// Succeeds whether or not the user existed.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_repo.delete_user(&user_id).await?;

    tracing::info!(%user_id, "Deleted user");

    Ok(Json(MessageResponse::deleted()))
}
