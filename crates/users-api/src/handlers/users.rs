// ============================================================================
// Users API - User Handlers
// File: crates/users-api/src/handlers/users.rs
// ============================================================================
//! CRUD handlers for the `/users` resource. Each issues exactly one store call.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use users_core::domain::{User, UserDetails, UserDraft};

use crate::error::ApiError;
use crate::response::{MessageResponse, UserCreatedResponse, UserDeletedResponse};
use crate::state::AppState;

const CREATE_FIELDS_REQUIRED: &str = "Missing required fields: name, address, or gender";
const REPLACE_FIELDS_REQUIRED: &str =
    "All fields (name, address, gender) are required for a PUT request";

/// Unparseable bodies count as missing fields.
fn user_details(
    payload: Result<Json<UserDraft>, JsonRejection>,
    message: &'static str,
) -> Result<UserDetails, ApiError> {
    let Json(draft) = payload.map_err(|rejection| {
        debug!("Rejected user body: {}", rejection);
        ApiError::BadRequest(message)
    })?;

    draft.into_details().map_err(|_| ApiError::BadRequest(message))
}

/// List users - GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .find_all()
        .await
        .map_err(ApiError::database("Database error fetching users"))?;

    Ok(Json(users))
}

/// Get user - GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .find_by_id(&id)
        .await
        .map_err(ApiError::database("Database error fetching user"))?
        .map(Json)
        .ok_or_else(ApiError::user_not_found)
}

/// Create user - POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), ApiError> {
    let details = user_details(payload, CREATE_FIELDS_REQUIRED)?;

    let user_id = state
        .users
        .create(&details)
        .await
        .map_err(ApiError::database("Database error adding user"))?;

    info!("Added user {}", user_id);
    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User added successfully".to_string(),
            user_id,
        }),
    ))
}

/// Replace user - PUT /users/{id}
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserDraft>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let details = user_details(payload, REPLACE_FIELDS_REQUIRED)?;

    let affected = state
        .users
        .replace(&id, &details)
        .await
        .map_err(ApiError::database("Database error during update"))?;

    if affected == 0 {
        return Err(ApiError::user_not_found());
    }

    info!("Replaced user {}", id);
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// Delete user - DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDeletedResponse>, ApiError> {
    let affected = state
        .users
        .delete(&id)
        .await
        .map_err(ApiError::database("Database error during deletion"))?;

    if affected == 0 {
        return Err(ApiError::user_not_found());
    }

    info!("Deleted user {}", id);
    Ok(Json(UserDeletedResponse {
        message: "User deleted successfully".to_string(),
        id,
    }))
}
