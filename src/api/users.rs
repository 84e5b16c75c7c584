//! User API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::books::UpdateRequest;
use super::extract::ApiJson;
use super::response::{domain_failure, failure, has_text, success, success_with_message};
use crate::infrastructure::AppState;
use crate::models::User;

/// Request DTO for registering a user. Loan fields are not accepted here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub subscription_type: Option<String>,
    pub subscription_date: Option<String>,
}

impl CreateUserRequest {
    fn into_user(self) -> Option<User> {
        let complete = [
            &self.id,
            &self.name,
            &self.surname,
            &self.email,
            &self.subscription_type,
            &self.subscription_date,
        ]
        .into_iter()
        .all(has_text);

        if !complete {
            return None;
        }

        Some(User {
            id: self.id?,
            name: self.name?,
            surname: self.surname?,
            email: self.email?,
            subscription_type: self.subscription_type?.into(),
            subscription_date: self.subscription_date?,
            issued_book: None,
            issued_date: None,
            return_date: None,
        })
    }
}

fn not_found_for(id: &str) -> String {
    format!("User with ID {} not found", id)
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All registered users")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.user_repo.find_all().await {
        Ok(users) => success(StatusCode::OK, users),
        Err(e) => domain_failure(e, "No users found"),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.user_repo.find_by_id(&id).await {
        Ok(Some(user)) => success(StatusCode::OK, user),
        Ok(None) => failure(StatusCode::NOT_FOUND, not_found_for(&id)),
        Err(e) => domain_failure(e, not_found_for(&id)),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Missing fields or duplicate ID")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Response {
    let Some(user) = payload.into_user() else {
        return failure(
            StatusCode::BAD_REQUEST,
            "Please provide all the required fields",
        );
    };

    match state.user_repo.find_by_id(&user.id).await {
        Ok(Some(_)) => {
            return failure(
                StatusCode::BAD_REQUEST,
                format!("User with ID {} already exists", user.id),
            );
        }
        Ok(None) => {}
        Err(e) => return domain_failure(e, not_found_for(&user.id)),
    }

    let id = user.id.clone();
    match state.user_repo.create(user).await {
        Ok(user) => {
            tracing::info!("User {} registered ({} plan)", user.id, user.subscription_type);
            (
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "User created successfully"
                })),
            )
                .into_response()
        }
        Err(e) => domain_failure(e, not_found_for(&id)),
    }
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User updated; returns all users"),
        (status = 400, description = "Patch does not produce a valid user"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateRequest>,
) -> Response {
    if let Err(e) = state.user_repo.update(&id, payload.data).await {
        tracing::warn!("Update of user {} rejected: {}", id, e);
        return domain_failure(e, not_found_for(&id));
    }
    tracing::info!("User {} updated", id);

    match state.user_repo.find_all().await {
        Ok(users) => success_with_message(StatusCode::OK, "User updated successfully", users),
        Err(e) => domain_failure(e, not_found_for(&id)),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted; returns the remaining users"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if let Err(e) = state.user_repo.delete(&id).await {
        return domain_failure(e, not_found_for(&id));
    }
    tracing::info!("User {} deleted", id);

    match state.user_repo.find_all().await {
        Ok(users) => success_with_message(StatusCode::OK, "User deleted successfully", users),
        Err(e) => domain_failure(e, not_found_for(&id)),
    }
}
