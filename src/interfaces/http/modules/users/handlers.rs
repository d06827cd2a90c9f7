//! User API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateUserRequest, UserDto};
use crate::application::AccountService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, CreatedResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub accounts: Arc<AccountService>,
}

#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.accounts.list_users().await.map_err(domain_error)?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 409, description = "Username taken", body = ApiResponse<String>),
        (status = 422, description = "Validation error", body = ApiResponse<String>)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state
        .accounts
        .create_user(request.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[cfg(test)]
mod tests {
    use crate::interfaces::http::test_support::{send, test_router};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn signup_then_list_exposes_is_admin_flag() {
        let app = test_router().await;
        let (status, _) = send(
            &app,
            "POST",
            "/usuarios",
            Some(json!({"username": "ana", "password": "pw", "isAdmin": false})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send(&app, "GET", "/usuarios", None).await;
        assert_eq!(body[0]["username"], "ana");
        assert_eq!(body[0]["password"], "pw");
        assert_eq!(body[0]["isAdmin"], false);
    }

    #[tokio::test]
    async fn taken_username_is_409() {
        let app = test_router().await;
        let user = json!({"username": "ana", "password": "pw", "isAdmin": false});
        send(&app, "POST", "/usuarios", Some(user.clone())).await;
        let (status, _) = send(&app, "POST", "/usuarios", Some(user)).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn missing_field_is_400() {
        let app = test_router().await;
        let (status, body) = send(&app, "POST", "/usuarios", Some(json!({"username": "ana"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
