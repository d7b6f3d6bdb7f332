use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::models::UserPayload;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::json::Json;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<UserPayload>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .user_service
        .signup(body)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Registered successfully",
                UserResponseData { user: user.into() },
            )
        })
}
