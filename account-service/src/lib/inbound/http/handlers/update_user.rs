use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::UserPayload;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::json::Json;
use crate::inbound::http::router::AppState;

/// Overwrite the account matching the body's `email`. Omitted fields are stored as empty.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Json(body): Json<UserPayload>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .user_service
        .update_user(&actor, body)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::OK,
                "Details updated Successfully",
                UserResponseData { user: user.into() },
            )
        })
}
