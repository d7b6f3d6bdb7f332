use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::EmptyData;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::UserPayload;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::json::Json;
use crate::inbound::http::router::AppState;

pub async fn deactivate_user(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Json(body): Json<UserPayload>,
) -> Result<ApiSuccess<EmptyData>, ApiError> {
    state
        .user_service
        .deactivate_user(&actor, &body.email)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "User deactivated successfully",
        EmptyData {},
    ))
}
