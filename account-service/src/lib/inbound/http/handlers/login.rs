use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserPayload;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::json::Json;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<UserPayload>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let token = state.user_service.login(body).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "logged in",
        LoginResponseData { token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
