use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

const MISSING_TOKEN: &str = "Missing authorization token";
const INVALID_TOKEN: &str = "Invalid token, please login";

/// Middleware that verifies the access token and adds the caller's identity
/// to request extensions.
///
/// The `Authorization` header carries the bare token; a `Bearer ` prefix is
/// accepted and stripped.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let subject = state.authenticator.verify_token(&token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Forbidden(INVALID_TOKEN.to_string())
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user ID");
        ApiError::Forbidden(INVALID_TOKEN.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<String, ApiError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Err(ApiError::Forbidden(MISSING_TOKEN.to_string()));
    };

    let raw = value
        .to_str()
        .map_err(|_| ApiError::Forbidden(INVALID_TOKEN.to_string()))?
        .trim();

    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if token.is_empty() {
        return Err(ApiError::Forbidden(MISSING_TOKEN.to_string()));
    }

    Ok(token.to_string())
}
