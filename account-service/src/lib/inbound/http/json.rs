use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::extract::Request;
use serde::de::DeserializeOwned;

use super::handlers::ApiError;

/// Local version of [`axum::Json`] that answers with the failure envelope
/// when the body cannot be read as JSON.
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => {
                let message = match rejection {
                    JsonRejection::MissingJsonContentType(_) => {
                        "Invalid content type, expected application/json".to_string()
                    }
                    other => other.body_text(),
                };
                tracing::debug!(error = %message, "Rejected request body");
                Err(ApiError::BadRequest(message))
            }
        }
    }
}
