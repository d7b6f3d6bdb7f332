use axum::http::StatusCode;

use super::ApiSuccess;
use super::EmptyData;

pub async fn health() -> ApiSuccess<EmptyData> {
    ApiSuccess::new(StatusCode::OK, "ok", EmptyData {})
}
