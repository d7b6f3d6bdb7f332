pub mod handlers;
pub mod json;
pub mod middleware;
pub mod router;
