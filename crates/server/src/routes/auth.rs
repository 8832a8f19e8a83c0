use crate::extract::Caller;
use axum::http::StatusCode;

/// Returns a greeting with the caller's subject identifier from their JWT claims
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Successfully authenticated", content_type = "text/plain", body = String),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn whoami(Caller(caller): Caller) -> (StatusCode, String) {
    (StatusCode::OK, format!("Hello, {}", caller.user_id))
}
