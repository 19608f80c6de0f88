use axum::http::StatusCode;

/// Tokens are stateless, so there is nothing to revoke.
pub async fn sign_out() -> StatusCode {
    StatusCode::OK
}
