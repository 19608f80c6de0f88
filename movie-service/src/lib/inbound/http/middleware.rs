use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

const BEARER_SCHEME: &str = "Bearer";

/// Identity resolved from a valid bearer token, stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Gate in front of every protected route.
///
/// Requires `Authorization: Bearer <token>`, validates the token at the
/// current instant and hands the subject to the handler. Any failure answers
/// 401 before the handler runs.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = header_value
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| {
            ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )
        })?;

    let subject = authenticator
        .authorize(token, Utc::now())
        .map_err(|e| match e {
            JwtError::InvalidSubject(_) => {
                tracing::warn!(error = %e, "Token carries an unusable subject");
                ApiError::Unauthorized("Invalid token format".to_string())
            }
            _ => {
                tracing::debug!(error = %e, "Token rejected");
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
        })?;

    let user_id = UserId::from_string(&subject.to_string()).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        ApiError::Unauthorized("Invalid token format".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if scheme != BEARER_SCHEME || token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;

    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use chrono::Duration;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"middleware_test_secret_32_bytes_long";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET, Duration::hours(1)).unwrap())
    }

    fn app(authenticator: Arc<Authenticator>, reached: Arc<AtomicBool>) -> Router {
        Router::new()
            .route(
                "/protected",
                get(move |Extension(user): Extension<AuthenticatedUser>| {
                    let reached = reached.clone();
                    async move {
                        reached.store(true, Ordering::SeqCst);
                        user.user_id.to_string()
                    }
                }),
            )
            .route_layer(middleware::from_fn_with_state(authenticator, authenticate))
    }

    fn request(authorization: Option<&str>) -> Request {
        let builder = Request::builder().uri("/protected");
        let builder = match authorization {
            Some(value) => builder.header(header::AUTHORIZATION, value),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("Basic xyz"), None);
        assert_eq!(bearer_token("Bearer abc def"), None);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_subject() {
        let authenticator = authenticator();
        let token = authenticator.issue_token(7, Utc::now()).unwrap().access_token;
        let reached = Arc::new(AtomicBool::new(false));

        let response = app(authenticator, reached.clone())
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let reached = Arc::new(AtomicBool::new(false));

        let response = app(authenticator(), reached.clone())
            .oneshot(request(None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_other_scheme_is_rejected() {
        let reached = Arc::new(AtomicBool::new(false));

        let response = app(authenticator(), reached.clone())
            .oneshot(request(Some("Basic xyz")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let authenticator = authenticator();
        let issued_at = Utc::now() - Duration::hours(2);
        let token = authenticator.issue_token(7, issued_at).unwrap().access_token;
        let reached = Arc::new(AtomicBool::new(false));

        let response = app(authenticator, reached.clone())
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let foreign = Authenticator::new(b"another_secret_that_is_32_bytes_long", Duration::hours(1))
            .unwrap();
        let token = foreign.issue_token(7, Utc::now()).unwrap().access_token;
        let reached = Arc::new(AtomicBool::new(false));

        let response = app(authenticator(), reached.clone())
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_non_positive_subject_is_rejected() {
        let authenticator = authenticator();
        let token = authenticator.issue_token(0, Utc::now()).unwrap().access_token;
        let reached = Arc::new(AtomicBool::new(false));

        let response = app(authenticator, reached.clone())
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }
}
