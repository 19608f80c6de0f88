use std::fmt;

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::session::models::SignInCommand;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SignInRequestBody>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    state
        .session_service
        .sign_in(SignInCommand::new(body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|session| {
            ApiSuccess::new(
                StatusCode::OK,
                SignInResponseData {
                    token: session.token,
                },
            )
        })
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignInRequestBody {
    email: String,
    password: String,
}

impl fmt::Debug for SignInRequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequestBody")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub token: String,
}
