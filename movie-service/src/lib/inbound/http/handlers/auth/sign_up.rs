use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::users::CreateUserRequestBody;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatedResponseData;
use crate::inbound::http::router::AppState;

/// Public self-registration.
pub async fn sign_up(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUserRequestBody>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, CreatedResponseData { id: user.id.0 }))
}
