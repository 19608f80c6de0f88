use std::io::ErrorKind;

use axum::extract::Path;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Serve a stored image as a download.
pub async fn get_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Response, ApiError> {
    let file_name = valid_file_name(&image_id)
        .ok_or_else(|| ApiError::BadRequest("Invalid image id".to_string()))?;

    let bytes = tokio::fs::read(state.images_directory.join(file_name))
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ApiError::NotFound(format!("Image not found: {}", file_name)),
            _ => ApiError::InternalServerError(format!(
                "Failed to read image {}: {}",
                file_name, e
            )),
        })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// A single visible path component made of printable characters.
fn valid_file_name(image_id: &str) -> Option<&str> {
    let is_plain = !image_id.is_empty()
        && !image_id.starts_with('.')
        && !image_id.contains("..")
        && !image_id.contains(['/', '\\', '"'])
        && !image_id.chars().any(char::is_control);

    is_plain.then_some(image_id)
}
