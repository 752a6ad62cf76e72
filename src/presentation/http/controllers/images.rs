// src/presentation/http/controllers/images.rs
use crate::application::error::ApplicationError;
use crate::domain::article::ImageName;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiPath;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/storage/images/{name}",
    params(("name" = String, Path, description = "Stored image name as returned in `image`")),
    responses(
        (status = 200, description = "Raw image bytes.", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "No such image.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Images"
)]
pub async fn get_image(
    Extension(state): Extension<HttpState>,
    ApiPath(name): ApiPath<String>,
) -> HttpResult<Response> {
    let not_found = || HttpError::from_error(ApplicationError::not_found("image not found"));
    let name = ImageName::new(name).map_err(|_| not_found())?;

    let bytes = state
        .services
        .blob_store()
        .get(&name)
        .await
        .into_http()?
        .ok_or_else(not_found)?;

    let content_type = image::guess_format(&bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
