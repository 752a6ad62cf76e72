// src/presentation/http/extractors.rs
use crate::{
    application::{dto::ImageUpload, error::ApplicationError, validation::ValidationErrors},
    domain::user::UserId,
};
use axum::{
    extract::{
        FromRequest, FromRequestParts, Multipart, Request,
        rejection::{PathRejection, QueryRejection},
    },
    http::request::Parts,
};
use headers::{Header, HeaderMapExt, HeaderName, HeaderValue};

use super::error::HttpError;

static X_USER_ID: HeaderName = HeaderName::from_static("x-user-id");

/// `X-User-Id`, set by the authenticating proxy in front of this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XUserId(pub UserId);

impl Header for XUserId {
    fn name() -> &'static HeaderName {
        &X_USER_ID
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let raw = value.to_str().map_err(|_| headers::Error::invalid())?;
        raw.trim()
            .parse::<UserId>()
            .map(Self)
            .map_err(|_| headers::Error::invalid())
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        values.extend(std::iter::once(HeaderValue::from(i64::from(self.0))));
    }
}

/// The caller on whose behalf the request runs.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub UserId);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.typed_try_get::<XUserId>() {
            Ok(Some(XUserId(user_id))) => Ok(Self(user_id)),
            Ok(None) => Err(HttpError::from_error(ApplicationError::unauthorized(
                "missing X-User-Id header",
            ))),
            Err(_) => Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid X-User-Id header",
            ))),
        }
    }
}

/// `Path` whose rejection renders as the JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);

/// `Query` whose rejection renders as the JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct ApiQuery<T>(pub T);

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::new(rejection.status(), rejection.body_text())
    }
}

/// Multipart body shared by article create and update.
///
/// Text fields that are absent arrive as empty strings so the command layer
/// reports them as required. An empty `category_id` counts as not supplied.
/// Only a part carrying a filename is an upload, and a zero-byte file counts
/// as none.
#[derive(Debug, Clone, Default)]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub image: Option<ImageUpload>,
}

impl<S> FromRequest<S> for ArticleForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;

        let mut form = ArticleForm::default();
        let mut raw_category: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::new(err.status(), err.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "title" | "content" | "category_id" => {
                    let text = field
                        .text()
                        .await
                        .map_err(|err| HttpError::new(err.status(), err.body_text()))?;
                    match name.as_str() {
                        "title" => form.title = text,
                        "content" => form.content = text,
                        _ => raw_category = Some(text),
                    }
                }
                "image" => {
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|err| HttpError::new(err.status(), err.body_text()))?;
                    if file_name.is_some() && !bytes.is_empty() {
                        form.image = Some(ImageUpload::new(file_name, bytes));
                    }
                }
                _ => {}
            }
        }

        form.category_id = parse_category(raw_category)?;
        Ok(form)
    }
}

fn parse_category(raw: Option<String>) -> Result<Option<i64>, HttpError> {
    let Some(raw) = raw.map(|value| value.trim().to_string()) else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some).map_err(|_| {
        HttpError::from_error(
            ValidationErrors::single("category_id", "The category id must be an integer.").into(),
        )
    })
}
