// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitSettings};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, images},
    middleware::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
    routing::get,
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub max_body_bytes: usize,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            max_body_bytes: 8 * 1024 * 1024,
            allowed_origins: Vec::new(),
            rate_limit: None,
        }
    }
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_body_bytes: config.max_body_bytes(),
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/storage/images/{name}", get(images::get_image))
        .layer(DefaultBodyLimit::max(options.max_body_bytes));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api);

    if let Some(settings) = options.rate_limit {
        match rate_limit_layer(settings) {
            Some(layer) => router = router.layer(layer),
            None => warn!(?settings, "rate limit settings rejected; limiter disabled"),
        }
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-user-id"),
        ])
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        layer.allow_origin(origins)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
