// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryArticleRepo, InMemoryBlobStore, StaticCategoryRepo};
use axum::body;
use axum::http::StatusCode;
use folio_core::application::{
    commands::articles::ArticleCommandService, queries::articles::ArticleQueryService,
    services::ApplicationServices,
};
use folio_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

/// テスト中に参照したいモック群と、それらを束ねたサービス
pub struct TestContext {
    pub articles: Arc<InMemoryArticleRepo>,
    pub blobs: Arc<InMemoryBlobStore>,
    pub clock: Arc<FixedClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    /// `categories` に含まれる ID のみ存在するものとして扱う
    pub fn with_categories(categories: &[i64]) -> Self {
        let articles = Arc::new(InMemoryArticleRepo::new());
        let blobs = Arc::new(InMemoryBlobStore::new());
        let clock = Arc::new(FixedClock::new());
        let services = Arc::new(ApplicationServices::new(
            articles.clone(),
            articles.clone(),
            Arc::new(StaticCategoryRepo::with_ids(categories)),
            blobs.clone(),
            clock.clone(),
        ));
        Self {
            articles,
            blobs,
            clock,
            services,
        }
    }

    pub fn new() -> Self {
        Self::with_categories(&[1, 2, 3])
    }

    pub fn commands(&self) -> &ArticleCommandService {
        &self.services.article_commands
    }

    pub fn queries(&self) -> &ArticleQueryService {
        &self.services.article_queries
    }

    pub fn router(&self) -> axum::Router {
        self.router_with(RouterOptions::default())
    }

    pub fn router_with(&self, options: RouterOptions) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, options)
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
