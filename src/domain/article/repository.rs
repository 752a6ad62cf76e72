use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when the row no longer exists.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when nothing was deleted.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Newest first. `page` is 1-based; returns the page and the total row count.
    async fn list_latest(&self, page: u32, per_page: u32) -> DomainResult<(Vec<Article>, u64)>;
}
