use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, Page},
    error::ApplicationResult,
};

pub const ARTICLES_PER_PAGE: u32 = 10;

pub struct ListArticlesQuery {
    /// 1-based; `0` is treated as the first page.
    pub page: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Page<ArticleDto>> {
        let page = query.page.max(1);

        let (records, total) = self
            .read_repo
            .list_latest(page, ARTICLES_PER_PAGE)
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, page, ARTICLES_PER_PAGE, total))
    }
}
