use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub user_id: i64,
    /// Stored file name, served under `/storage/images/{image}`.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            category_id: article.category_id.map(Into::into),
            user_id: article.user_id.into(),
            image: article.image.map(|name| name.into_inner()),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
