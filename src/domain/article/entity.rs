// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle, ImageName};
use crate::domain::category::CategoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category_id: Option<CategoryId>,
    pub user_id: UserId,
    pub image: Option<ImageName>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Overwrites the editable fields. `user_id` is never touched here.
    pub fn revise(
        &mut self,
        title: ArticleTitle,
        content: ArticleContent,
        category_id: Option<CategoryId>,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.content = content;
        self.category_id = category_id;
        self.updated_at = now;
    }

    /// Points the article at a new image and hands back the one it replaced.
    pub fn replace_image(&mut self, image: ImageName, now: DateTime<Utc>) -> Option<ImageName> {
        self.updated_at = now;
        self.image.replace(image)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category_id: Option<CategoryId>,
    pub user_id: UserId,
    pub image: Option<ImageName>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full overwrite of the mutable columns of an existing row.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category_id: Option<CategoryId>,
    pub image: Option<ImageName>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            category_id: article.category_id,
            image: article.image.clone(),
            updated_at: article.updated_at,
        }
    }
}
