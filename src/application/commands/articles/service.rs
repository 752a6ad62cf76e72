// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{storage::BlobStore, time::Clock},
        validation::ValidationErrors,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryId, CategoryRepository},
        errors::DomainResult,
    },
};

/// Owns the article lifecycle: row writes plus the image objects they reference.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) blob_store: Arc<dyn BlobStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        blob_store: Arc<dyn BlobStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            blob_store,
            clock,
        }
    }

    /// Ids that cannot exist are reported the same way as ids that do not.
    pub(super) async fn load_article(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Resolves a submitted category id, recording a field error when it does
    /// not point at an existing category.
    pub(super) async fn existing_category(
        &self,
        raw: i64,
        errors: &mut ValidationErrors,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Ok(id) = CategoryId::new(raw) else {
            errors.add("category_id", INVALID_CATEGORY);
            return Ok(None);
        };

        if self.category_repo.exists(id).await? {
            Ok(Some(id))
        } else {
            errors.add("category_id", INVALID_CATEGORY);
            Ok(None)
        }
    }
}

const INVALID_CATEGORY: &str = "The selected category id is invalid.";

pub(super) fn required<T>(
    errors: &mut ValidationErrors,
    field: &str,
    value: DomainResult<T>,
) -> Option<T> {
    match value {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(field, format!("The {} field is required.", field.replace('_', " ")));
            None
        }
    }
}
