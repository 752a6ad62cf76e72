// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use folio_core::domain::{
    category::{CategoryId, CategoryRepository},
    errors::DomainResult,
};
use std::collections::HashSet;

/// 既知の ID 集合だけを「存在する」と答えるカテゴリリポジトリ
pub struct StaticCategoryRepo {
    ids: HashSet<i64>,
}

impl StaticCategoryRepo {
    pub fn with_ids(ids: &[i64]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl CategoryRepository for StaticCategoryRepo {
    async fn exists(&self, id: CategoryId) -> DomainResult<bool> {
        Ok(self.ids.contains(&i64::from(id)))
    }
}
