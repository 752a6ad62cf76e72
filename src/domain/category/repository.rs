use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Categories are owned elsewhere; articles only need to know whether one exists.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists(&self, id: CategoryId) -> DomainResult<bool>;
}
