// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::ApplicationResult;
use tracing::{info, warn};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deletes the referenced image first, then the row. The row goes even when
    /// the image cannot be removed.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let article = self.load_article(command.id).await?;

        if let Some(image) = &article.image {
            match self.blob_store.delete(image).await {
                Ok(true) => {}
                Ok(false) => warn!(
                    article_id = %article.id,
                    image = %image,
                    "article image already missing from storage"
                ),
                Err(err) => warn!(
                    article_id = %article.id,
                    image = %image,
                    error = %err,
                    "failed to delete article image; deleting row anyway"
                ),
            }
        }

        self.write_repo.delete(article.id).await?;
        info!(article_id = %article.id, "article deleted");
        Ok(())
    }
}
