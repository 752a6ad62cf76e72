use super::{ArticleCommandService, images, service::required};
use crate::{
    application::{
        dto::{ArticleDto, ImageUpload},
        error::ApplicationResult,
        validation::ValidationErrors,
    },
    domain::article::{ArticleContent, ArticleTitle, ArticleUpdate, ImageName},
};
use tracing::{debug, info};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub image: Option<ImageUpload>,
}

impl ArticleCommandService {
    /// Overwrites title, content and category. A supplied image is stored under
    /// a fresh name and replaces the reference; the previous object stays in the
    /// blob store.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            category_id,
            image,
        } = command;

        let mut article = self.load_article(id).await?;

        let mut errors = ValidationErrors::new();
        let title = required(&mut errors, "title", ArticleTitle::new(title));
        if let Some(title) = &title {
            if title.char_count() > ArticleTitle::MAX_CHARS {
                errors.add(
                    "title",
                    format!(
                        "The title may not be greater than {} characters.",
                        ArticleTitle::MAX_CHARS
                    ),
                );
            }
        }
        let content = required(&mut errors, "content", ArticleContent::new(content));
        let category_id = match category_id {
            Some(raw) => self.existing_category(raw, &mut errors).await?,
            None => {
                errors.add("category_id", "The category id field is required.");
                None
            }
        };
        let image = image.filter(|upload| !upload.is_empty());
        if let Some(upload) = &image {
            images::check_image(upload, &mut errors);
        }

        let (Some(title), Some(content), Some(category_id)) = (title, content, category_id) else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let now = self.clock.now();
        article.revise(title, content, Some(category_id), now);

        let stored = match image {
            Some(upload) => {
                let extension = images::extension_for(&upload);
                let name = ImageName::random(extension.as_deref())?;
                self.store_image(&name, upload).await?;
                if let Some(previous) = article.replace_image(name.clone(), now) {
                    debug!(
                        article_id = %article.id,
                        previous = %previous,
                        "previous image left in storage"
                    );
                }
                Some(name)
            }
            None => None,
        };

        let updated = match self.write_repo.update(ArticleUpdate::from(&article)).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(name) = &stored {
                    self.discard_image(name).await;
                }
                return Err(err.into());
            }
        };

        info!(
            article_id = %updated.id,
            image_replaced = stored.is_some(),
            "article updated"
        );
        Ok(updated.into())
    }
}
