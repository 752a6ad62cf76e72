// src/application/commands/articles/create.rs
use super::{ArticleCommandService, images, service::required};
use crate::{
    application::{
        dto::{ArticleDto, ImageUpload},
        error::ApplicationResult,
        validation::ValidationErrors,
    },
    domain::{
        article::{ArticleContent, ArticleTitle, ImageName, NewArticle},
        user::UserId,
    },
};
use tracing::info;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub image: Option<ImageUpload>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

/// Missing text fields build as empty strings and are reported by validation.
#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category_id: Option<i64>,
    image: Option<ImageUpload>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category_id(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            category_id: self.category_id,
            image: self.image,
        }
    }
}

impl ArticleCommandService {
    /// Validates, stores the image (if any) under a timestamp-derived name and
    /// inserts the row with the image already set. A failed insert discards the
    /// freshly stored image.
    pub async fn create_article(
        &self,
        author: UserId,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            title,
            content,
            category_id,
            image,
        } = command;

        let mut errors = ValidationErrors::new();
        let title = required(&mut errors, "title", ArticleTitle::new(title));
        let content = required(&mut errors, "content", ArticleContent::new(content));
        let category_id = match category_id {
            Some(raw) => self.existing_category(raw, &mut errors).await?,
            None => None,
        };

        let (Some(title), Some(content)) = (title, content) else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let now = self.clock.now();
        let image = match image.filter(|upload| !upload.is_empty()) {
            Some(upload) => {
                let extension = images::extension_for(&upload);
                let name = ImageName::timestamped(now, extension.as_deref())?;
                self.store_image(&name, upload).await?;
                Some(name)
            }
            None => None,
        };

        let new_article = NewArticle {
            title,
            content,
            category_id,
            user_id: author,
            image: image.clone(),
            created_at: now,
            updated_at: now,
        };

        let created = match self.write_repo.insert(new_article).await {
            Ok(created) => created,
            Err(err) => {
                if let Some(name) = &image {
                    self.discard_image(name).await;
                }
                return Err(err.into());
            }
        };

        info!(
            article_id = %created.id,
            user_id = %created.user_id,
            image = created.image.as_ref().map(ImageName::as_str),
            "article created"
        );
        Ok(created.into())
    }
}
