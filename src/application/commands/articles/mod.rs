// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod images;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use images::MAX_IMAGE_KILOBYTES;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
