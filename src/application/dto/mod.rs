pub mod articles;
pub mod pagination;
pub mod serde_time;
pub mod uploads;

pub use articles::ArticleDto;
pub use pagination::Page;
pub use uploads::ImageUpload;
