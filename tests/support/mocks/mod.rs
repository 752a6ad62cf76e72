// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod category_repo;
pub mod storage;
pub mod time;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::{FixedClock, fixed_now};

// 記事リポジトリ
pub use article_repos::InMemoryArticleRepo;

// カテゴリリポジトリ
pub use category_repo::StaticCategoryRepo;

// 画像ストレージ
pub use storage::InMemoryBlobStore;
