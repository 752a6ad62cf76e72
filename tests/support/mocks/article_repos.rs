// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use folio_core::domain::{
    article::{
        Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository,
        NewArticle,
    },
    errors::{DomainError, DomainResult},
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// 読み書き両方を実装するインメモリ記事リポジトリ。ID は 1 からの連番。
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Default::default()
        }
    }

    /// 以降の insert / update を Persistence エラーで失敗させる
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 成功・失敗を問わず呼ばれた書き込み回数
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id.0 == id)
            .cloned()
    }

    fn check_writable(&self) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("simulated database outage".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.check_writable()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let article = Article {
            id: ArticleId::new(id)?,
            title: new.title,
            content: new.content,
            category_id: new.category_id,
            user_id: new.user_id,
            image: new.image,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.rows.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.title = update.title;
        row.content = update.content;
        row.category_id = update.category_id;
        row.image = update.image;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|article| article.id != id);
        if rows.len() == before {
            Err(DomainError::NotFound("article not found".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id.0))
    }

    async fn list_latest(&self, page: u32, per_page: u32) -> DomainResult<(Vec<Article>, u64)> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        let total = rows.len() as u64;
        let offset = (page.max(1) - 1) as usize * per_page as usize;
        let items = rows
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .collect();
        Ok((items, total))
    }
}
