// tests/support/mocks/storage.rs
use async_trait::async_trait;
use bytes::Bytes;
use folio_core::{
    application::{ApplicationResult, error::ApplicationError, ports::storage::BlobStore},
    domain::article::ImageName,
};
use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

/// インメモリ画像ストア。put / delete の失敗を個別に注入できる。
#[derive(Default)]
pub struct InMemoryBlobStore {
    objects: Mutex<BTreeMap<String, Bytes>>,
    fail_puts: AtomicBool,
    fail_deletes: AtomicBool,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.lock().unwrap().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn seed(&self, name: &str, bytes: &'static [u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), Bytes::from_static(bytes));
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, name: &ImageName, bytes: Bytes) -> ApplicationResult<()> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(ApplicationError::storage("simulated disk full"));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(name.as_str().to_string(), bytes);
        Ok(())
    }

    async fn delete(&self, name: &ImageName) -> ApplicationResult<bool> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApplicationError::storage("simulated permission denied"));
        }
        Ok(self.objects.lock().unwrap().remove(name.as_str()).is_some())
    }

    async fn get(&self, name: &ImageName) -> ApplicationResult<Option<Bytes>> {
        Ok(self.objects.lock().unwrap().get(name.as_str()).cloned())
    }
}
