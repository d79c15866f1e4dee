use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::mem::{BookTable, MemoryStore};

#[derive(Debug)]
pub struct MemBookRepository {
    store: MemoryStore,
    books: BookTable,
}

impl MemBookRepository {
    pub(crate) fn new(store: &MemoryStore) -> Self {
        Self {
            store: store.clone(),
            books: store.books(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.contains_key(&entity.book_id) {
            return Err(LibraryError::duplicate_key(format!("book {} already exists", entity.book_id).as_str()));
        }
        books.insert(entity.book_id, entity.clone());
        Ok(1)
    }

    // the stored version must still match the entity's version, like a conditional write
    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let existing = books.get_mut(&entity.book_id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", entity.book_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::unavailable(
                format!("book {} was modified, expected version {} but found {}",
                        entity.book_id, entity.version, existing.version).as_str(),
                Some("ConditionalCheckFailed".to_string()), true));
        }
        *existing = BookEntity {
            version: entity.version + 1,
            updated_at: Utc::now().naive_utc(),
            ..entity.clone()
        };
        Ok(1)
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.books.read().await.get(&id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        Ok(self.books.write().await.remove(&id).map(|_| 1).unwrap_or(0))
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let status = predicate.get("book_status").map(|s| BookStatus::from(s.to_string()));
        let text = predicate.get("q");
        let books = self.books.read().await;
        Ok(books.values()
            .filter(|b| status.map(|s| b.book_status == s).unwrap_or(true))
            .filter(|b| text.map(|q| b.matches(q)).unwrap_or(true))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn next_id(&self) -> i64 {
        self.store.allocate_book_id()
    }
}
