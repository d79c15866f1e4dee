use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    metadata: HashMap<String, String>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            book_repository,
            events_publisher,
        }
    }

    async fn query(&self, predicate: HashMap<String, String>) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(&predicate).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, publication_year: i32) -> LibraryResult<BookDto> {
        let id = self.book_repository.next_id().await;
        let book = BookEntity::new(id, title, author, isbn, publication_year);
        self.book_repository.create(&book).await?;
        let dto = BookDto::from(&book);
        tracing::info!(book_id = id, title, "added book");
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", "books", id.to_string().as_str(), &self.metadata, &dto)?).await?;
        Ok(dto)
    }

    // loans that still reference the id are left alone, lookups skip them
    async fn remove_book(&self, id: i64) -> LibraryResult<bool> {
        let removed = self.book_repository.delete(id).await? > 0;
        if removed {
            tracing::info!(book_id = id, "removed book");
            self.events_publisher.publish(&DomainEvent::deleted(
                "book_removed", "books", id.to_string().as_str(), &self.metadata, &id)?).await?;
        }
        Ok(removed)
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.update(&BookEntity::from(book)).await?;
        let updated = self.book_repository.get(book.book_id).await.map(|b| BookDto::from(&b))?;
        self.events_publisher.publish(&DomainEvent::updated(
            "book_updated", "books", book.book_id.to_string().as_str(), &self.metadata, &updated)?).await?;
        Ok(updated)
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookDto>> {
        match self.book_repository.get(id).await {
            Ok(book) => Ok(Some(BookDto::from(&book))),
            Err(LibraryError::NotFound { .. }) => {
                tracing::debug!(book_id = id, "book not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn all_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.query(HashMap::new()).await
    }

    async fn available_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.query(HashMap::from([
            ("book_status".to_string(), BookStatus::Available.to_string())])).await
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        self.query(HashMap::from([("q".to_string(), query.to_string())])).await
    }
}
