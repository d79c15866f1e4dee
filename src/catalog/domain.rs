pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, publication_year: i32) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<bool>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookDto>>;
    async fn all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn available_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
}
