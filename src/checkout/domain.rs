use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    // lends an available book, false when it is missing or already lent
    async fn checkout(&self, borrower: &str, book_id: i64) -> LibraryResult<bool>;
    // takes back a lent book, false when it is missing or was not lent
    async fn returned(&self, borrower: &str, book_id: i64) -> LibraryResult<bool>;
    async fn borrowed_books(&self, borrower: &str) -> LibraryResult<Vec<BookDto>>;
}
