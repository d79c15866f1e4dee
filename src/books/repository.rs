pub mod mem_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // allocates the next book id, ids are never handed out twice
    async fn next_id(&self) -> i64;
}
