use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i32,
    pub book_status: BookStatus,
    pub due_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(book_id: i64, title: &str, author: &str, isbn: &str, publication_year: i32) -> BookDto {
        BookDto::from(&BookEntity::new(book_id, title, author, isbn, publication_year))
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.book_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            publication_year: other.publication_year,
            book_status: other.book_status,
            due_at: other.due_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            publication_year: other.publication_year,
            book_status: other.book_status,
            due_at: other.due_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
