use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity abstracts one copy of a book in the catalog. Only the loan state
// (book_status, due_at) changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i32,
    pub book_status: BookStatus,
    // only meaningful while the book is checked out
    pub due_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str, isbn: &str, publication_year: i32) -> Self {
        Self {
            book_id,
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
            book_status: BookStatus::Available,
            due_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Case-insensitive substring match on title, author and isbn, or an exact
    // match of the query against the id or the publication year.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) ||
            self.author.to_lowercase().contains(&q) ||
            self.isbn.to_lowercase().contains(&q) ||
            self.book_id.to_string() == q ||
            self.publication_year.to_string() == q
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}
