use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, publication_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str(), req.publication_year)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::utils::mem::MemoryStore;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), &MemoryStore::new());
        let cmd = AddBookCommand::new(svc);

        let first = cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "9780441013593", 1965))
            .await.expect("should add book");
        let second = cmd.execute(AddBookCommandRequest::new("Emma", "Jane Austen", "9780141439587", 1815))
            .await.expect("should add book");
        assert_eq!(1, first.book.book_id);
        assert_eq!(2, second.book.book_id);
        assert_eq!("Emma", second.book.title.as_str());
    }
}
