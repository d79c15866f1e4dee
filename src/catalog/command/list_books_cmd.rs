use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub available_only: bool,
}

impl ListBooksCommandRequest {
    pub fn all() -> Self {
        Self { available_only: false }
    }

    pub fn available() -> Self {
        Self { available_only: true }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = if req.available_only {
            self.catalog_service.available_books().await
        } else {
            self.catalog_service.all_books().await
        };
        res.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
