use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct ListBorrowedCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ListBorrowedCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBorrowedCommandRequest {
    borrower: String,
}

impl ListBorrowedCommandRequest {
    pub fn new(borrower: &str) -> Self {
        Self {
            borrower: borrower.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBorrowedCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBorrowedCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBorrowedCommandRequest, ListBorrowedCommandResponse> for ListBorrowedCommand {
    async fn execute(&self, req: ListBorrowedCommandRequest) -> Result<ListBorrowedCommandResponse, CommandError> {
        self.checkout_service.borrowed_books(req.borrower.as_str())
            .await.map_err(CommandError::from).map(ListBorrowedCommandResponse::new)
    }
}
