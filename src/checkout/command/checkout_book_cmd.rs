use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    borrower: String,
    book_id: i64,
}

impl CheckoutBookCommandRequest {
    pub fn new(borrower: &str, book_id: i64) -> Self {
        Self {
            borrower: borrower.to_string(),
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub borrowed: bool,
}

impl CheckoutBookCommandResponse {
    pub fn new(borrowed: bool) -> Self {
        Self {
            borrowed,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.borrower.as_str(), req.book_id)
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
