use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    borrower: String,
    book_id: i64,
}

impl ReturnBookCommandRequest {
    pub fn new(borrower: &str, book_id: i64) -> Self {
        Self {
            borrower: borrower.to_string(),
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub returned: bool,
}

impl ReturnBookCommandResponse {
    pub fn new(returned: bool) -> Self {
        Self {
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.borrower.as_str(), req.book_id)
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
