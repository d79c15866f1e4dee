use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: bool) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::utils::mem::MemoryStore;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let config = Configuration::new("test");
        let store = MemoryStore::new();
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&config, &store));
        let remove_cmd = RemoveBookCommand::new(factory::create_catalog_service(&config, &store));

        let res = add_cmd.execute(AddBookCommandRequest::new("title", "author", "isbn", 1999))
            .await.expect("should add book");
        let removed = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.book_id)).await.expect("should remove book");
        assert!(removed.removed);
        let removed = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.book_id)).await.expect("should run");
        assert!(!removed.removed);
    }
}
