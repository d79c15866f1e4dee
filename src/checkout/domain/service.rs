use std::collections::HashMap;
use chrono::{Duration, NaiveDateTime, Utc};
use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::repository::LoanRepository;
use crate::core::domain::{Configuration, MAX_LOAN_DAYS};
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    book_loan_days: i64,
    loan_repository: Box<dyn LoanRepository>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, loan_repository: Box<dyn LoanRepository>,
                      catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_loan_days: config.book_loan_days,
            loan_repository,
            catalog_service,
            events_publisher,
        }
    }

    // writes the new loan state, None if someone else changed or removed the book first
    async fn save_loan_state(&self, book: &BookDto) -> LibraryResult<Option<BookDto>> {
        match self.catalog_service.update_book(book).await {
            Ok(updated) => Ok(Some(updated)),
            Err(err) if err.retryable() => {
                tracing::debug!(book_id = book.book_id, error = %err, "book changed during loan update");
                Ok(None)
            }
            Err(LibraryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn due_date(&self) -> LibraryResult<NaiveDateTime> {
        if !(1..=MAX_LOAN_DAYS).contains(&self.book_loan_days) {
            return Err(LibraryError::validation(
                format!("loan period of {} days is out of range", self.book_loan_days).as_str(),
                Some("LoanDays".to_string())));
        }
        Duration::try_days(self.book_loan_days)
            .and_then(|days| Utc::now().naive_utc().checked_add_signed(days))
            .ok_or_else(|| LibraryError::validation("due date is out of range", Some("LoanDays".to_string())))
    }

    fn metadata(&self, borrower: &str) -> HashMap<String, String> {
        HashMap::from([
            ("branch_id".to_string(), self.branch_id.to_string()),
            ("borrower".to_string(), borrower.to_string()),
        ])
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self, borrower: &str, book_id: i64) -> LibraryResult<bool> {
        let mut book = match self.catalog_service.find_book_by_id(book_id).await? {
            Some(book) if book.is_available() => book,
            _ => {
                tracing::debug!(book_id, borrower, "book is not available or not found");
                return Ok(false);
            }
        };
        book.book_status = BookStatus::CheckedOut;
        book.due_at = Some(self.due_date()?);
        let book = match self.save_loan_state(&book).await? {
            Some(book) => book,
            None => return Ok(false),
        };
        self.loan_repository.add_loan(borrower, book_id).await?;
        tracing::info!(book_id, borrower, due_at = ?book.due_at, "book checked out");
        self.events_publisher.publish(&DomainEvent::added(
            "book_checkout", "checkout", book_id.to_string().as_str(), &self.metadata(borrower), &book)?).await?;
        Ok(true)
    }

    // any borrower name may return a lent book; only that name's loan list is touched
    async fn returned(&self, borrower: &str, book_id: i64) -> LibraryResult<bool> {
        let mut book = match self.catalog_service.find_book_by_id(book_id).await? {
            Some(book) if !book.is_available() => book,
            _ => {
                tracing::debug!(book_id, borrower, "book was not borrowed or not found");
                return Ok(false);
            }
        };
        book.book_status = BookStatus::Available;
        book.due_at = None;
        let book = match self.save_loan_state(&book).await? {
            Some(book) => book,
            None => return Ok(false),
        };
        let removed = self.loan_repository.remove_loans(borrower, book_id).await?;
        tracing::info!(book_id, borrower, removed, "book returned");
        self.events_publisher.publish(&DomainEvent::deleted(
            "book_returned", "checkout", book_id.to_string().as_str(), &self.metadata(borrower), &book)?).await?;
        Ok(true)
    }

    async fn borrowed_books(&self, borrower: &str) -> LibraryResult<Vec<BookDto>> {
        let ids = self.loan_repository.find_by_borrower(borrower).await?;
        let mut books = Vec::with_capacity(ids.len());
        for id in ids {
            // removed books stay in the loan list, skip them
            if let Some(book) = self.catalog_service.find_book_by_id(id).await? {
                books.push(book);
            }
        }
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::utils::mem::MemoryStore;

    fn new_services() -> (Box<dyn CatalogService>, Box<dyn CheckoutService>) {
        let config = Configuration::new("test");
        let store = MemoryStore::new();
        (create_catalog_service(&config, &store), factory::create_checkout_service(&config, &store))
    }

    #[tokio::test]
    async fn test_should_checkout_and_returned() {
        let (catalog_svc, checkout_svc) = new_services();
        let book = catalog_svc.add_book("title", "author", "isbn", 2000).await.expect("should add book");

        let before = Utc::now().naive_utc();
        assert!(checkout_svc.checkout("ann", book.book_id).await.expect("should checkout"));
        let after = Utc::now().naive_utc();

        let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");
        assert_eq!(BookStatus::CheckedOut, loaded.book_status);
        let due_at = loaded.due_at.expect("should have due date");
        assert!(due_at >= before + Duration::days(14));
        assert!(due_at <= after + Duration::days(14));

        let borrowed = checkout_svc.borrowed_books("ann").await.expect("should list");
        assert_eq!(vec![book.book_id], borrowed.iter().map(|b| b.book_id).collect::<Vec<i64>>());

        assert!(checkout_svc.returned("ann", book.book_id).await.expect("should return"));
        let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");
        assert_eq!(BookStatus::Available, loaded.book_status);
        assert_eq!(None, loaded.due_at);
        assert!(checkout_svc.borrowed_books("ann").await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_checkout_twice() {
        let (catalog_svc, checkout_svc) = new_services();
        let book = catalog_svc.add_book("title", "author", "isbn", 2000).await.expect("should add book");

        assert!(checkout_svc.checkout("ann", book.book_id).await.expect("should checkout"));
        let first = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");

        assert!(!checkout_svc.checkout("bob", book.book_id).await.expect("should run"));
        let second = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");
        assert_eq!(first, second);
        assert!(checkout_svc.borrowed_books("bob").await.expect("should list").is_empty());
        assert_eq!(1, checkout_svc.borrowed_books("ann").await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_not_checkout_missing_book() {
        let (_, checkout_svc) = new_services();
        assert!(!checkout_svc.checkout("ann", 42).await.expect("should run"));
        assert!(checkout_svc.borrowed_books("ann").await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_return_available_book() {
        let (catalog_svc, checkout_svc) = new_services();
        let lent = catalog_svc.add_book("lent", "author", "isbn", 2000).await.expect("should add book");
        let shelved = catalog_svc.add_book("shelved", "author", "isbn", 2000).await.expect("should add book");
        assert!(checkout_svc.checkout("ann", lent.book_id).await.expect("should checkout"));

        assert!(!checkout_svc.returned("ann", shelved.book_id).await.expect("should run"));
        assert!(!checkout_svc.returned("ann", 42).await.expect("should run"));
        let borrowed = checkout_svc.borrowed_books("ann").await.expect("should list");
        assert_eq!(vec![lent.book_id], borrowed.iter().map(|b| b.book_id).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_should_return_under_any_name() {
        let (catalog_svc, checkout_svc) = new_services();
        let book = catalog_svc.add_book("title", "author", "isbn", 2000).await.expect("should add book");
        assert!(checkout_svc.checkout("ann", book.book_id).await.expect("should checkout"));

        assert!(checkout_svc.returned("bob", book.book_id).await.expect("should return"));
        let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");
        assert_eq!(BookStatus::Available, loaded.book_status);
        // ann's loan list is left as it was
        assert_eq!(1, checkout_svc.borrowed_books("ann").await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_skip_removed_books() {
        let (catalog_svc, checkout_svc) = new_services();
        let kept = catalog_svc.add_book("kept", "author", "isbn", 2000).await.expect("should add book");
        let removed = catalog_svc.add_book("removed", "author", "isbn", 2000).await.expect("should add book");
        assert!(checkout_svc.checkout("ann", removed.book_id).await.expect("should checkout"));
        assert!(checkout_svc.checkout("ann", kept.book_id).await.expect("should checkout"));

        assert!(catalog_svc.remove_book(removed.book_id).await.expect("should remove"));
        let borrowed = checkout_svc.borrowed_books("ann").await.expect("should list");
        assert_eq!(vec![kept.book_id], borrowed.iter().map(|b| b.book_id).collect::<Vec<i64>>());
        assert!(!checkout_svc.returned("ann", removed.book_id).await.expect("should run"));
    }

    #[tokio::test]
    async fn test_should_use_configured_loan_days() {
        let mut config = Configuration::new("test");
        config.book_loan_days = 3;
        config.publish_events = false;
        let store = MemoryStore::new();
        let catalog_svc = create_catalog_service(&config, &store);
        let checkout_svc = factory::create_checkout_service(&config, &store);
        let book = catalog_svc.add_book("title", "author", "isbn", 2000).await.expect("should add book");

        assert!(checkout_svc.checkout("ann", book.book_id).await.expect("should checkout"));
        let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");
        let due_at = loaded.due_at.expect("should have due date");
        assert!(due_at <= Utc::now().naive_utc() + Duration::days(3));
        assert!(due_at > Utc::now().naive_utc() + Duration::days(2));
    }

    #[tokio::test]
    async fn test_should_reject_out_of_range_loan_days() {
        for days in [1_000_000_000_000, 0, -5] {
            let mut config = Configuration::new("test");
            config.book_loan_days = days;
            let store = MemoryStore::new();
            let catalog_svc = create_catalog_service(&config, &store);
            let checkout_svc = factory::create_checkout_service(&config, &store);
            let book = catalog_svc.add_book("title", "author", "isbn", 2000).await.expect("should add book");

            let res = checkout_svc.checkout("ann", book.book_id).await;
            assert!(matches!(res, Err(LibraryError::Validation { .. })));
            let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should find").expect("should return book");
            assert_eq!(BookStatus::Available, loaded.book_status);
            assert!(checkout_svc.borrowed_books("ann").await.expect("should list").is_empty());
        }
    }
}
