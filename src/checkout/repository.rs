pub mod mem_loan_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait LoanRepository: Sync + Send {
    // appends the book to the borrower's loans
    async fn add_loan(&self, borrower: &str, book_id: i64) -> LibraryResult<usize>;

    // drops every occurrence of the book from the borrower's loans
    async fn remove_loans(&self, borrower: &str, book_id: i64) -> LibraryResult<usize>;

    // book ids on loan to the borrower in the order they were borrowed
    async fn find_by_borrower(&self, borrower: &str) -> LibraryResult<Vec<i64>>;
}
