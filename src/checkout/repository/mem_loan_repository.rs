use async_trait::async_trait;

use crate::checkout::repository::LoanRepository;
use crate::core::library::LibraryResult;
use crate::utils::mem::{LoanTable, MemoryStore};

#[derive(Debug)]
pub struct MemLoanRepository {
    loans: LoanTable,
}

impl MemLoanRepository {
    pub(crate) fn new(store: &MemoryStore) -> Self {
        Self {
            loans: store.loans(),
        }
    }
}

#[async_trait]
impl LoanRepository for MemLoanRepository {
    async fn add_loan(&self, borrower: &str, book_id: i64) -> LibraryResult<usize> {
        self.loans.write().await
            .entry(borrower.to_string())
            .or_default()
            .push(book_id);
        Ok(1)
    }

    async fn remove_loans(&self, borrower: &str, book_id: i64) -> LibraryResult<usize> {
        let mut loans = self.loans.write().await;
        if let Some(ids) = loans.get_mut(borrower) {
            let before = ids.len();
            ids.retain(|id| *id != book_id);
            return Ok(before - ids.len());
        }
        Ok(0)
    }

    async fn find_by_borrower(&self, borrower: &str) -> LibraryResult<Vec<i64>> {
        Ok(self.loans.read().await.get(borrower).cloned().unwrap_or_default())
    }
}
