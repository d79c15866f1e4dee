use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;

pub(crate) type BookTable = Arc<RwLock<HashMap<i64, BookEntity>>>;
pub(crate) type LoanTable = Arc<RwLock<HashMap<String, Vec<i64>>>>;

// MemoryStore is the process-wide storage handle. Clones share the same tables,
// so every repository built from one store sees the same catalog.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    books: BookTable,
    loans: LoanTable,
    next_book_id: Arc<AtomicI64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(HashMap::new())),
            loans: Arc::new(RwLock::new(HashMap::new())),
            next_book_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub(crate) fn books(&self) -> BookTable {
        self.books.clone()
    }

    pub(crate) fn loans(&self) -> LoanTable {
        self.loans.clone()
    }

    pub(crate) fn allocate_book_id(&self) -> i64 {
        self.next_book_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
