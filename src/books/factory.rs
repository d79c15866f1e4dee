use crate::books::repository::BookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::utils::mem::MemoryStore;

pub(crate) fn create_book_repository(store: &MemoryStore) -> Box<dyn BookRepository> {
    Box::new(MemBookRepository::new(store))
}
