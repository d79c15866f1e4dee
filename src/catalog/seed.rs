use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

// title, author, isbn, publication year
pub const SEED_BOOKS: [(&str, &str, &str, i32); 10] = [
    ("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 1925),
    ("To Kill a Mockingbird", "Harper Lee", "9780060935467", 1960),
    ("1984", "George Orwell", "9780451524935", 1949),
    ("Pride and Prejudice", "Jane Austen", "9781503290563", 1813),
    ("The Catcher in the Rye", "J.D. Salinger", "9780316769488", 1951),
    ("The Hobbit", "J.R.R. Tolkien", "9780547928227", 1937),
    ("Fahrenheit 451", "Ray Bradbury", "9781451673319", 1953),
    ("Moby Dick", "Herman Melville", "9781503280786", 1851),
    ("War and Peace", "Leo Tolstoy", "9781400079988", 1869),
    ("The Odyssey", "Homer", "9780140268867", -800), // approximate year
];

/// Loads the demo books, returning the ids they were given.
pub async fn preload_books(catalog_service: &dyn CatalogService) -> LibraryResult<Vec<i64>> {
    let mut ids = Vec::with_capacity(SEED_BOOKS.len());
    for (title, author, isbn, year) in SEED_BOOKS {
        let book = catalog_service.add_book(title, author, isbn, year).await?;
        ids.push(book.book_id);
    }
    tracing::info!(count = ids.len(), "preloaded books");
    Ok(ids)
}
