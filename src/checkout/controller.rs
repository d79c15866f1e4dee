use std::io::{BufRead, Write};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::list_borrowed_cmd::{ListBorrowedCommand, ListBorrowedCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, Flow, Terminal};
use crate::core::library::LibraryResult;

const BORROWER_MENU: &str = "\nBorrower System\n\
1. Search for a book\n\
2. Borrow a book\n\
3. Return a book\n\
4. List all available books\n\
5. List my borrowed books\n\
6. Exit\n";

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, &state.store)
}

fn build_catalog_service(state: &AppState) -> Box<dyn CatalogService> {
    crate::catalog::factory::create_catalog_service(&state.config, &state.store)
}

/// Asks for the borrower's name, then runs the borrower menu for that name.
pub async fn handle_borrower_menu<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    let borrower = match term.prompt("Enter your name: ")? {
        Some(name) => name,
        None => return Ok(Flow::Closed),
    };
    tracing::debug!(borrower = borrower.as_str(), "borrower session started");
    loop {
        term.clear()?;
        term.write(BORROWER_MENU)?;
        let choice = match term.prompt("Enter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(Flow::Closed),
        };
        let flow = match choice.trim() {
            "1" => search_books(state, term).await?,
            "2" => checkout_book(state, term, borrower.as_str()).await?,
            "3" => return_book(state, term, borrower.as_str()).await?,
            "4" => print_available_books(state, term).await?,
            "5" => print_borrowed_books(state, term, borrower.as_str()).await?,
            "6" => {
                term.say("Exiting the borrowing system.")?;
                return Ok(Flow::Exit);
            }
            _ => {
                term.say("Invalid choice. Please try again.")?;
                Flow::Continue
            }
        };
        if flow == Flow::Closed || term.pause()? == Flow::Closed {
            return Ok(Flow::Closed);
        }
    }
}

pub(crate) async fn search_books<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    let Some(query) = term.prompt("Enter search query (title, author, ISBN, ID, or publication year): ")? else {
        return Ok(Flow::Closed);
    };
    let req = SearchBooksCommandRequest::new(query.as_str());
    match SearchBooksCommand::new(build_catalog_service(state)).execute(req).await {
        Ok(res) if res.books.is_empty() => term.say("No books found matching the query.")?,
        Ok(res) => term.print_books(&res.books)?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

pub(crate) async fn checkout_book<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>,
    borrower: &str) -> LibraryResult<Flow> {
    let Some(id) = term.prompt_number::<i64>("Enter book ID to borrow: ")? else { return Ok(Flow::Closed) };
    let req = CheckoutBookCommandRequest::new(borrower, id);
    match CheckoutBookCommand::new(build_service(state)).execute(req).await {
        Ok(res) if res.borrowed => term.say("Book borrowed successfully.")?,
        Ok(_) => term.say("Book is not available or not found.")?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

pub(crate) async fn return_book<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>,
    borrower: &str) -> LibraryResult<Flow> {
    let Some(id) = term.prompt_number::<i64>("Enter book ID to return: ")? else { return Ok(Flow::Closed) };
    let req = ReturnBookCommandRequest::new(borrower, id);
    match ReturnBookCommand::new(build_service(state)).execute(req).await {
        Ok(res) if res.returned => term.say("Book returned successfully.")?,
        Ok(_) => term.say("Book was not borrowed or not found.")?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

pub(crate) async fn print_available_books<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    match ListBooksCommand::new(build_catalog_service(state)).execute(ListBooksCommandRequest::available()).await {
        Ok(res) => term.print_books(&res.books)?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

pub(crate) async fn print_borrowed_books<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>,
    borrower: &str) -> LibraryResult<Flow> {
    match ListBorrowedCommand::new(build_service(state)).execute(ListBorrowedCommandRequest::new(borrower)).await {
        Ok(res) if res.books.is_empty() => term.say(format!("No books borrowed by {}.", borrower).as_str())?,
        Ok(res) => term.print_books(&res.books)?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::catalog::factory::create_catalog_service;
    use crate::catalog::seed::preload_books;
    use crate::checkout::controller::handle_borrower_menu;
    use crate::core::controller::{AppState, Flow, Terminal};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;

    async fn seeded_state() -> AppState {
        let mut config = Configuration::new("test");
        config.clear_screen = false;
        let state = AppState::new(config);
        preload_books(create_catalog_service(&state.config, &state.store).as_ref()).await.expect("should preload");
        state
    }

    async fn run(state: &AppState, input: &str) -> (Flow, String) {
        let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        let flow = handle_borrower_menu(state, &mut term).await.expect("should run menu");
        (flow, String::from_utf8(term.into_output()).expect("utf8 output"))
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let state = seeded_state().await;
        let (flow, out) = run(&state, "ann\n1\n1949\n\n1\nDickens\n\n6\n").await;
        assert_eq!(Flow::Exit, flow);
        assert!(out.contains("Book ID: 3\nTitle: 1984\n"));
        assert_eq!(1, out.matches("Book ID: ").count());
        assert!(out.contains("No books found matching the query."));
        assert!(out.ends_with("Exiting the borrowing system.\n"));
    }

    #[tokio::test]
    async fn test_should_borrow_and_return() {
        let state = seeded_state().await;
        let (_, out) = run(&state, "ann\n2\n3\n\n2\n3\n\n5\n\n3\n3\n\n3\n3\n\n5\n\n6\n").await;
        assert!(out.contains("Book borrowed successfully."));
        assert!(out.contains("Book is not available or not found."));
        assert!(out.contains("Book ID: 3\nTitle: 1984\nAuthor: George Orwell\nISBN: 9780451524935\nPublication Year: 1949\nAvailable: No\nDue Date: "));
        assert!(out.contains("Book returned successfully."));
        assert!(out.contains("Book was not borrowed or not found."));
        assert!(out.contains("No books borrowed by ann."));

        let book = create_catalog_service(&state.config, &state.store).find_book_by_id(3).await
            .expect("should find").expect("should return book");
        assert_eq!(BookStatus::Available, book.book_status);
    }

    #[tokio::test]
    async fn test_should_list_available_books() {
        let state = seeded_state().await;
        let (_, out) = run(&state, "bob\n2\n1\n\n4\n\n6\n").await;
        let listing = out.split("Book borrowed successfully.").nth(1).expect("should have listing");
        assert_eq!(9, listing.matches("Book ID: ").count());
        assert!(!listing.contains("Book ID: 1\n"));
    }

    #[tokio::test]
    async fn test_should_keep_names_with_spaces() {
        let state = seeded_state().await;
        let (flow, out) = run(&state, "Ann Marie\n5\n").await;
        assert_eq!(Flow::Closed, flow);
        assert!(out.contains("No books borrowed by Ann Marie."));
    }

    #[tokio::test]
    async fn test_should_report_bad_loan_period() {
        let mut state = seeded_state().await;
        state.config.book_loan_days = 1_000_000_000_000;
        let (flow, out) = run(&state, "ann\n2\n3\n\n6\n").await;
        assert_eq!(Flow::Exit, flow);
        assert!(out.contains("Error: invalid request: loan period of 1000000000000 days is out of range"));
        assert!(!out.contains("Book borrowed successfully."));
    }
}
