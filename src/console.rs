use std::io::{BufRead, Write};
use crate::catalog::controller::handle_employee_menu;
use crate::catalog::factory::create_catalog_service;
use crate::catalog::seed::preload_books;
use crate::checkout::controller::handle_borrower_menu;
use crate::core::controller::{AppState, Flow, Terminal};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const MAIN_MENU: &str = "\nWelcome to the Library\n\
1. Enter as a person who wants to borrow a book\n\
2. Enter as an employee\n";

/// Builds the in-memory catalog, loads the demo books if configured, and runs
/// the session on stdin/stdout until the input is closed.
pub async fn start(config: Configuration) -> LibraryResult<()> {
    let state = AppState::new(config);
    if state.config.preload_books {
        preload_books(create_catalog_service(&state.config, &state.store).as_ref()).await?;
    }
    tracing::info!(branch_id = state.config.branch_id.as_str(), "library session started");

    let stdin = std::io::stdin();
    let mut term = Terminal::new(stdin.lock(), std::io::stdout(), state.config.clear_screen);
    run(&state, &mut term).await?;

    tracing::info!("library session ended");
    Ok(())
}

/// Main menu loop. Returns once the input reaches end of file.
pub async fn run<R: BufRead, W: Write>(state: &AppState, term: &mut Terminal<R, W>) -> LibraryResult<()> {
    loop {
        term.clear()?;
        term.write(MAIN_MENU)?;
        let choice = match term.prompt("Enter your choice: ")? {
            Some(choice) => choice,
            None => break,
        };
        let flow = match choice.trim() {
            "1" => handle_borrower_menu(state, term).await?,
            "2" => handle_employee_menu(state, term).await?,
            _ => {
                term.say("Invalid choice. Please try again.")?;
                term.pause()?
            }
        };
        if flow == Flow::Closed {
            break;
        }
    }
    // leave the cursor on a fresh line
    term.say("")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::catalog::factory::create_catalog_service;
    use crate::catalog::seed::preload_books;
    use crate::console::run;
    use crate::core::controller::{AppState, Terminal};
    use crate::core::domain::Configuration;

    async fn session(input: &str) -> String {
        session_bytes(input.as_bytes()).await
    }

    async fn session_bytes(input: &[u8]) -> String {
        let mut config = Configuration::new("test");
        config.clear_screen = false;
        config.publish_events = false;
        let state = AppState::new(config);
        preload_books(create_catalog_service(&state.config, &state.store).as_ref()).await.expect("should preload");

        let mut term = Terminal::new(Cursor::new(input.to_vec()), Vec::new(), false);
        run(&state, &mut term).await.expect("should run session");
        String::from_utf8(term.into_output()).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_end_on_closed_input() {
        let out = session("").await;
        assert!(out.contains("Welcome to the Library\n"));
        assert_eq!(1, out.matches("Enter your choice: ").count());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_choice() {
        let out = session("x\n\n3\n\n").await;
        assert_eq!(2, out.matches("Invalid choice. Please try again.").count());
        assert_eq!(3, out.matches("Welcome to the Library").count());
    }

    #[tokio::test]
    async fn test_should_continue_after_invalid_utf8() {
        let mut input = b"1\nann\n1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"\n6\n");
        let out = session_bytes(&input).await;
        assert!(out.contains("No books found matching the query."));
        assert!(out.contains("Exiting the borrowing system."));
    }

    #[tokio::test]
    async fn test_should_share_catalog_between_roles() {
        // employee adds a book, a borrower then finds and borrows it
        let input = "2\n1\nDune\nFrank Herbert\n9780441013593\n1965\n\n5\n\
                     1\nann\n1\ndune\n\n2\n11\n\n5\n\n6\n\
                     2\n3\n11\n\n5\n";
        let out = session(input).await;
        assert!(out.contains("Book added with ID: 11"));
        assert!(out.contains("Book ID: 11\nTitle: Dune\n"));
        assert!(out.contains("Book borrowed successfully."));
        assert!(out.contains("Title: Dune\nAuthor: Frank Herbert\nISBN: 9780441013593\nPublication Year: 1965\nAvailable: No\nDue Date: "));
        assert!(out.contains("Exiting the borrowing system."));
        assert!(out.contains("Exiting the library system."));
    }
}
