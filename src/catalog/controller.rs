use std::io::{BufRead, Write};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, Flow, Terminal};
use crate::core::library::LibraryResult;

const EMPLOYEE_MENU: &str = "\nLibrary Management System\n\
1. Add a new book\n\
2. Remove a book by ID\n\
3. Find a book by ID\n\
4. Print all books\n\
5. Exit\n";

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, &state.store)
}

/// Runs the employee menu until the user exits or the input closes.
pub async fn handle_employee_menu<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    loop {
        term.clear()?;
        term.write(EMPLOYEE_MENU)?;
        let choice = match term.prompt("Enter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(Flow::Closed),
        };
        let flow = match choice.trim() {
            "1" => add_book(state, term).await?,
            "2" => remove_book(state, term).await?,
            "3" => find_book_by_id(state, term).await?,
            "4" => print_all_books(state, term).await?,
            "5" => {
                term.say("Exiting the library system.")?;
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

pub(crate) async fn add_book<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    let Some(title) = term.prompt("Enter title: ")? else { return Ok(Flow::Closed) };
    let Some(author) = term.prompt("Enter author: ")? else { return Ok(Flow::Closed) };
    let Some(isbn) = term.prompt("Enter ISBN: ")? else { return Ok(Flow::Closed) };
    let Some(year) = term.prompt_number::<i32>("Enter publication year: ")? else { return Ok(Flow::Closed) };

    let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str(), year);
    match AddBookCommand::new(build_service(state)).execute(req).await {
        Ok(res) => {
            term.say(format!("Book added with ID: {}", res.book.book_id).as_str())?;
            Ok(Flow::Continue)
        }
        Err(err) => term.report(err),
    }
}

pub(crate) async fn remove_book<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    let Some(id) = term.prompt_number::<i64>("Enter book ID to remove: ")? else { return Ok(Flow::Closed) };
    match RemoveBookCommand::new(build_service(state)).execute(RemoveBookCommandRequest::new(id)).await {
        Ok(res) if res.removed => term.say("Book removed.")?,
        Ok(_) => term.say("Book not found.")?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

pub(crate) async fn find_book_by_id<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    let Some(id) = term.prompt_number::<i64>("Enter book ID to find: ")? else { return Ok(Flow::Closed) };
    match GetBookCommand::new(build_service(state)).execute(GetBookCommandRequest::new(id)).await {
        Ok(res) => match res.book {
            Some(book) => term.print_book(&book)?,
            None => term.say("Book not found.")?,
        },
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}

pub(crate) async fn print_all_books<R: BufRead, W: Write>(
    state: &AppState,
    term: &mut Terminal<R, W>) -> LibraryResult<Flow> {
    match ListBooksCommand::new(build_service(state)).execute(ListBooksCommandRequest::all()).await {
        Ok(res) => term.print_books(&res.books)?,
        Err(err) => return term.report(err),
    }
    Ok(Flow::Continue)
}
