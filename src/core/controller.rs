use std::io::{BufRead, Write};
use std::str::FromStr;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::utils::date::to_local_display;
use crate::utils::mem::MemoryStore;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: MemoryStore,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
            store: MemoryStore::new(),
        }
    }
}

// Flow tells a menu loop what to do after an action
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    Continue,
    Exit,
    // input reached end of file
    Closed,
}

/// Line-oriented console used by the menus. Reading stops cleanly at end of input.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    pub fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> LibraryResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    pub fn clear(&mut self) -> LibraryResult<()> {
        if self.clear_screen {
            self.write(CLEAR_SCREEN)?;
        }
        Ok(())
    }

    // None when the input is closed, bytes that are not utf-8 are replaced
    pub fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        self.write(text)?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim_end_matches(['\r', '\n']).to_string()))
    }

    // asks again until the answer parses
    pub fn prompt_number<T: FromStr>(&mut self, text: &str) -> LibraryResult<Option<T>> {
        loop {
            match self.prompt(text)? {
                None => return Ok(None),
                Some(line) => match line.trim().parse::<T>() {
                    Ok(n) => return Ok(Some(n)),
                    Err(_) => self.say("Invalid number. Please try again.")?,
                },
            }
        }
    }

    pub fn pause(&mut self) -> LibraryResult<Flow> {
        match self.prompt("Press Enter to continue...")? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Closed),
        }
    }

    pub fn report(&mut self, err: CommandError) -> LibraryResult<Flow> {
        tracing::warn!(error = %err, "command failed");
        self.say(format!("Error: {}", err).as_str())?;
        Ok(Flow::Continue)
    }

    pub fn print_book(&mut self, book: &BookDto) -> LibraryResult<()> {
        self.write(book_details(book).as_str())
    }

    pub fn print_books(&mut self, books: &[BookDto]) -> LibraryResult<()> {
        for book in books {
            self.say(format!("Book ID: {}", book.book_id).as_str())?;
            self.print_book(book)?;
            self.say("")?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn book_details(book: &BookDto) -> String {
    let mut text = format!("Title: {}\nAuthor: {}\nISBN: {}\nPublication Year: {}\nAvailable: {}\n",
                           book.title, book.author, book.isbn, book.publication_year,
                           if book.is_available() { "Yes" } else { "No" });
    if !book.is_available() {
        if let Some(due_at) = book.due_at {
            text.push_str(format!("Due Date: {}\n", to_local_display(due_at)).as_str());
        }
    }
    text
}
