pub mod books;
pub mod catalog;
pub mod checkout;
pub mod console;
pub mod core;
pub mod gateway;
pub mod utils;
