pub mod date;
pub mod mem;
pub mod trace;
