pub mod command;
pub mod csv;

pub use command::{split_args, Command};
pub use csv::CsvDocument;
