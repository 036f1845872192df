#![warn(clippy::uninlined_format_args)]

mod csv_source;

pub use csv_source::CsvExpenseSource;
