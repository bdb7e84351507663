//! Output module for writing collected quotes
//!
//! Quotes are written once, after the crawl, as CSV with the fixed
//! `text,author,tags` header.

mod csv_output;

pub use csv_output::{write_quotes, write_quotes_csv};
