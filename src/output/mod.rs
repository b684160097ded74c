//! Output formatting for address lists.
//!
//! This module handles formatting and outputting collapsed lists:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON summary
//! - [`terminal`] - Terminal output with colors and membership answers

mod csv;
mod json;
mod terminal;

pub use csv::{format_csv_row, print_csv, report_rows, ReportRow};
pub use json::{print_json, summary_json, Summary};
pub use terminal::{format_field, lookup_all, print_lookup, print_text, LookupResult};
