//! Address list input.
//!
//! Address lists are plain text with one entry per line:
//! - [`reader`] - reading a list from a file or stdin and parsing its entries

mod reader;

// Re-export public functions
pub use reader::{parse_address_list, read_address_list};
