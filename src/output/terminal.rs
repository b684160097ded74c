//! Terminal output utilities.
//!
//! Provides formatting helpers and the coloured plain-text report.

use super::csv::report_rows;
use crate::models::{Block, Ip};
use crate::processing::AddressList;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print a collapsed list as aligned text, gaps highlighted.
pub fn print_text(blocks: &[Block], show_gaps: bool) {
    for row in report_rows(blocks, show_gaps) {
        if row.cnt == 0 {
            println!("{:>6} {:<44} {}", "", row.block.on_red(), row.size);
        } else {
            println!("{:>6} {:<44} {} ({})", row.cnt, row.block, row.size, row.kind);
        }
    }
}

/// One membership answer: the queried literal and the block holding it.
pub type LookupResult = (String, Result<Option<Block>, String>);

/// Test each literal against `list`, reporting parse failures per literal.
pub fn lookup_all(list: &AddressList, literals: &[String]) -> Vec<LookupResult> {
    literals
        .iter()
        .map(|literal| {
            let answer = literal
                .parse::<Ip>()
                .map(|ip| list.matching(&ip).copied())
                .map_err(|e| e.to_string());
            (literal.clone(), answer)
        })
        .collect()
}

/// Print membership answers.
pub fn print_lookup(results: &[LookupResult]) {
    for (literal, answer) in results {
        match answer {
            Ok(Some(block)) => println!("{literal} {} in {block}", "listed".green()),
            Ok(None) => println!("{literal} {}", "not listed".yellow()),
            Err(e) => {
                log::warn!("lookup of '{literal}' failed: {e}");
                println!("{literal} {} {e}", "error".on_red());
            }
        }
    }
}
