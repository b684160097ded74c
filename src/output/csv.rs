//! CSV output formatting for address lists.

use crate::models::{AddressRange, AddressSpan, Block};
use crate::processing::cidr_blocks;

use super::terminal::format_field;

/// Represents a row of address list data for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Row index (0 for gap rows).
    pub cnt: usize,
    /// `range`, `subnet` or `-gap-`.
    pub kind: String,
    /// Block in its own text form.
    pub block: String,
    /// First address.
    pub first: String,
    /// Last address.
    pub last: String,
    /// Number of addresses.
    pub size: String,
}

impl ReportRow {
    fn new(cnt: usize, kind: &str, block: &Block) -> ReportRow {
        ReportRow {
            cnt,
            kind: kind.to_string(),
            block: block.to_string(),
            first: block.first().to_string(),
            last: block.last().to_string(),
            size: block.size().to_string(),
        }
    }
}

/// Build report rows for a collapsed list.
///
/// # Arguments
/// * `blocks` - Collapsed blocks, ordered by family and start
/// * `show_gaps` - Insert rows for the unused subnets between blocks
pub fn report_rows(blocks: &[Block], show_gaps: bool) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    let mut previous: Option<&Block> = None;

    for (i, block) in blocks.iter().enumerate() {
        if let (true, Some(prev)) = (show_gaps, previous) {
            let prev_range = AddressRange::of(prev);
            if matches!(prev_range.precedes(block), Ok(true)) {
                if let (Some(start), Some(end)) =
                    (prev.last().checked_add(1), block.first().checked_sub(1))
                {
                    if let Ok(gap) = AddressRange::new(start, end) {
                        rows.extend(
                            cidr_blocks(&gap)
                                .into_iter()
                                .map(|net| ReportRow::new(0, "-gap-", &Block::Subnet(net))),
                        );
                    }
                }
            }
        }
        rows.push(ReportRow::new(i + 1, block.kind(), block));
        previous = Some(block);
    }

    rows
}

/// Format a single CSV row.
pub fn format_csv_row(row: &ReportRow) -> String {
    format!(
        r#"{cnt},{kind},{block},{first},{last},{size}"#,
        cnt = format_field(row.cnt, 6),
        kind = format_field(&row.kind, 8),
        block = format_field(&row.block, 44),
        first = format_field(&row.first, 24),
        last = format_field(&row.last, 24),
        size = format_field(&row.size, 12),
    )
}

/// Print a collapsed list as CSV to stdout.
///
/// # Arguments
/// * `blocks` - Collapsed blocks to print
/// * `show_gaps` - Also print the unused subnets between blocks
pub fn print_csv(blocks: &[Block], show_gaps: bool) {
    log::info!(
        "#Start print_csv() blocks={} show_gaps={show_gaps}",
        blocks.len()
    );

    println!(
        r#" "cnt",   "kind",                                      "block",                  "first",                   "last",       "size""#
    );
    for row in report_rows(blocks, show_gaps) {
        println!("{}", format_csv_row(&row));
    }
}
