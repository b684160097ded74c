//! Address list processing.
//!
//! Folding and analysis built on the pairwise merge of the models:
//! - [`collapse`] - de-duplication and folding into disjoint blocks
//! - [`gap_finder`] - unused ranges between blocks, split into subnets
//! - [`overlap`] - entries that cover or overlap each other
//! - [`lookup`] - membership tests against a collapsed list

mod collapse;
mod gap_finder;
mod lookup;
mod overlap;

// Re-export public functions
pub use collapse::{collapse, de_duplicate_blocks};
pub use gap_finder::{cidr_blocks, find_gaps};
pub use lookup::AddressList;
pub use overlap::{find_overlaps, log_overlaps, OverlapConflict};
