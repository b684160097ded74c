//! Folding address lists into their minimal form.
//!
//! Pairwise merge only ever combines two blocks; this module sorts a whole
//! list and folds it so the result is ordered, disjoint and non-adjacent.

use crate::models::{AddressSpan, Block, Family, Merged};
use itertools::Itertools;

/// Sort key: family first, then start, then end.
pub(crate) fn sort_key(block: &Block) -> (Family, u128, u128) {
    (block.family(), block.first().value(), block.last().value())
}

/// Sort and remove exact duplicates.
///
/// # Returns
/// The sorted, de-duplicated blocks and the number of duplicates dropped
pub fn de_duplicate_blocks(blocks: &[Block]) -> (Vec<Block>, usize) {
    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(sort_key);
    sorted.dedup();
    let dropped = blocks.len() - sorted.len();
    if dropped > 0 {
        log::info!("Dropped {dropped} duplicate entries");
    }
    (sorted, dropped)
}

/// Collapse a list of ranges and subnets.
///
/// Blocks are sorted, de-duplicated and merged left to right. Overlapping or
/// adjacent blocks join; a subnet survives whenever it covers its neighbour.
/// IPv4 and IPv6 blocks never merge with each other, so no merge here can
/// fail with a family mismatch.
///
/// # Returns
/// Disjoint blocks ordered by family and start address
pub fn collapse(blocks: &[Block]) -> Vec<Block> {
    let (sorted, _) = de_duplicate_blocks(blocks);

    let collapsed: Vec<Block> = sorted
        .into_iter()
        .coalesce(|a, b| {
            if a.family() != b.family() {
                return Err((a, b));
            }
            match a.merge(&b) {
                Ok(Merged::Joined(joined)) => Ok(joined),
                Ok(Merged::Disjoint(..)) | Err(_) => Err((a, b)),
            }
        })
        .collect();

    log::debug!(
        "Collapsed {} entries into {} blocks",
        blocks.len(),
        collapsed.len()
    );
    collapsed
}
