//! Overlapping entry detection.
//!
//! Lists maintained by hand often carry entries that cover each other. Those
//! are harmless for membership tests but usually point at stale entries.

use super::collapse::sort_key;
use crate::models::{AddressRange, Block};

/// Two list entries sharing at least one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapConflict {
    pub first: Block,
    pub second: Block,
    /// True when `first` fully covers `second`.
    pub covers: bool,
}

/// Find every pair of entries that overlap, ordered by start address.
///
/// Adjacent entries do not overlap; entries of different families never do.
pub fn find_overlaps(blocks: &[Block]) -> Vec<OverlapConflict> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(sort_key);

    let mut conflicts = Vec::new();
    for (i, first) in sorted.iter().enumerate() {
        let span = AddressRange::of(first);
        for second in sorted[i + 1..].iter() {
            // Sorted by family then start, so the first miss ends the scan.
            if !matches!(span.overlaps(second), Ok(true)) {
                break;
            }
            conflicts.push(OverlapConflict {
                first: *first,
                second: *second,
                covers: matches!(span.contains(second), Ok(true)),
            });
        }
    }

    conflicts
}

/// Log overlapping entries as warnings.
pub fn log_overlaps(conflicts: &[OverlapConflict]) {
    if conflicts.is_empty() {
        log::info!("No overlapping entries found.");
        return;
    }

    log::warn!("Found {} overlapping entry pair(s):", conflicts.len());
    for conflict in conflicts {
        if conflict.covers {
            log::warn!("  {} covers {}", conflict.first, conflict.second);
        } else {
            log::warn!("  {} overlaps {}", conflict.first, conflict.second);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_address_list;

    fn blocks(entries: &[&str]) -> Vec<Block> {
        entries.iter().map(|e| e.parse().unwrap()).collect()
    }

    #[test]
    fn test_find_overlaps() {
        let conflicts = find_overlaps(&blocks(&[
            "10.0.0.10-10.0.0.20",
            "10.0.0.0/8",
            "10.0.0.15-10.0.0.30",
            "10.0.0.31",
        ]));
        assert_eq!(conflicts.len(), 4);
        assert_eq!(conflicts[0].first.to_string(), "10.0.0.0/8");
        assert!(conflicts.iter().take(3).all(|c| c.covers));
        let last = &conflicts[3];
        assert_eq!(last.first.to_string(), "10.0.0.10-10.0.0.20");
        assert_eq!(last.second.to_string(), "10.0.0.15-10.0.0.30");
        assert!(!last.covers);
    }

    #[test]
    fn test_adjacent_and_cross_family_do_not_overlap() {
        let conflicts = find_overlaps(&blocks(&[
            "10.0.0.0/24",
            "10.0.1.0/24",
            "255.255.255.255",
            "::/0",
        ]));
        assert!(conflicts.is_empty(), "unexpected conflicts: {conflicts:?}");
    }

    #[test]
    fn test_duplicate_entries_cover_each_other() {
        let conflicts = find_overlaps(&blocks(&["192.0.2.0/24", "192.0.2.0/24"]));
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].covers);
    }

    #[test]
    fn test_find_overlaps_from_file() {
        let data = read_address_list(Some("src/tests/test_data/address_list_03.txt"))
            .expect("Error reading address list");
        let conflicts = find_overlaps(&data);
        log_overlaps(&conflicts);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].second.to_string(), "198.51.100.128/25");
        assert!(conflicts[0].covers);
        assert_eq!(conflicts[1].first.to_string(), "203.0.113.0/25");
        assert!(!conflicts[1].covers);
    }
}
