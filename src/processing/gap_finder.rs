//! Gap finding between address blocks.
//!
//! Identifies unused address ranges between listed blocks and splits them into
//! the fewest CIDR subnets.

use super::collapse::sort_key;
use crate::models::{AddressRange, AddressSpan, Block, Family, Ip, Subnet};
use std::collections::HashMap;

/// Find the ranges not covered by any block, between the lowest and highest
/// listed address of each family.
///
/// The input need not be sorted or collapsed.
pub fn find_gaps(blocks: &[Block]) -> Vec<AddressRange> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(sort_key);

    // Highest address covered so far, per family.
    let mut reach: HashMap<Family, Ip> = HashMap::new();
    let mut gaps = Vec::new();

    for block in &sorted {
        let family = block.family();
        match reach.get(&family).copied() {
            Some(covered) if block.first().value() > covered.value() => {
                if let (Some(start), Some(end)) =
                    (covered.checked_add(1), block.first().checked_sub(1))
                {
                    if start.value() <= end.value() {
                        log::trace!("gap {start}-{end} before {block}");
                        // Same family and ordered by construction.
                        if let Ok(gap) = AddressRange::new(start, end) {
                            gaps.push(gap);
                        }
                    }
                }
                reach.insert(family, block.last());
            }
            Some(covered) if block.last().value() <= covered.value() => {}
            _ => {
                reach.insert(family, block.last());
            }
        }
    }

    gaps
}

/// Largest prefix-aligned block that starts at `start` and ends at or below `end`.
///
/// The block is limited by the alignment of `start` (its trailing zero bits)
/// and by the number of addresses left in the range.
fn find_biggest_subnet(start: Ip, end: Ip) -> u8 {
    let bits = start.bits();
    let alignment = start.value().trailing_zeros().min(u32::from(bits));
    let span = end.value() - start.value();
    // Largest k with 2^k - 1 <= span.
    let fits = if span == u128::MAX {
        128
    } else {
        u128::BITS - 1 - (span + 1).leading_zeros()
    };
    let host_bits = alignment.min(fits);
    debug_assert!(
        host_bits <= u32::from(bits),
        "host_bits[{host_bits}] > {bits} should never happen."
    );
    bits - host_bits as u8
}

/// Split a range into the fewest CIDR subnets that cover it exactly.
///
/// ```
/// use netaddr_summary::processing::cidr_blocks;
/// let gap = "10.0.0.5-10.0.0.16".parse().unwrap();
/// let nets: Vec<String> = cidr_blocks(&gap).iter().map(|n| n.to_string()).collect();
/// assert_eq!(nets, ["10.0.0.5/32", "10.0.0.6/31", "10.0.0.8/29", "10.0.0.16/32"]);
/// ```
pub fn cidr_blocks(range: &AddressRange) -> Vec<Subnet> {
    let mut subnets = Vec::new();
    let mut next = Some(range.start());

    while let Some(start) = next {
        if start.value() > range.end().value() {
            break;
        }
        let prefix = find_biggest_subnet(start, range.end());
        // The prefix never exceeds the family width.
        let Ok(subnet) = Subnet::new(start, prefix) else {
            break;
        };
        next = subnet.last().checked_add(1);
        subnets.push(subnet);
    }

    subnets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Ip {
        s.parse().unwrap()
    }

    fn blocks(entries: &[&str]) -> Vec<Block> {
        entries.iter().map(|e| e.parse().unwrap()).collect()
    }

    fn texts<T: ToString>(items: &[T]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_find_biggest_subnet() {
        // 10.0.0.0 is aligned to any mask
        assert_eq!(24, find_biggest_subnet(ip("10.0.0.0"), ip("10.0.0.255")));
        assert_eq!(25, find_biggest_subnet(ip("10.0.0.0"), ip("10.0.0.254")));
        // 10.11.12.16 has 4 trailing zeros, so the block is at most /28
        assert_eq!(28, find_biggest_subnet(ip("10.11.12.16"), ip("10.11.15.255")));
        // 10.11.12.0 has 10 trailing zeros
        assert_eq!(22, find_biggest_subnet(ip("10.11.12.0"), ip("10.11.255.255")));
        assert_eq!(0, find_biggest_subnet(ip("0.0.0.0"), ip("255.255.255.255")));
        assert_eq!(0, find_biggest_subnet(ip("::"), ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff")));
        assert_eq!(32, find_biggest_subnet(ip("10.6.2.81"), ip("10.6.8.0")));
    }

    #[test]
    fn test_find_biggest_subnet_alignment() {
        // 10.6.2.80 ends in 0101_0000, so it can only start a /28 or smaller
        let prefix = find_biggest_subnet(ip("10.6.2.80"), ip("10.6.7.255"));
        assert_eq!(28, prefix, "10.6.2.80 can only be /28 or smaller due to alignment");
        let gap_subnet = Subnet::new(ip("10.6.2.80"), prefix).unwrap();
        assert_eq!(gap_subnet.network(), ip("10.6.2.80"));
    }

    #[test]
    fn test_cidr_blocks() {
        let range: AddressRange = "192.168.1.128-192.168.1.199".parse().unwrap();
        assert_eq!(
            texts(&cidr_blocks(&range)),
            vec!["192.168.1.128/26", "192.168.1.192/29"]
        );
        let all: AddressRange = "0.0.0.0-255.255.255.255".parse().unwrap();
        assert_eq!(texts(&cidr_blocks(&all)), vec!["0.0.0.0/0"]);
        let top: AddressRange = "255.255.255.254-255.255.255.255".parse().unwrap();
        assert_eq!(texts(&cidr_blocks(&top)), vec!["255.255.255.254/31"]);
    }

    #[test]
    fn test_cidr_blocks_cover_range_exactly() {
        let range: AddressRange = "10.0.0.3-10.0.3.17".parse().unwrap();
        let nets = cidr_blocks(&range);
        let total: u128 = nets.iter().map(|n| n.size()).sum();
        assert_eq!(total, range.size());
        assert_eq!(nets.first().unwrap().first(), range.start());
        assert_eq!(nets.last().unwrap().last(), range.end());
    }

    #[test]
    fn test_find_gaps() {
        let input = blocks(&[
            "192.168.1.200",
            "192.168.1.0-192.168.1.99",
            "192.168.1.100-192.168.1.127",
            "10.0.0.0/8",
            "10.20.0.0/16",
            "2001:db8::/48",
            "2001:db8:2::/48",
        ]);
        assert_eq!(
            texts(&find_gaps(&input)),
            vec![
                "11.0.0.0-192.168.0.255",
                "192.168.1.128-192.168.1.199",
                "2001:db8:1::-2001:db8:1:ffff:ffff:ffff:ffff:ffff"
            ]
        );
    }

    #[test]
    fn test_find_gaps_none() {
        assert!(find_gaps(&blocks(&["10.0.0.0/24", "10.0.1.0/24"])).is_empty());
        assert!(find_gaps(&blocks(&["10.0.0.0/24"])).is_empty());
        assert!(find_gaps(&[]).is_empty());
    }
}
