//! Membership tests against an address list.

use super::collapse::collapse;
use crate::models::{AddressSpan, Block, Ip};

/// A collapsed address list answering allow/deny style membership queries.
#[derive(Debug, Clone, Default)]
pub struct AddressList {
    blocks: Vec<Block>,
}

impl AddressList {
    /// Collapse `blocks` into a searchable list.
    pub fn new(blocks: &[Block]) -> AddressList {
        AddressList {
            blocks: collapse(blocks),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of addresses covered across both families, saturating.
    pub fn size(&self) -> u128 {
        self.blocks
            .iter()
            .fold(0u128, |total, b| total.saturating_add(b.size()))
    }

    /// The block holding `addr`, if any.
    pub fn matching(&self, addr: &Ip) -> Option<&Block> {
        let key = (addr.family(), addr.value());
        // First block starting above `addr`; the candidate sits just before it.
        let idx = self
            .blocks
            .partition_point(|b| (b.family(), b.first().value()) <= key);
        let candidate = self.blocks.get(idx.checked_sub(1)?)?;
        match candidate.contains(addr) {
            Ok(true) => Some(candidate),
            _ => None,
        }
    }

    pub fn contains(&self, addr: &Ip) -> bool {
        self.matching(addr).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_address_list;

    fn ip(s: &str) -> Ip {
        s.parse().unwrap()
    }

    fn list() -> AddressList {
        let data = read_address_list(Some("src/tests/test_data/address_list_01.txt"))
            .expect("Error reading address list");
        AddressList::new(&data)
    }

    #[test]
    fn test_collapsed_blocks() {
        let list = list();
        let blocks: Vec<String> = list.blocks().iter().map(|b| b.to_string()).collect();
        assert_eq!(
            blocks,
            vec![
                "10.0.0.0/8",
                "172.16.0.0/12",
                "192.168.1.0-192.168.1.127",
                "192.168.1.200-192.168.1.200",
                "2001:db8::-2001:db8:1:ffff:ffff:ffff:ffff:ffff",
            ]
        );
        assert_eq!(list.len(), 5);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_matching() {
        let list = list();
        assert_eq!(
            list.matching(&ip("10.20.30.40")).map(|b| b.to_string()),
            Some("10.0.0.0/8".to_string())
        );
        assert!(list.contains(&ip("192.168.1.127")));
        assert!(!list.contains(&ip("192.168.1.128")));
        assert!(list.contains(&ip("192.168.1.200")));
        assert!(!list.contains(&ip("9.255.255.255")));
        assert!(list.contains(&ip("2001:db8:1::42")));
        assert!(!list.contains(&ip("2001:db8:2::")));
        assert!(!list.contains(&ip("::ffff:10.0.0.1")));
    }

    #[test]
    fn test_empty_list() {
        let list = AddressList::new(&[]);
        assert!(list.is_empty());
        assert!(!list.contains(&ip("10.0.0.1")));
        assert_eq!(list.size(), 0);
    }

    #[test]
    fn test_size() {
        let blocks: Vec<Block> = vec![
            "10.0.0.0/24".parse().unwrap(),
            "10.0.1.0-10.0.1.9".parse().unwrap(),
        ];
        let list = AddressList::new(&blocks);
        assert_eq!(list.size(), 266);
    }
}
