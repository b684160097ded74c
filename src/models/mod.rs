//! Address value types.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] and [`Ipv6`] - fixed-width address values
//! - [`Ip`] - family-agnostic address with IPv4/IPv6 conversion
//! - [`AddressRange`] - contiguous range with gap-aware ordering and merging
//! - [`Subnet`] - CIDR block that degrades to a range when merging breaks it
//! - [`Block`] - a range or a subnet, as read from an address list

mod address;
mod ip;
mod range;
mod subnet;

// Re-export public types
pub use address::{Family, Ipv4, Ipv6, IPV4_BITS, IPV6_BITS};
pub use ip::{Ip, TRIAL_ORDER, V4_MAPPED_PREFIX};
pub use range::{AddressRange, AddressSpan, Merged};
pub use subnet::{Block, Subnet};
