//! Family-agnostic IP address.
//!
//! [`Ip`] is a tagged union over [`Ipv4`] and [`Ipv6`]. Parsing tries each
//! family in the order of [`TRIAL_ORDER`], so an input that is valid as both
//! resolves to IPv4.

use super::address::{Family, Ipv4, Ipv6};
use crate::error::{AddressError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The `::ffff:0:0/96` block that embeds IPv4 addresses in IPv6.
pub const V4_MAPPED_PREFIX: u128 = 0xffff_0000_0000;

/// Families tried by [`Ip::from_str`] and [`Ip::from_int`], in order.
pub const TRIAL_ORDER: [Family; 2] = [Family::V4, Family::V6];

/// An IPv4 or IPv6 address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Ip {
    V4(Ipv4),
    V6(Ipv6),
}

impl Ip {
    pub fn family(&self) -> Family {
        match self {
            Ip::V4(_) => Family::V4,
            Ip::V6(_) => Family::V6,
        }
    }

    pub fn bits(&self) -> u8 {
        self.family().bits()
    }

    /// Numeric value widened to `u128`.
    pub fn value(&self) -> u128 {
        match self {
            Ip::V4(ip) => u128::from(ip.value()),
            Ip::V6(ip) => ip.value(),
        }
    }

    /// Build an address of a fixed family from an integer.
    pub fn with_family<N>(family: Family, n: N) -> Result<Ip>
    where
        N: TryInto<u128> + fmt::Display + Copy,
    {
        match family {
            Family::V4 => Ipv4::from_int(n).map(Ip::V4),
            Family::V6 => Ipv6::from_int(n).map(Ip::V6),
        }
    }

    /// Parse text under a fixed family.
    pub fn parse_family(family: Family, s: &str) -> Result<Ip> {
        match family {
            Family::V4 => s.parse::<Ipv4>().map(Ip::V4),
            Family::V6 => s.parse::<Ipv6>().map(Ip::V6),
        }
    }

    /// Build from an integer, trying IPv4 first then IPv6.
    pub fn from_int<N>(n: N) -> Result<Ip>
    where
        N: TryInto<u128> + fmt::Display + Copy,
    {
        TRIAL_ORDER
            .iter()
            .find_map(|family| Ip::with_family(*family, n).ok())
            .ok_or_else(|| AddressError::NoMatchingFamily(n.to_string()))
    }

    pub fn mask(&self, n: u8) -> Result<Ip> {
        match self {
            Ip::V4(ip) => ip.mask(n).map(Ip::V4),
            Ip::V6(ip) => ip.mask(n).map(Ip::V6),
        }
    }

    /// Host bits for a prefix of length `n`, i.e. the inverted netmask.
    pub fn hostmask(family: Family, n: u8) -> Result<u128> {
        match family {
            Family::V4 => Ipv4::netmask(n).map(|m| u128::from(!m)),
            Family::V6 => Ipv6::netmask(n).map(|m| !m),
        }
    }

    /// Convert between families.
    ///
    /// IPv4 maps into `::ffff:0:0/96`; IPv6 converts back only when it lies in
    /// that block.
    ///
    /// ```
    /// use netaddr_summary::models::{Family, Ip};
    /// let v4: Ip = "203.0.113.1".parse().unwrap();
    /// let v6 = v4.convert(Family::V6).unwrap();
    /// assert_eq!(v6.to_string(), "::ffff:203.0.113.1");
    /// assert_eq!(v6.convert(Family::V4).unwrap(), v4);
    /// ```
    pub fn convert(&self, target: Family) -> Result<Ip> {
        let not_convertible = |_| AddressError::NotConvertible {
            address: self.to_string(),
            target,
        };
        match (self, target) {
            (Ip::V4(_), Family::V4) | (Ip::V6(_), Family::V6) => Ok(*self),
            (Ip::V4(ip), Family::V6) => {
                Ip::with_family(target, u128::from(ip.value()) | V4_MAPPED_PREFIX)
                    .map_err(not_convertible)
            }
            (Ip::V6(ip), Family::V4) => {
                Ip::with_family(target, ip.value() ^ V4_MAPPED_PREFIX).map_err(not_convertible)
            }
        }
    }

    /// The address `n` steps above this one, if it stays inside the family.
    pub fn checked_add(&self, n: u128) -> Option<Ip> {
        let value = self.value().checked_add(n)?;
        Ip::with_family(self.family(), value).ok()
    }

    /// The address `n` steps below this one, if it stays above zero.
    pub fn checked_sub(&self, n: u128) -> Option<Ip> {
        let value = self.value().checked_sub(n)?;
        Ip::with_family(self.family(), value).ok()
    }

    /// Fail with [`AddressError::FamilyMismatch`] unless both share a family.
    pub fn same_family(&self, other: &Ip) -> Result<()> {
        if self.family() == other.family() {
            Ok(())
        } else {
            Err(AddressError::FamilyMismatch {
                left: self.family(),
                right: other.family(),
            })
        }
    }
}

impl From<Ipv4> for Ip {
    fn from(ip: Ipv4) -> Self {
        Ip::V4(ip)
    }
}

impl From<Ipv6> for Ip {
    fn from(ip: Ipv6) -> Self {
        Ip::V6(ip)
    }
}

/// Addresses only order within one family.
impl PartialOrd for Ip {
    fn partial_cmp(&self, other: &Ip) -> Option<Ordering> {
        match (self, other) {
            (Ip::V4(a), Ip::V4(b)) => Some(a.cmp(b)),
            (Ip::V6(a), Ip::V6(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl FromStr for Ip {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        TRIAL_ORDER
            .iter()
            .find_map(|family| Ip::parse_family(*family, s).ok())
            .ok_or_else(|| AddressError::NoMatchingFamily(s.to_string()))
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ip::V4(ip) => fmt::Display::fmt(ip, f),
            Ip::V6(ip) => fmt::Display::fmt(ip, f),
        }
    }
}

impl Serialize for Ip {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ip {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ip, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ip::from_str(&s).map_err(de::Error::custom)
    }
}
