//! Fixed-width IPv4 and IPv6 address values.
//!
//! Both types wrap the address as an unsigned integer so masking and range
//! arithmetic are plain integer operations.

use crate::error::{AddressError, Result};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Bit width of an IPv4 address.
pub const IPV4_BITS: u8 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_BITS: u8 = 128;

/// Address family tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => IPV4_BITS,
            Family::V6 => IPV6_BITS,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

fn check_width(family: Family, n: u8) -> Result<()> {
    if n > family.bits() {
        Err(AddressError::InvalidArgument(format!(
            "prefix length {n} exceeds {family} width of {} bits",
            family.bits()
        )))
    } else {
        Ok(())
    }
}

/// Convert any integer to `u128`, reporting negatives as overflow.
fn widen<N>(family: Family, n: N) -> Result<u128>
where
    N: TryInto<u128> + fmt::Display + Copy,
{
    n.try_into().map_err(|_| AddressError::Overflow {
        family,
        value: n.to_string(),
    })
}

/// IPv4 address stored as a `u32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4(u32);

impl Ipv4 {
    pub const BITS: u8 = IPV4_BITS;
    pub const FAMILY: Family = Family::V4;

    /// Build from any integer. Negative values and values wider than 32 bits
    /// are rejected with [`AddressError::Overflow`].
    pub fn from_int<N>(n: N) -> Result<Ipv4>
    where
        N: TryInto<u128> + fmt::Display + Copy,
    {
        let value = widen(Self::FAMILY, n)?;
        u32::try_from(value)
            .map(Ipv4)
            .map_err(|_| AddressError::Overflow {
                family: Self::FAMILY,
                value: n.to_string(),
            })
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Network mask with the `n` most significant bits set.
    pub fn netmask(n: u8) -> Result<u32> {
        check_width(Self::FAMILY, n)?;
        Ok(u32::MAX.checked_shl(u32::from(Self::BITS - n)).unwrap_or(0))
    }

    /// Keep the first `n` bits, zero the rest.
    ///
    /// ```
    /// use netaddr_summary::models::Ipv4;
    /// let ip: Ipv4 = "192.168.1.57".parse().unwrap();
    /// assert_eq!(ip.mask(24).unwrap().to_string(), "192.168.1.0");
    /// ```
    pub fn mask(self, n: u8) -> Result<Ipv4> {
        Ok(Ipv4(self.0 & Self::netmask(n)?))
    }
}

impl From<Ipv4Addr> for Ipv4 {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4(u32::from(addr))
    }
}

impl From<Ipv4> for Ipv4Addr {
    fn from(ip: Ipv4) -> Self {
        Ipv4Addr::from(ip.0)
    }
}

impl FromStr for Ipv4 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4Addr::from_str(s)
            .map(Ipv4::from)
            .map_err(|_| AddressError::InvalidLiteral {
                family: Self::FAMILY,
                literal: s.to_string(),
            })
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(*self))
    }
}

/// IPv6 address stored as a `u128`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv6(u128);

impl Ipv6 {
    pub const BITS: u8 = IPV6_BITS;
    pub const FAMILY: Family = Family::V6;

    /// Build from any integer. Only negative values can fail here.
    pub fn from_int<N>(n: N) -> Result<Ipv6>
    where
        N: TryInto<u128> + fmt::Display + Copy,
    {
        widen(Self::FAMILY, n).map(Ipv6)
    }

    pub fn value(self) -> u128 {
        self.0
    }

    pub fn netmask(n: u8) -> Result<u128> {
        check_width(Self::FAMILY, n)?;
        Ok(u128::MAX.checked_shl(u32::from(Self::BITS - n)).unwrap_or(0))
    }

    pub fn mask(self, n: u8) -> Result<Ipv6> {
        Ok(Ipv6(self.0 & Self::netmask(n)?))
    }
}

impl From<Ipv6Addr> for Ipv6 {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6(u128::from(addr))
    }
}

impl From<Ipv6> for Ipv6Addr {
    fn from(ip: Ipv6) -> Self {
        Ipv6Addr::from(ip.0)
    }
}

impl FromStr for Ipv6 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv6Addr::from_str(s)
            .map(Ipv6::from)
            .map_err(|_| AddressError::InvalidLiteral {
                family: Self::FAMILY,
                literal: s.to_string(),
            })
    }
}

impl fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv6Addr::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_netmask() {
        assert_eq!(Ipv4::netmask(0).unwrap(), 0x00000000);
        assert_eq!(Ipv4::netmask(8).unwrap(), 0xFF000000);
        assert_eq!(Ipv4::netmask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(Ipv4::netmask(32).unwrap(), 0xFFFFFFFF);
        assert!(matches!(
            Ipv4::netmask(33),
            Err(AddressError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ipv4_mask() {
        let ip: Ipv4 = "192.168.1.42".parse().unwrap();
        assert_eq!(ip.mask(24).unwrap().to_string(), "192.168.1.0");
        assert_eq!(ip.mask(16).unwrap().to_string(), "192.168.0.0");
        assert_eq!(ip.mask(32).unwrap(), ip);
        assert_eq!(ip.mask(0).unwrap(), Ipv4::default());
        assert_eq!(ip.mask(20).unwrap().mask(20).unwrap(), ip.mask(20).unwrap());
    }

    #[test]
    fn test_ipv6_mask() {
        let ip: Ipv6 = "2001:db8:abcd:12::1".parse().unwrap();
        assert_eq!(ip.mask(48).unwrap().to_string(), "2001:db8:abcd::");
        assert_eq!(ip.mask(128).unwrap(), ip);
        assert_eq!(ip.mask(0).unwrap().to_string(), "::");
        assert!(ip.mask(129).is_err());
    }

    #[test]
    fn test_ipv4_from_int() {
        assert_eq!(Ipv4::from_int(0x0A000001u32).unwrap().to_string(), "10.0.0.1");
        assert_eq!(
            Ipv4::from_int(u64::from(u32::MAX)).unwrap().to_string(),
            "255.255.255.255"
        );
        assert!(matches!(
            Ipv4::from_int(1u64 << 32),
            Err(AddressError::Overflow { .. })
        ));
        let err = Ipv4::from_int(-1i64).unwrap_err();
        assert_eq!(err.to_string(), "value out of range for IPv4: -1");
    }

    #[test]
    fn test_ipv6_from_int() {
        assert_eq!(Ipv6::from_int(1u8).unwrap().to_string(), "::1");
        assert_eq!(Ipv6::from_int(u128::MAX).unwrap().value(), u128::MAX);
        assert!(Ipv6::from_int(-5i128).is_err());
    }

    #[test]
    fn test_parse_invalid_literal() {
        let err = "10.0.0.256".parse::<Ipv4>().unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidLiteral {
                family: Family::V4,
                literal: "10.0.0.256".to_string()
            }
        );
        assert!("::1".parse::<Ipv4>().is_err());
        assert!("10.0.0.1".parse::<Ipv6>().is_err());
        assert!("2001:db8::g".parse::<Ipv6>().is_err());
    }

    #[test]
    fn test_round_trip_text() {
        for text in ["0.0.0.0", "10.1.2.3", "255.255.255.255"] {
            assert_eq!(text.parse::<Ipv4>().unwrap().to_string(), text);
        }
        for text in ["::", "::1", "2001:db8::8a2e:370:7334", "::ffff:203.0.113.1"] {
            assert_eq!(text.parse::<Ipv6>().unwrap().to_string(), text);
        }
        // Non-canonical input normalises but parses back to the same value.
        let ip: Ipv6 = "2001:0DB8:0000:0000:0000:0000:0000:0001".parse().unwrap();
        assert_eq!(ip.to_string(), "2001:db8::1");
        assert_eq!(ip.to_string().parse::<Ipv6>().unwrap(), ip);
    }

    #[test]
    fn test_ordering() {
        let a: Ipv4 = "10.0.0.1".parse().unwrap();
        let b: Ipv4 = "10.0.0.2".parse().unwrap();
        assert!(a < b);
        assert_eq!(a, "10.0.0.1".parse::<Ipv4>().unwrap());
        assert_eq!(Family::V4.bits(), 32);
        assert_eq!(Family::V6.bits(), 128);
    }
}
