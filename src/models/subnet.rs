//! CIDR subnets layered on top of [`AddressRange`].

use super::ip::Ip;
use super::range::{AddressRange, AddressSpan, Merged};
use crate::error::{AddressError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CIDR block: a network address and prefix length, plus the range they span.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: Ip,
    prefix: u8,
    range: AddressRange,
}

impl Subnet {
    /// Build the block containing `address` with the given prefix length.
    /// Host bits of `address` are cleared.
    pub fn new(address: Ip, prefix: u8) -> Result<Subnet> {
        let network = address.mask(prefix)?;
        let hostmask = Ip::hostmask(network.family(), prefix)?;
        let broadcast = Ip::with_family(network.family(), network.value() | hostmask)?;
        Ok(Subnet {
            network,
            prefix,
            range: AddressRange::new(network, broadcast)?,
        })
    }

    /// Host route: a single address with a full-width prefix.
    pub fn host(address: Ip) -> Subnet {
        Subnet {
            network: address,
            prefix: address.bits(),
            range: AddressRange::single(address),
        }
    }

    pub fn network(&self) -> Ip {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn range(&self) -> AddressRange {
        self.range
    }

    pub fn size(&self) -> u128 {
        self.range.size()
    }

    /// Containment with CIDR rules.
    ///
    /// A subnet only holds another subnet that is strictly more specific and
    /// whose network address falls in this block. Everything else is checked
    /// as plain range containment.
    pub fn contains<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<bool> {
        self.network.same_family(&x.first())?;
        match x.as_subnet() {
            Some(other) => Ok(other.prefix > self.prefix && self.range.contains(&other.network)?),
            None => self.range.contains(x),
        }
    }

    /// Merge keeping CIDR structure when one side subsumes the other.
    ///
    /// Returns `self` or `x` when one covers the other, otherwise the plain
    /// range merge of both.
    pub fn merge(&self, x: &Block) -> Result<Merged<Block>> {
        if self.contains(x)? || x.as_subnet() == Some(self) {
            return Ok(Merged::Joined(Block::Subnet(*self)));
        }
        if x.contains(self)? {
            return Ok(Merged::Joined(*x));
        }
        log::debug!("{self} and {x} do not nest, merging as plain ranges");
        Ok(self.range.merge(x)?.map(Block::Range))
    }
}

impl AddressSpan for Subnet {
    fn first(&self) -> Ip {
        self.range.start()
    }

    fn last(&self) -> Ip {
        self.range.end()
    }

    fn as_subnet(&self) -> Option<&Subnet> {
        Some(self)
    }
}

impl FromStr for Subnet {
    type Err = AddressError;

    /// Parse `address/prefix`. Without a prefix the result is a host route.
    ///
    /// ```
    /// use netaddr_summary::models::Subnet;
    /// let net: Subnet = "10.1.2.3/8".parse().unwrap();
    /// assert_eq!(net.to_string(), "10.0.0.0/8");
    /// assert!("10.0.0.0/33".parse::<Subnet>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let (address, prefix) = match s.split_once('/') {
            Some((address, prefix)) => (address, Some(prefix)),
            None => (s, None),
        };
        let address: Ip = address.parse()?;
        match prefix {
            Some(prefix) => {
                let prefix: u8 = prefix.parse().map_err(|_| {
                    AddressError::InvalidArgument(format!("invalid prefix length '{prefix}'"))
                })?;
                Subnet::new(address, prefix)
            }
            None => Ok(Subnet::host(address)),
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_str(&s).map_err(de::Error::custom)
    }
}

/// Either a plain range or a CIDR subnet, as found in an address list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Block {
    Range(AddressRange),
    Subnet(Subnet),
}

impl Block {
    /// Containment using the rules of the underlying type.
    pub fn contains<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<bool> {
        match self {
            Block::Range(r) => r.contains(x),
            Block::Subnet(s) => s.contains(x),
        }
    }

    /// Merge two blocks, keeping a subnet whenever it subsumes the other side.
    pub fn merge(&self, x: &Block) -> Result<Merged<Block>> {
        match self {
            Block::Subnet(s) => s.merge(x),
            Block::Range(r) => match x {
                // Let the subnet side decide so a covering subnet survives.
                Block::Subnet(s) if s.contains(r)? => Ok(Merged::Joined(*x)),
                _ => Ok(r.merge(x)?.map(Block::Range)),
            },
        }
    }

    pub fn range(&self) -> AddressRange {
        AddressRange::of(self)
    }

    pub fn size(&self) -> u128 {
        self.range().size()
    }

    /// Short label for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Range(_) => "range",
            Block::Subnet(_) => "subnet",
        }
    }
}

impl AddressSpan for Block {
    fn first(&self) -> Ip {
        match self {
            Block::Range(r) => r.first(),
            Block::Subnet(s) => s.first(),
        }
    }

    fn last(&self) -> Ip {
        match self {
            Block::Range(r) => r.last(),
            Block::Subnet(s) => s.last(),
        }
    }

    fn as_subnet(&self) -> Option<&Subnet> {
        match self {
            Block::Range(_) => None,
            Block::Subnet(s) => Some(s),
        }
    }
}

impl From<AddressRange> for Block {
    fn from(range: AddressRange) -> Self {
        Block::Range(range)
    }
}

impl From<Subnet> for Block {
    fn from(subnet: Subnet) -> Self {
        Block::Subnet(subnet)
    }
}

impl FromStr for Block {
    type Err = AddressError;

    /// Text with a `/` is a subnet, anything else a range.
    fn from_str(s: &str) -> Result<Self> {
        if s.contains('/') {
            s.parse().map(Block::Subnet)
        } else {
            s.parse().map(Block::Range)
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Range(r) => fmt::Display::fmt(r, f),
            Block::Subnet(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Block::from_str(&s).map_err(de::Error::custom)
    }
}
