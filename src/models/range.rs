//! Contiguous address ranges.
//!
//! An [`AddressRange`] is a closed interval `[start, end]` inside one address
//! family. Ordering between ranges is gap-aware: a range only precedes another
//! when at least one address lies strictly between them, so adjacent or
//! overlapping ranges are candidates for merging rather than ordered values.

use super::address::Family;
use super::ip::Ip;
use super::subnet::Subnet;
use crate::error::{AddressError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything that covers a contiguous block of addresses.
pub trait AddressSpan {
    fn first(&self) -> Ip;
    fn last(&self) -> Ip;

    /// CIDR view of the value, if it has one.
    fn as_subnet(&self) -> Option<&Subnet> {
        None
    }

    fn family(&self) -> Family {
        self.first().family()
    }
}

impl AddressSpan for Ip {
    fn first(&self) -> Ip {
        *self
    }

    fn last(&self) -> Ip {
        *self
    }
}

/// Outcome of merging two blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Merged<T> {
    /// The inputs overlap or touch and collapse into one block.
    Joined(T),
    /// The inputs are separated by a gap, lowest first.
    Disjoint(T, T),
}

impl<T> Merged<T> {
    pub fn map<U, F: Fn(T) -> U>(self, f: F) -> Merged<U> {
        match self {
            Merged::Joined(a) => Merged::Joined(f(a)),
            Merged::Disjoint(a, b) => Merged::Disjoint(f(a), f(b)),
        }
    }
}

/// `a` lies at least two addresses above `b`, so something sits between them.
fn gap_above(a: Ip, b: Ip) -> bool {
    a.value() > b.value() && a.value() - b.value() > 1
}

/// Closed interval of addresses within one family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Ip,
    end: Ip,
}

impl AddressRange {
    /// Create `[start, end]`. Both ends must share a family and be ordered.
    pub fn new(start: Ip, end: Ip) -> Result<AddressRange> {
        start.same_family(&end)?;
        if start.value() > end.value() {
            return Err(AddressError::InvalidArgument(format!(
                "range start {start} is above range end {end}"
            )));
        }
        Ok(AddressRange { start, end })
    }

    /// Lift a single address into a one-address range.
    pub fn single(addr: Ip) -> AddressRange {
        AddressRange {
            start: addr,
            end: addr,
        }
    }

    /// The range covered by any span.
    pub fn of<S: AddressSpan + ?Sized>(span: &S) -> AddressRange {
        AddressRange {
            start: span.first(),
            end: span.last(),
        }
    }

    pub fn start(&self) -> Ip {
        self.start
    }

    pub fn end(&self) -> Ip {
        self.end
    }

    /// Number of addresses in the range. Saturates for the full IPv6 space.
    pub fn size(&self) -> u128 {
        (self.end.value() - self.start.value()).saturating_add(1)
    }

    /// True when `x` lies fully inside this range.
    pub fn contains<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<bool> {
        self.start.same_family(&x.first())?;
        Ok(x.first().value() >= self.start.value() && x.last().value() <= self.end.value())
    }

    /// True when at least one address lies above this range and below `x`.
    pub fn precedes<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<bool> {
        self.start.same_family(&x.first())?;
        Ok(gap_above(x.first(), self.end))
    }

    /// True when at least one address lies below this range and above `x`.
    pub fn follows<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<bool> {
        self.start.same_family(&x.first())?;
        Ok(gap_above(self.start, x.last()))
    }

    /// Combine with `x`, either into one range or an ordered disjoint pair.
    ///
    /// ```
    /// use netaddr_summary::models::{AddressRange, Merged};
    /// let a: AddressRange = "10.0.0.0-10.0.0.5".parse().unwrap();
    /// let b: AddressRange = "10.0.0.6-10.0.0.10".parse().unwrap();
    /// assert_eq!(
    ///     a.merge(&b).unwrap(),
    ///     Merged::Joined("10.0.0.0-10.0.0.10".parse::<AddressRange>().unwrap())
    /// );
    /// ```
    pub fn merge<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<Merged<AddressRange>> {
        let other = AddressRange::of(x);
        let merged = if self.precedes(&other)? {
            Merged::Disjoint(*self, other)
        } else if self.follows(&other)? {
            Merged::Disjoint(other, *self)
        } else {
            let start = if other.start.value() < self.start.value() {
                other.start
            } else {
                self.start
            };
            let end = if other.end.value() > self.end.value() {
                other.end
            } else {
                self.end
            };
            Merged::Joined(AddressRange { start, end })
        };
        log::trace!("merge {self} + {other} -> {merged:?}");
        Ok(merged)
    }

    /// True when the two spans share at least one address.
    pub fn overlaps<S: AddressSpan + ?Sized>(&self, x: &S) -> Result<bool> {
        self.start.same_family(&x.first())?;
        Ok(x.first().value() <= self.end.value() && self.start.value() <= x.last().value())
    }
}

impl AddressSpan for AddressRange {
    fn first(&self) -> Ip {
        self.start
    }

    fn last(&self) -> Ip {
        self.end
    }
}

impl From<Ip> for AddressRange {
    fn from(addr: Ip) -> Self {
        AddressRange::single(addr)
    }
}

impl FromStr for AddressRange {
    type Err = AddressError;

    /// Parse `start-end`, or a lone address for a one-address range.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (start, end),
            None => (s, ""),
        };
        let start: Ip = start.parse()?;
        if end.is_empty() {
            return Ok(AddressRange::single(start));
        }
        let end: Ip = end.parse()?;
        AddressRange::new(start, end)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for AddressRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<AddressRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressRange::from_str(&s).map_err(de::Error::custom)
    }
}
