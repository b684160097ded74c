//! Error types for address parsing, conversion and range arithmetic.

use crate::models::Family;
use thiserror::Error;

/// Errors raised by the address, range and subnet types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid literal for {family}: '{literal}'")]
    InvalidLiteral { family: Family, literal: String },

    #[error("value out of range for {family}: {value}")]
    Overflow { family: Family, value: String },

    #[error("invalid address: '{0}'")]
    NoMatchingFamily(String),

    #[error("{address} is not convertible to {target}")]
    NotConvertible { address: String, target: Family },

    #[error("address family mismatch: {left} vs {right}")]
    FamilyMismatch { left: Family, right: Family },

    /// Caller broke a precondition (start > end, prefix wider than the family).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AddressError>;
