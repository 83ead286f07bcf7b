//! # Error Types
//!
//! Construction failures and comparison failures are kept as two distinct
//! types so callers can tell bad input apart from a misuse of `equals`.

use thiserror::Error;

/// Malformed or untyped input at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Dotted-decimal text with the wrong octet count or an octet > 255.
    #[error("Invalid IPv4 address: {input:?}")]
    InvalidIpv4 { input: String },

    /// Colon-hex text with bad groups, a wrong group count, or more than one `::`.
    #[error("Invalid IPv6 address: {input:?}")]
    InvalidIpv6 { input: String },

    /// CIDR suffix that is not a number or lies outside `[0, max]`.
    #[error("Invalid prefix length: {prefix:?} (must be between 0 and {max})")]
    InvalidPrefix { prefix: String, max: u8 },

    /// Binary input that is neither 4 nor 16 bytes long.
    #[error("Input of {len} bytes cannot be converted to IP address")]
    InvalidLength { len: usize },

    /// Input that is neither text nor a binary buffer.
    #[error("Invalid IP address: unsupported input type {found}")]
    UnsupportedInput { found: String },
}

/// `equals` was called with at least one operand that is a subnet.
///
/// Equality is only defined between single hosts (prefix length 128).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot check equality for subnets: /{left} vs /{right}")]
pub struct SubnetComparisonError {
    /// Prefix length of the left operand (128-bit scale).
    pub left: u8,
    /// Prefix length of the right operand (128-bit scale).
    pub right: u8,
}

/// Either address error, for callers that propagate both with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    SubnetComparison(#[from] SubnetComparisonError),
}
