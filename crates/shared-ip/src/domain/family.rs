//! Syntax-level address family.

use std::fmt;

/// Records which syntax an address was built from.
///
/// Not derivable from the 128-bit value: `::ffff:7f00:1` written as IPv6 is
/// `V6` even though it lies in the IPv4-mapped range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeForm {
    /// Dotted-decimal text or a 4-byte buffer.
    V4,
    /// Colon-hex text or a 16-byte buffer.
    V6,
}

impl NativeForm {
    /// Widest CIDR suffix the family's text syntax accepts.
    pub const fn max_prefix(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

impl fmt::Display for NativeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}
