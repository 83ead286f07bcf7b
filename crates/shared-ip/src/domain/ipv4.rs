//! 32-bit IPv4 view of an Address.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::FormatError;

/// IPv4 projection with its IPv4-scale prefix (`0..=32`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4View {
    value: u32,
    prefix_length: u8,
}

impl Ipv4View {
    /// Build a view from dotted octets and an IPv4-scale prefix.
    ///
    /// # Panics
    /// Panics if `prefix_length > 32`.
    pub const fn new(octets: [u8; 4], prefix_length: u8) -> Self {
        assert!(prefix_length <= 32);
        Self {
            value: u32::from_be_bytes(octets),
            prefix_length,
        }
    }

    /// Fallible [`Ipv4View::new`] for prefixes that come from callers.
    pub fn try_new(octets: [u8; 4], prefix_length: u8) -> Result<Self, FormatError> {
        if prefix_length > 32 {
            return Err(FormatError::InvalidPrefix {
                prefix: prefix_length.to_string(),
                max: 32,
            });
        }
        Ok(Self::new(octets, prefix_length))
    }

    pub(crate) const fn from_parts(value: u32, prefix_length: u8) -> Self {
        Self {
            value,
            prefix_length,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn octets(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// True iff `other` agrees with this block on its leading `prefix_length` bits.
    pub fn includes(&self, other: &Ipv4View) -> bool {
        let mask = match self.prefix_length {
            0 => 0,
            p => u32::MAX << (32 - u32::from(p)),
        };
        (self.value ^ other.value) & mask == 0
    }
}

impl From<Ipv4View> for Ipv4Addr {
    fn from(view: Ipv4View) -> Self {
        Ipv4Addr::from(view.value)
    }
}

impl fmt::Display for Ipv4View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        f.pad(&format!("{a}.{b}.{c}.{d}"))
    }
}
