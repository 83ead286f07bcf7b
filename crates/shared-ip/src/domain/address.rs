//! The Address value type.
//!
//! INVARIANTS:
//! - `prefix_length` is within `[0, 128]`
//! - `value` always spans the 128-bit space; IPv4 input is stored widened
//!   into the IPv4-mapped range (`::ffff:a.b.c.d`)
//! - No method mutates an Address after construction

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::family::NativeForm;
use super::relations::network_mask;
use crate::error::FormatError;

/// Width of the address space every Address is expressed in.
pub const ADDRESS_BITS: u8 = 128;

/// Prefix length of the IPv4-mapped range; an IPv4 `/n` is `/(n + 96)` here.
pub const IPV4_MAPPED_PREFIX_LEN: u8 = 96;

/// `::ffff:0:0`, the base of the IPv4-mapped range.
pub(crate) const IPV4_MAPPED_BASE: u128 = 0xffff_u128 << 32;

/// Dual-stack IP address or subnet.
///
/// Built only through ingestion (`parse`, `FromStr`, `TryFrom<&[u8]>`, or the
/// `std::net` conversions). Structural `==` compares all three fields; use
/// [`Address::equals`] for family-agnostic host equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    value: u128,
    prefix_length: u8,
    native_form: NativeForm,
}

impl Address {
    pub(crate) const fn new(value: u128, prefix_length: u8, native_form: NativeForm) -> Self {
        assert!(prefix_length <= ADDRESS_BITS);
        Self {
            value,
            prefix_length,
            native_form,
        }
    }

    /// IPv4 literal widened into the mapped range, `prefix` on the IPv4 scale.
    pub(crate) const fn v4_cidr(octets: [u8; 4], prefix: u8) -> Self {
        assert!(prefix <= 32);
        Self::new(
            widen(u32::from_be_bytes(octets)),
            prefix + IPV4_MAPPED_PREFIX_LEN,
            NativeForm::V4,
        )
    }

    pub(crate) const fn v6_cidr(value: u128, prefix: u8) -> Self {
        Self::new(value, prefix, NativeForm::V6)
    }

    /// The address as a 128-bit big-endian integer.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// Number of significant leading bits, on the 128-bit scale.
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn native_form(&self) -> NativeForm {
        self.native_form
    }

    /// A single host rather than a subnet.
    pub fn is_host(&self) -> bool {
        self.prefix_length == ADDRESS_BITS
    }

    /// Base address of the subnet: host bits cleared, same prefix and form.
    pub fn network(&self) -> Self {
        Self::new(
            self.value & network_mask(self.prefix_length),
            self.prefix_length,
            self.native_form,
        )
    }
}

/// Place a 32-bit IPv4 value in the IPv4-mapped range.
pub(crate) const fn widen(v4: u32) -> u128 {
    IPV4_MAPPED_BASE | v4 as u128
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = FormatError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::parse_bytes(bytes)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self::v4_cidr(ip.octets(), 32)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self::new(u128::from(ip), ADDRESS_BITS, NativeForm::V6)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}
