//! Ingestion: text and binary input into the canonical 128-bit form.
//!
//! The family is decided at the syntax level. Text without a `:` is
//! IPv4-domain, text with one is IPv6-domain; 4-byte buffers are IPv4-domain
//! and 16-byte buffers IPv6-domain. Raw colon-hex parsing (including `::`
//! compression and an embedded dotted tail) is delegated to `std::net`.

use std::net::{Ipv4Addr, Ipv6Addr};

use super::address::{Address, ADDRESS_BITS};
use super::family::NativeForm;
use crate::error::FormatError;

/// Input accepted by [`Address::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSource<'a> {
    /// Dotted-decimal or colon-hex text, optionally with a `/prefix` suffix.
    Text(&'a str),
    /// Raw big-endian bytes, 4 or 16 of them.
    Binary(&'a [u8]),
}

impl<'a> From<&'a str> for AddressSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for AddressSource<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for AddressSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Binary(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for AddressSource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Binary(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for AddressSource<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Binary(bytes.as_slice())
    }
}

impl<'a> From<&'a bytes::Bytes> for AddressSource<'a> {
    fn from(bytes: &'a bytes::Bytes) -> Self {
        Self::Binary(bytes.as_ref())
    }
}

impl Address {
    /// Parse text or binary input.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] on malformed text, an out-of-range prefix, or a
    /// buffer that is neither 4 nor 16 bytes long.
    pub fn parse<'a>(input: impl Into<AddressSource<'a>>) -> Result<Self, FormatError> {
        match input.into() {
            AddressSource::Text(text) => Self::parse_text(text),
            AddressSource::Binary(bytes) => Self::parse_bytes(bytes),
        }
    }

    /// Parse `a.b.c.d[/0-32]` or colon-hex `[/0-128]` text.
    ///
    /// An IPv4 `/n` becomes `/(n + 96)` in the unified space; a missing
    /// suffix means a host.
    pub fn parse_text(text: &str) -> Result<Self, FormatError> {
        if text.contains(':') {
            parse_ipv6_text(text)
        } else {
            parse_ipv4_text(text)
        }
    }

    /// Parse a 4-byte (IPv4) or 16-byte (IPv6) big-endian buffer as a host.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            return Ok(Address::from(Ipv4Addr::from(octets)));
        }
        if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
            return Ok(Address::new(
                u128::from_be_bytes(octets),
                ADDRESS_BITS,
                NativeForm::V6,
            ));
        }
        Err(FormatError::InvalidLength { len: bytes.len() })
    }
}

fn parse_ipv4_text(text: &str) -> Result<Address, FormatError> {
    let (addr, prefix) = split_prefix(text, NativeForm::V4)?;
    let ip: Ipv4Addr = addr.parse().map_err(|_| FormatError::InvalidIpv4 {
        input: text.to_string(),
    })?;
    Ok(Address::v4_cidr(ip.octets(), prefix.unwrap_or(32)))
}

fn parse_ipv6_text(text: &str) -> Result<Address, FormatError> {
    let (addr, prefix) = split_prefix(text, NativeForm::V6)?;
    let ip: Ipv6Addr = addr.parse().map_err(|_| FormatError::InvalidIpv6 {
        input: text.to_string(),
    })?;
    Ok(Address::new(
        u128::from(ip),
        prefix.unwrap_or(ADDRESS_BITS),
        NativeForm::V6,
    ))
}

/// Split off an optional `/prefix` and check it against the family's range.
fn split_prefix(text: &str, form: NativeForm) -> Result<(&str, Option<u8>), FormatError> {
    let Some((addr, suffix)) = text.split_once('/') else {
        return Ok((text, None));
    };

    let max = form.max_prefix();
    let invalid = || FormatError::InvalidPrefix {
        prefix: suffix.to_string(),
        max,
    };

    // `u8::from_str` would also take a leading `+`
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match suffix.parse::<u8>() {
        Ok(prefix) if prefix <= max => Ok((addr, Some(prefix))),
        _ => Err(invalid()),
    }
}
