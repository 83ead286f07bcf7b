//! Projection: the IPv4 view and canonical text/binary output.
//!
//! An address has an IPv4 view when it was written as IPv4, or when its
//! value lies in `::ffff:0:0/96`. Output takes the IPv4 shape whenever the
//! view exists.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

use bytes::Bytes;

use super::address::{Address, IPV4_MAPPED_BASE, IPV4_MAPPED_PREFIX_LEN};
use super::canonical::CanonicalIpv6;
use super::family::NativeForm;
use super::ipv4::Ipv4View;

/// `::ffff:0:0/96`
pub const IPV4_MAPPED_RANGE: Address = Address::v6_cidr(IPV4_MAPPED_BASE, IPV4_MAPPED_PREFIX_LEN);

impl Address {
    /// IPv4 view of this address, if one legitimately exists.
    pub fn as_ipv4_view(&self) -> Option<Ipv4View> {
        match self.native_form() {
            NativeForm::V4 => Some(self.low_view()),
            NativeForm::V6 if IPV4_MAPPED_RANGE.includes(self) => Some(self.low_view()),
            NativeForm::V6 => None,
        }
    }

    fn low_view(&self) -> Ipv4View {
        Ipv4View::from_parts(
            self.value() as u32,
            self.prefix_length().saturating_sub(IPV4_MAPPED_PREFIX_LEN),
        )
    }

    pub fn is_ipv4(&self) -> bool {
        self.as_ipv4_view().is_some()
    }

    /// Dotted-decimal when an IPv4 view exists, RFC 5952 IPv6 otherwise.
    /// Never carries a `/prefix`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Like [`Address::to_text`], with `/prefix` appended for subnets.
    ///
    /// The prefix is on the IPv4 scale when the text is dotted-decimal, so
    /// the result parses back to the same value, prefix and projection.
    pub fn to_cidr_text(&self) -> String {
        if self.is_host() {
            return self.to_text();
        }
        match self.as_ipv4_view() {
            Some(view) if self.prefix_length() >= IPV4_MAPPED_PREFIX_LEN => {
                format!("{view}/{}", view.prefix_length())
            }
            _ => format!("{}/{}", CanonicalIpv6(self.value()), self.prefix_length()),
        }
    }

    /// 4 big-endian bytes when an IPv4 view exists, 16 otherwise.
    pub fn to_byte_array(&self) -> Vec<u8> {
        match self.as_ipv4_view() {
            Some(view) => view.octets().to_vec(),
            None => self.value().to_be_bytes().to_vec(),
        }
    }

    /// [`Address::to_byte_array`] as an immutable shared buffer.
    pub fn to_binary_buffer(&self) -> Bytes {
        Bytes::from(self.to_byte_array())
    }

    /// `std::net` form, IPv4 whenever the view exists.
    pub fn to_ip_addr(&self) -> IpAddr {
        match self.as_ipv4_view() {
            Some(view) => IpAddr::V4(view.into()),
            None => IpAddr::V6(Ipv6Addr::from(self.value())),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ipv4_view() {
            Some(view) => fmt::Display::fmt(&view, f),
            None => fmt::Display::fmt(&CanonicalIpv6(self.value()), f),
        }
    }
}
