//! Private and loopback classification tables.
//!
//! Dispatch is by projected family: an address with an IPv4 view is checked
//! against the IPv4 blocks only, anything else against the IPv6 blocks only.
//! `::ffff:10.0.0.1` is therefore private, and never tested against fc00::/7.

use std::borrow::Cow;

use super::address::Address;
use super::ipv4::Ipv4View;

/// `10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`
pub const PRIVATE_IPV4: [Ipv4View; 3] = [
    Ipv4View::new([10, 0, 0, 0], 8),
    Ipv4View::new([172, 16, 0, 0], 12),
    Ipv4View::new([192, 168, 0, 0], 16),
];

/// `fc00::/7` (unique local)
pub const PRIVATE_IPV6: [Address; 1] = [Address::v6_cidr(0xfc00_u128 << 112, 7)];

/// `127.0.0.0/8`
pub const LOOPBACK_IPV4: [Ipv4View; 1] = [Ipv4View::new([127, 0, 0, 0], 8)];

/// `::1/128`
pub const LOOPBACK_IPV6: [Address; 1] = [Address::v6_cidr(1, 128)];

/// Range tables used by `is_private` / `is_loopback`.
///
/// [`Classifier::STANDARD`] holds the fixed tables above; custom tables come
/// from [`Classifier::new`] or the `config` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    private_v4: Cow<'static, [Ipv4View]>,
    private_v6: Cow<'static, [Address]>,
    loopback_v4: Cow<'static, [Ipv4View]>,
    loopback_v6: Cow<'static, [Address]>,
}

impl Classifier {
    pub const STANDARD: Classifier = Classifier {
        private_v4: Cow::Borrowed(&PRIVATE_IPV4),
        private_v6: Cow::Borrowed(&PRIVATE_IPV6),
        loopback_v4: Cow::Borrowed(&LOOPBACK_IPV4),
        loopback_v6: Cow::Borrowed(&LOOPBACK_IPV6),
    };

    pub fn new(
        private_v4: Vec<Ipv4View>,
        private_v6: Vec<Address>,
        loopback_v4: Vec<Ipv4View>,
        loopback_v6: Vec<Address>,
    ) -> Self {
        Self {
            private_v4: Cow::Owned(private_v4),
            private_v6: Cow::Owned(private_v6),
            loopback_v4: Cow::Owned(loopback_v4),
            loopback_v6: Cow::Owned(loopback_v6),
        }
    }

    pub fn is_private(&self, addr: &Address) -> bool {
        matches_any(addr, &self.private_v4, &self.private_v6)
    }

    pub fn is_loopback(&self, addr: &Address) -> bool {
        matches_any(addr, &self.loopback_v4, &self.loopback_v6)
    }

    pub fn private_v4(&self) -> &[Ipv4View] {
        &self.private_v4
    }

    pub fn private_v6(&self) -> &[Address] {
        &self.private_v6
    }

    pub fn loopback_v4(&self) -> &[Ipv4View] {
        &self.loopback_v4
    }

    pub fn loopback_v6(&self) -> &[Address] {
        &self.loopback_v6
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn matches_any(addr: &Address, v4_blocks: &[Ipv4View], v6_blocks: &[Address]) -> bool {
    match addr.as_ipv4_view() {
        Some(view) => v4_blocks.iter().any(|block| block.includes(&view)),
        None => v6_blocks.iter().any(|block| block.includes(addr)),
    }
}

impl Address {
    /// Member of `10/8`, `172.16/12`, `192.168/16` (IPv4 view) or `fc00::/7`.
    pub fn is_private(&self) -> bool {
        Classifier::STANDARD.is_private(self)
    }

    /// Member of `127/8` (IPv4 view) or `::1`.
    pub fn is_loopback(&self) -> bool {
        Classifier::STANDARD.is_loopback(self)
    }
}
