//! Relations: host equality and CIDR containment.
//!
//! Both work on the 128-bit value only; the syntax-level family plays no
//! part, so an IPv4 host and its IPv4-mapped IPv6 twin are the same host.

use super::address::Address;
use crate::error::SubnetComparisonError;

/// Mask with the leading `prefix_length` bits set.
pub(crate) const fn network_mask(prefix_length: u8) -> u128 {
    match prefix_length {
        0 => 0,
        p => u128::MAX << (128 - p as u32),
    }
}

impl Address {
    /// Host equality over the full 128-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`SubnetComparisonError`] unless both operands are hosts
    /// (prefix length 128). Subnets are never compared for equality.
    pub fn equals(&self, other: &Address) -> Result<bool, SubnetComparisonError> {
        if !self.is_host() || !other.is_host() {
            return Err(SubnetComparisonError {
                left: self.prefix_length(),
                right: other.prefix_length(),
            });
        }
        Ok(self.value() == other.value())
    }

    /// True iff `candidate` agrees with this subnet on its leading
    /// `prefix_length` bits.
    ///
    /// Only this address's mask counts. A candidate subnet is included when
    /// its base address falls inside, even if its range extends past ours.
    pub fn includes(&self, candidate: &Address) -> bool {
        (self.value() ^ candidate.value()) & network_mask(self.prefix_length()) == 0
    }
}
