//! # Shared IP
//!
//! Dual-stack IP address value type used by the networking and config
//! layers. IPv4 and IPv6 input (text, raw bytes, or CIDR subnets) is
//! normalized into one 128-bit representation.
//!
//! ## Layout
//!
//! - **Domain Layer** (`domain/`): pure value-type logic
//!   - `Address`: value, prefix length, and syntax-level family
//!   - `Ipv4View`: 32-bit projection for IPv4 and IPv4-mapped addresses
//!   - `Classifier`: private/loopback range tables
//! - **Errors** (`error.rs`): `FormatError`, `SubnetComparisonError`
//! - **Config** (`config.rs`, feature `config`): classification tables from TOML
//! - **Serde** (`serde_impl.rs`, feature `serde`): CIDR text out, text or bytes in
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `prefix_length <= 128`; IPv4 `/n` is stored as `/(n + 96)`
//! - **INVARIANT-2**: IPv4 input is stored in `::ffff:0:0/96`, so an IPv4 host
//!   and its IPv4-mapped IPv6 form are the same host
//! - **INVARIANT-3**: `equals` is defined for hosts only; subnets are an error
//!
//! ## Usage Example
//!
//! ```
//! use shared_ip::Address;
//!
//! let subnet = Address::parse("127.0.0.0/8")?;
//! let host = Address::parse("::ffff:127.0.0.1")?;
//!
//! assert!(subnet.includes(&host));
//! assert!(host.is_loopback());
//! assert_eq!(host.to_text(), "127.0.0.1");
//! assert!(subnet.equals(&host).is_err());
//! # Ok::<(), shared_ip::FormatError>(())
//! ```

pub mod domain;
pub mod error;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports for convenience
pub use domain::{
    Address, AddressSource, CanonicalIpv6, Classifier, Ipv4View, NativeForm,
    IPV4_MAPPED_RANGE,
};
pub use error::{AddressError, FormatError, SubnetComparisonError};

#[cfg(feature = "config")]
pub use config::{ClassificationConfig, ConfigError};
