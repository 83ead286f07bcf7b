//! Domain Layer - the Address value type
//!
//! Dependency order:
//! - Ingestion (`ingest`): text/binary input to the canonical 128-bit form
//! - Projection (`projection`, `ipv4`, `canonical`): IPv4 view and output
//! - Relations (`relations`, `classification`): equality, containment,
//!   private/loopback tables
//!
//! RULES:
//! - No I/O, no logging
//! - Every operation is a pure function of its arguments

pub mod address;
pub mod canonical;
pub mod classification;
pub mod family;
pub mod ingest;
pub mod ipv4;
pub mod projection;
pub mod relations;

pub use address::{Address, ADDRESS_BITS, IPV4_MAPPED_PREFIX_LEN};
pub use canonical::CanonicalIpv6;
pub use classification::{
    Classifier, LOOPBACK_IPV4, LOOPBACK_IPV6, PRIVATE_IPV4, PRIVATE_IPV6,
};
pub use family::NativeForm;
pub use ingest::AddressSource;
pub use ipv4::Ipv4View;
pub use projection::IPV4_MAPPED_RANGE;
