//! # Address Properties
//!
//! End-to-end behaviour of the public Address API: round-trips through text
//! and bytes, family-crossing equality, canonical compression, containment,
//! classification and error kinds.

use proptest::prelude::*;
use shared_ip::{Address, AddressError, FormatError, NativeForm, SubnetComparisonError};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn addr(text: &str) -> Address {
    Address::parse(text).unwrap()
}

const FE80_BYTES: [u8; 16] = [
    0xfe, 0x80, 0xde, 0xad, 0, 0xbe, 0, 0xef, 0, 0, 0, 0, 0, 0, 0, 1,
];
const MAPPED_LOCALHOST_BYTES: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 127, 0, 0, 1];

/// Every input form must agree on family, text and bytes.
fn assert_all_forms(
    is_ipv4: bool,
    source_text: &str,
    source_bytes: &[u8],
    target_text: &str,
    target_bytes: &[u8],
) {
    for ip in [
        Address::parse(source_text).unwrap(),
        Address::parse(source_bytes).unwrap(),
        Address::parse(&bytes::Bytes::copy_from_slice(source_bytes)).unwrap(),
    ] {
        assert_eq!(ip.is_ipv4(), is_ipv4, "{source_text}");
        assert_eq!(ip.to_text(), target_text);
        assert_eq!(ip.to_byte_array(), target_bytes);
        assert_eq!(ip.to_binary_buffer().as_ref(), target_bytes);
    }
}

// =============================================================================
// TEST GROUP 1: Input Forms
// =============================================================================

#[test]
fn test_ipv4_in_form_of_ipv4() {
    assert_all_forms(true, "127.0.0.1", &[127, 0, 0, 1], "127.0.0.1", &[127, 0, 0, 1]);
}

#[test]
fn test_ipv4_in_form_of_ipv4_in_ipv6() {
    assert_all_forms(
        true,
        "::ffff:127.0.0.1",
        &MAPPED_LOCALHOST_BYTES,
        "127.0.0.1",
        &[127, 0, 0, 1],
    );
}

#[test]
fn test_ipv4_in_form_of_ipv6() {
    assert_all_forms(
        true,
        "::ffff:7f00:1",
        &MAPPED_LOCALHOST_BYTES,
        "127.0.0.1",
        &[127, 0, 0, 1],
    );
}

#[test]
fn test_ipv6_short_longer_and_full_forms() {
    for source in [
        "fe80:dead:be:ef::1",
        "fe80:dead:be:ef::0001",
        "fe80:dead:00be:00ef:0000:0000:0000:0001",
    ] {
        assert_all_forms(false, source, &FE80_BYTES, "fe80:dead:be:ef::1", &FE80_BYTES);
    }
}

// =============================================================================
// TEST GROUP 2: Relations
// =============================================================================

#[test]
fn test_family_crossing_equality() {
    assert_eq!(addr("127.0.0.1").equals(&addr("::ffff:127.0.0.1")), Ok(true));
    assert_eq!(addr("127.0.0.1").equals(&addr("::ffff:7f00:1")), Ok(true));
    assert_eq!(
        addr("fe80:00de:00ad:0000:0000:0000:0000:0001").equals(&addr("fe80:de:ad::1")),
        Ok(true)
    );
}

#[test]
fn test_subnet_equality_is_an_error() {
    let a = addr("192.168.1.0/24");
    let b = addr("192.168.1.0/24");
    assert_eq!(a.equals(&b), Err(SubnetComparisonError { left: 120, right: 120 }));

    let propagated = || -> Result<bool, AddressError> { Ok(addr("::/0").equals(&addr("::"))?) };
    assert!(matches!(propagated(), Err(AddressError::SubnetComparison(_))));
}

#[test]
fn test_subnet_containment() {
    let v4 = addr("127.0.0.0/8");
    assert!(v4.includes(&addr("127.0.0.1")));
    assert!(!v4.includes(&addr("8.8.8.8")));

    let v6 = addr("fc00::/7");
    assert!(v6.includes(&addr("fd80::1")));
    assert!(!v6.includes(&addr("2001:4860:4860::8888")));
}

#[test]
fn test_classification() {
    assert!(addr("10.10.13.1").is_private());
    assert!(addr("172.16.18.1").is_private());
    assert!(!addr("5.9.69.13").is_private());
    assert!(addr("fd80::1").is_private());
    assert!(addr("fc00::1").is_private());
    assert!(!addr("2001:4860:4860::8888").is_private());

    assert!(addr("127.0.0.1").is_loopback());
    assert!(!addr("10.0.13.1").is_loopback());
    assert!(!addr("8.8.8.8").is_loopback());
    assert!(addr("::1").is_loopback());
    assert!(!addr("fc00::1").is_loopback());
    assert!(!addr("2001:4860:4860::8888").is_loopback());
}

// =============================================================================
// TEST GROUP 3: Errors
// =============================================================================

#[test]
fn test_malformed_input() {
    assert!(matches!(
        Address::parse("not-an-ip"),
        Err(FormatError::InvalidIpv4 { .. })
    ));
    assert_eq!(
        Address::parse(&[1u8, 2, 3, 4, 5]),
        Err(FormatError::InvalidLength { len: 5 })
    );
    assert!(matches!(
        "1::2::3".parse::<Address>(),
        Err(FormatError::InvalidIpv6 { .. })
    ));
}

#[test]
fn test_std_conversions_agree_with_parsing() {
    let from_std = Address::from(std::net::Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(from_std, addr("10.0.0.1"));
    assert_eq!(from_std.to_ip_addr(), "10.0.0.1".parse::<std::net::IpAddr>().unwrap());
    assert_eq!(Address::try_from(&FE80_BYTES[..]).unwrap(), addr("fe80:dead:be:ef::1"));
}

// =============================================================================
// TEST GROUP 4: Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_ipv4_text_round_trip(octets in any::<[u8; 4]>()) {
        let text = std::net::Ipv4Addr::from(octets).to_string();
        let ip = Address::parse(text.as_str()).unwrap();
        prop_assert_eq!(ip.to_text(), text);
        prop_assert_eq!(ip.native_form(), NativeForm::V4);
    }

    #[test]
    fn prop_byte_round_trip(raw in any::<u128>(), use_v4 in any::<bool>()) {
        let ip = if use_v4 {
            Address::parse(&(raw as u32).to_be_bytes()).unwrap()
        } else {
            Address::parse(&raw.to_be_bytes()).unwrap()
        };
        let again = Address::parse(&ip.to_byte_array()).unwrap();
        prop_assert_eq!(again.is_ipv4(), ip.is_ipv4());
        prop_assert_eq!(again.to_text(), ip.to_text());
        prop_assert_eq!(again.to_byte_array(), ip.to_byte_array());
        prop_assert_eq!(again.equals(&ip), Ok(true));
    }

    #[test]
    fn prop_mapped_ipv6_equals_ipv4(v4 in any::<u32>()) {
        let dotted = std::net::Ipv4Addr::from(v4);
        let native = Address::from(dotted);
        let mapped = Address::parse(format!("::ffff:{dotted}").as_str()).unwrap();
        prop_assert_eq!(native.equals(&mapped), Ok(true));
        prop_assert_eq!(native.to_text(), mapped.to_text());
    }

    #[test]
    fn prop_canonical_text_reparses(raw in any::<u128>()) {
        let ip = Address::parse(&raw.to_be_bytes()).unwrap();
        let again = Address::parse(ip.to_text().as_str()).unwrap();
        prop_assert_eq!(again.equals(&ip), Ok(true));
    }

    #[test]
    fn prop_cidr_text_round_trip(raw in any::<u128>(), prefix in 0u8..=128) {
        let text = format!("{}/{prefix}", std::net::Ipv6Addr::from(raw));
        let ip = Address::parse(text.as_str()).unwrap();
        let again = Address::parse(ip.to_cidr_text().as_str()).unwrap();
        prop_assert_eq!(again.value(), ip.value());
        prop_assert_eq!(again.prefix_length(), ip.prefix_length());
        prop_assert_eq!(again.is_ipv4(), ip.is_ipv4());
    }

    #[test]
    fn prop_network_is_included(raw in any::<u128>(), prefix in 0u8..=128) {
        let text = format!("{}/{prefix}", std::net::Ipv6Addr::from(raw));
        let subnet = Address::parse(text.as_str()).unwrap();
        let host = Address::parse(&raw.to_be_bytes()).unwrap();
        prop_assert!(subnet.includes(&host));
        prop_assert!(subnet.network().includes(&host));
    }
}
