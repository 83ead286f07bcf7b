//! Serde support for [`Address`].
//!
//! Serializes as [`Address::to_cidr_text`]. In human-readable formats it
//! deserializes from text (parsed as text input) or from bytes / a sequence
//! of bytes (parsed as binary input). Any other data type is rejected as
//! `FormatError::UnsupportedInput`.
//!
//! Compact formats are not self-describing, so there an `Address` is always
//! the CIDR text string.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::Address;
use crate::error::FormatError;

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_cidr_text())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(AddressVisitor)
        } else {
            // compact formats carry exactly what `serialize` wrote
            deserializer.deserialize_str(AddressVisitor)
        }
    }
}

struct AddressVisitor;

fn unsupported<E: de::Error>(found: &str) -> E {
    E::custom(FormatError::UnsupportedInput {
        found: found.to_string(),
    })
}

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an IP address as text or a 4/16-byte buffer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
        Address::parse_text(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Address, E> {
        Address::parse_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Address, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(16).min(16));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Address::parse_bytes(&bytes).map_err(de::Error::custom)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Address, E> {
        Err(unsupported("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Address, E> {
        Err(unsupported("integer"))
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Address, E> {
        Err(unsupported("integer"))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Address, E> {
        Err(unsupported("float"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Address, E> {
        Err(unsupported("null"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Address, A::Error> {
        Err(unsupported("map"))
    }
}
