//! Classification configuration
//!
//! Loads the private/loopback range tables from TOML. Any list left out of
//! the file keeps the standard table.
//!
//! # Config File Format
//!
//! ```toml
//! [classification]
//! private_v4 = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16", "100.64.0.0/10"]
//! private_v6 = ["fc00::/7"]
//! loopback_v4 = ["127.0.0.0/8"]
//! loopback_v6 = ["::1/128"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    Address, Classifier, Ipv4View, NativeForm, LOOPBACK_IPV4, LOOPBACK_IPV6, PRIVATE_IPV4,
    PRIVATE_IPV6,
};
use crate::error::FormatError;

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid range {entry:?} in {list}: {source}")]
    InvalidRange {
        list: &'static str,
        entry: String,
        #[source]
        source: FormatError,
    },

    #[error("Range {entry:?} in {list} must be written as {expected}")]
    FamilyMismatch {
        list: &'static str,
        entry: String,
        expected: NativeForm,
    },
}

/// Configuration file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    classification: ClassificationConfig,
}

/// Range tables as CIDR text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationConfig {
    /// IPv4 private blocks (dotted-decimal CIDR)
    pub private_v4: Vec<String>,
    /// IPv6 private blocks (colon-hex CIDR)
    pub private_v6: Vec<String>,
    /// IPv4 loopback blocks
    pub loopback_v4: Vec<String>,
    /// IPv6 loopback blocks
    pub loopback_v6: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        fn v4_text(blocks: &[Ipv4View]) -> Vec<String> {
            blocks
                .iter()
                .map(|b| format!("{b}/{}", b.prefix_length()))
                .collect()
        }
        fn v6_text(blocks: &[Address]) -> Vec<String> {
            blocks.iter().map(Address::to_cidr_text).collect()
        }

        Self {
            private_v4: v4_text(&PRIVATE_IPV4),
            private_v6: v6_text(&PRIVATE_IPV6),
            loopback_v4: v4_text(&LOOPBACK_IPV4),
            loopback_v6: v6_text(&LOOPBACK_IPV6),
        }
    }
}

impl ClassificationConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.as_ref().display(), "Loaded classification config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(file.classification)
    }

    /// Check that every entry parses and is written in its list's family.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Build the range tables.
    pub fn build(&self) -> Result<Classifier, ConfigError> {
        let classifier = Classifier::new(
            parse_v4_list("private_v4", &self.private_v4)?,
            parse_v6_list("private_v6", &self.private_v6)?,
            parse_v4_list("loopback_v4", &self.loopback_v4)?,
            parse_v6_list("loopback_v6", &self.loopback_v6)?,
        );
        debug!(
            private_v4 = self.private_v4.len(),
            private_v6 = self.private_v6.len(),
            loopback_v4 = self.loopback_v4.len(),
            loopback_v6 = self.loopback_v6.len(),
            "Built classification tables"
        );
        Ok(classifier)
    }
}

fn parse_range(
    list: &'static str,
    entry: &str,
    expected: NativeForm,
) -> Result<Address, ConfigError> {
    let addr = Address::parse_text(entry).map_err(|source| {
        warn!(list, entry, error = %source, "Rejected classification range");
        ConfigError::InvalidRange {
            list,
            entry: entry.to_string(),
            source,
        }
    })?;

    if addr.native_form() != expected {
        warn!(list, entry, %expected, "Classification range in wrong family");
        return Err(ConfigError::FamilyMismatch {
            list,
            entry: entry.to_string(),
            expected,
        });
    }
    Ok(addr)
}

fn parse_v4_list(list: &'static str, entries: &[String]) -> Result<Vec<Ipv4View>, ConfigError> {
    entries
        .iter()
        .map(|entry| {
            let addr = parse_range(list, entry, NativeForm::V4)?;
            // native V4 always projects
            addr.as_ipv4_view().ok_or_else(|| ConfigError::FamilyMismatch {
                list,
                entry: entry.clone(),
                expected: NativeForm::V4,
            })
        })
        .collect()
}

fn parse_v6_list(list: &'static str, entries: &[String]) -> Result<Vec<Address>, ConfigError> {
    entries
        .iter()
        .map(|entry| parse_range(list, entry, NativeForm::V6))
        .collect()
}
