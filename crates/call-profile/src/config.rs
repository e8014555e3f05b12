//! Configuration for call profile handling
//!
//! Controls which opaque extras count as transport-safe and which wire
//! version the encoder writes. Loaded from TOML; every section is optional.
//!
//! ```toml
//! [sanitizer]
//! system_namespaces = ["system.", "ims."]
//!
//! [wire]
//! version = 1
//! max_size = 1048576
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProfileError, Result};
use crate::wire::WIRE_VERSION;

/// Largest encoded profile accepted by default, in bytes
pub const DEFAULT_MAX_WIRE_SIZE: u64 = 1024 * 1024;

/// Type-name prefixes of opaque objects allowed across the transport by default
pub const DEFAULT_SYSTEM_NAMESPACES: &[&str] = &["system.", "ims."];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Extras sanitizer policy
    pub sanitizer: SanitizerConfig,
    /// Wire codec settings
    pub wire: WireConfig,
}

/// Extras sanitizer policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Type-name prefixes of opaque objects that may cross the transport
    pub system_namespaces: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            system_namespaces: DEFAULT_SYSTEM_NAMESPACES
                .iter()
                .map(|ns| ns.to_string())
                .collect(),
        }
    }
}

impl SanitizerConfig {
    /// Policy with the given namespaces
    pub fn with_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            system_namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an opaque object of this type may cross the transport
    pub fn is_system_type(&self, type_name: &str) -> bool {
        self.system_namespaces
            .iter()
            .any(|ns| type_name.starts_with(ns.as_str()))
    }
}

/// Wire codec settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    /// Version written into the wire header
    pub version: u16,
    /// Largest encoded profile, in bytes, written or read
    pub max_size: u64,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            version: WIRE_VERSION,
            max_size: DEFAULT_MAX_WIRE_SIZE,
        }
    }
}

impl ProfileConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check the configuration for values the library cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.sanitizer.system_namespaces.is_empty() {
            return Err(ProfileError::invalid_config(
                "sanitizer.system_namespaces must not be empty",
            ));
        }
        if self
            .sanitizer
            .system_namespaces
            .iter()
            .any(|ns| ns.is_empty())
        {
            return Err(ProfileError::invalid_config(
                "sanitizer.system_namespaces must not contain an empty prefix",
            ));
        }
        if self.wire.version != WIRE_VERSION {
            return Err(ProfileError::UnsupportedVersion {
                found: self.wire.version,
                supported: WIRE_VERSION,
            });
        }
        if self.wire.max_size == 0 {
            return Err(ProfileError::invalid_config("wire.max_size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ProfileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.wire.version, WIRE_VERSION);
        assert!(config.sanitizer.is_system_type("system.CallQuality"));
        assert!(config.sanitizer.is_system_type("ims.RtpHeaderExtension"));
        assert!(!config.sanitizer.is_system_type("com.vendor.Secret"));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ProfileConfig::from_toml_str("").unwrap();
        assert_eq!(config, ProfileConfig::default());
    }

    #[test]
    fn test_custom_namespaces() {
        let config = ProfileConfig::from_toml_str(
            r#"
            [sanitizer]
            system_namespaces = ["org.carrier."]
            "#,
        )
        .unwrap();
        assert!(config.sanitizer.is_system_type("org.carrier.Tag"));
        assert!(!config.sanitizer.is_system_type("system.CallQuality"));
        assert_eq!(config.wire.version, WIRE_VERSION);
    }

    #[test]
    fn test_rejects_empty_namespace_list() {
        let err = ProfileConfig::from_toml_str(
            r#"
            [sanitizer]
            system_namespaces = []
            "#,
        )
        .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_rejects_unknown_wire_version() {
        let err = ProfileConfig::from_toml_str("[wire]\nversion = 7\n").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::UnsupportedVersion { found: 7, .. }
        ));
    }

    #[test]
    fn test_wire_size_limit() {
        let config = ProfileConfig::from_toml_str("[wire]\nmax_size = 4096\n").unwrap();
        assert_eq!(config.wire.max_size, 4096);
        assert_eq!(config.wire.version, WIRE_VERSION);

        let err = ProfileConfig::from_toml_str("[wire]\nmax_size = 0\n").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ProfileConfig::from_toml_str("[sanitizer\n").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sanitizer]\nsystem_namespaces = [\"ims.\"]").unwrap();

        let config = ProfileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sanitizer.system_namespaces, vec!["ims.".to_string()]);

        let err = ProfileConfig::from_file("/nonexistent/call-profile.toml").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
