//! Versioned wire form of a call profile
//!
//! A profile crosses process boundaries as one self-contained buffer:
//!
//! | field          | encoding                                  |
//! |----------------|-------------------------------------------|
//! | version        | `u16`                                     |
//! | service type   | `i32` code                                |
//! | call type      | `i32` code                                |
//! | extras         | optional map, one tagged union per value  |
//! | media profile  | `i32` codes and the video quality bits    |
//!
//! Fields are written and read in that order with `bincode` (fixed-width
//! little-endian integers). Extras are sanitized on encode only; the decoder
//! trusts its input to have been sanitized by the sender. A buffer must hold
//! exactly one profile: trailing bytes, buffers over the configured size
//! limit and extras nested deeper than [`MAX_NESTING_DEPTH`] are rejected. The restrict cause is not part of the wire form,
//! so a decoded profile always has [`RestrictCause::None`].
//!
//! [`RestrictCause::None`]: crate::types::RestrictCause::None

use bincode::Options;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

use crate::config::ProfileConfig;
use crate::error::{ProfileError, Result};
use crate::extras::{sanitize, CallExtras, MAX_NESTING_DEPTH};
use crate::media::StreamMediaProfile;
use crate::profile::CallProfile;
use crate::types::{CallType, ServiceType};

/// Wire version written by this build and the only one it reads
pub const WIRE_VERSION: u16 = 1;

#[derive(Serialize)]
struct WireProfileRef<'a> {
    version: u16,
    service_type: i32,
    call_type: i32,
    call_extras: Option<Cow<'a, CallExtras>>,
    media_profile: &'a StreamMediaProfile,
}

#[derive(Deserialize)]
struct WireProfile {
    version: u16,
    service_type: i32,
    call_type: i32,
    call_extras: Option<CallExtras>,
    media_profile: StreamMediaProfile,
}

/// Encoder/decoder for the wire form
#[derive(Debug, Clone, Default)]
pub struct ProfileCodec {
    config: ProfileConfig,
}

impl ProfileCodec {
    /// Create a codec, rejecting configuration it cannot honor
    pub fn new(config: ProfileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    fn options(&self) -> impl Options {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(self.config.wire.max_size)
            .reject_trailing_bytes()
    }

    /// Encode a profile, sanitizing its extras first
    pub fn encode(&self, profile: &CallProfile) -> Result<Bytes> {
        let call_extras = profile
            .call_extras()
            .map(|extras| sanitize(extras, &self.config.sanitizer));
        if let Some(extras) = &call_extras {
            let depth = extras.depth();
            if depth > MAX_NESTING_DEPTH {
                return Err(ProfileError::encoding_failed(format!(
                    "call extras nested {} levels deep, limit is {}",
                    depth, MAX_NESTING_DEPTH
                )));
            }
        }

        let wire = WireProfileRef {
            version: self.config.wire.version,
            service_type: profile.service_type().code(),
            call_type: profile.call_type().code(),
            call_extras,
            media_profile: profile.media_profile(),
        };

        let encoded = self
            .options()
            .serialize(&wire)
            .map_err(|e| ProfileError::encoding_failed(e.to_string()))?;
        debug!(
            bytes = encoded.len(),
            service_type = wire.service_type,
            call_type = wire.call_type,
            "encoded call profile"
        );
        Ok(Bytes::from(encoded))
    }

    /// Decode a profile
    pub fn decode(&self, data: &[u8]) -> Result<CallProfile> {
        if data.len() as u64 > self.config.wire.max_size {
            return Err(ProfileError::decoding_failed(format!(
                "{} bytes exceeds the limit of {}",
                data.len(),
                self.config.wire.max_size
            )));
        }

        let version: u16 = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .deserialize(data)
            .map_err(|e| ProfileError::decoding_failed(format!("missing header: {}", e)))?;
        if version != WIRE_VERSION {
            return Err(ProfileError::UnsupportedVersion {
                found: version,
                supported: WIRE_VERSION,
            });
        }

        let wire: WireProfile = self
            .options()
            .deserialize(data)
            .map_err(|e| ProfileError::decoding_failed(e.to_string()))?;
        let service_type = ServiceType::try_from(wire.service_type)?;
        let call_type = CallType::try_from(wire.call_type)?;

        debug!(
            version = wire.version,
            service_type = wire.service_type,
            call_type = wire.call_type,
            has_extras = wire.call_extras.is_some(),
            "decoded call profile"
        );
        Ok(CallProfile::from_parts(
            service_type,
            call_type,
            wire.call_extras,
            wire.media_profile,
        ))
    }
}

impl CallProfile {
    /// Encode with the default configuration
    pub fn to_wire(&self) -> Result<Bytes> {
        ProfileCodec::default().encode(self)
    }

    /// Decode with the default configuration
    pub fn from_wire(data: &[u8]) -> Result<Self> {
        ProfileCodec::default().decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn test_header_is_version() {
        let encoded = CallProfile::default().to_wire().unwrap();
        assert_eq!(&encoded[..2], &WIRE_VERSION.to_le_bytes());
    }

    #[test]
    fn test_rejects_future_version() {
        let mut encoded = CallProfile::default().to_wire().unwrap().to_vec();
        encoded[..2].copy_from_slice(&2u16.to_le_bytes());

        let err = CallProfile::from_wire(&encoded).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn test_rejects_unknown_call_type_code() {
        let mut encoded = CallProfile::default().to_wire().unwrap().to_vec();
        // version (2) + service type (4), then call type
        encoded[6..10].copy_from_slice(&77i32.to_le_bytes());

        let err = CallProfile::from_wire(&encoded).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::UnknownCode { kind: "call type", code: 77 }
        ));
    }

    #[test]
    fn test_rejects_truncated_input() {
        let encoded = CallProfile::default().to_wire().unwrap();
        let err = CallProfile::from_wire(&encoded[..encoded.len() - 3]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Wire);

        let err = CallProfile::from_wire(&[0x01]).unwrap_err();
        assert!(matches!(err, ProfileError::DecodingFailed { .. }));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut encoded = CallProfile::default().to_wire().unwrap().to_vec();
        encoded.extend_from_slice(b"garbage-after-profile");

        let err = CallProfile::from_wire(&encoded).unwrap_err();
        assert!(matches!(err, ProfileError::DecodingFailed { .. }));
    }

    #[test]
    fn test_rejects_oversized_input() {
        let mut config = ProfileConfig::default();
        config.wire.max_size = 16;
        let codec = ProfileCodec::new(config).unwrap();

        let mut profile = CallProfile::default();
        profile.set_call_extra("cna", "a name well over sixteen bytes");
        assert!(matches!(
            codec.encode(&profile).unwrap_err(),
            ProfileError::EncodingFailed { .. }
        ));

        let encoded = profile.to_wire().unwrap();
        assert!(matches!(
            codec.decode(&encoded).unwrap_err(),
            ProfileError::DecodingFailed { .. }
        ));
    }

    #[test]
    fn test_encode_rejects_excess_nesting() {
        let mut extras = CallExtras::new();
        for _ in 0..MAX_NESTING_DEPTH {
            extras = CallExtras::new().with("k", extras);
        }
        let profile = CallProfile::default().with_call_extras(extras);

        let err = profile.to_wire().unwrap_err();
        assert!(matches!(err, ProfileError::EncodingFailed { .. }));
    }

    #[test]
    fn test_codec_rejects_bad_config() {
        let mut config = ProfileConfig::default();
        config.sanitizer.system_namespaces.clear();
        assert!(ProfileCodec::new(config).is_err());
    }
}
