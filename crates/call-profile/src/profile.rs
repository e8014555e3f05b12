//! IMS call profile
//!
//! [`CallProfile`] carries the attributes of an IMS call between the
//! telephony middle layer and call-control code: service type, call type,
//! the cause restricting call types, an extras bag and the stream media
//! profile. It is built from GSMA IR.92/IR.94 and 3GPP TS 24.229 usage.
//!
//! # Examples
//!
//! ```rust
//! use ims_call_profile::{CallProfile, CallType, ServiceType};
//! use ims_call_profile::extras::keys;
//!
//! let mut profile = CallProfile::new(ServiceType::Normal, CallType::VideoTwoWay);
//! profile.set_call_extra_bool(keys::CONFERENCE, true);
//!
//! assert!(profile.call_extra_bool(keys::CONFERENCE));
//! assert_eq!(profile.call_extra_int(keys::OIR), -1);
//! assert!(profile.is_video_call());
//! ```

use std::fmt;

use crate::extras::{keys, CallExtras};
use crate::media::StreamMediaProfile;
use crate::types::{CallType, RestrictCause, ServiceType};
use crate::video::{self, VideoState};

/// Parameters of an IMS call
///
/// The extras bag is always present on a profile built with [`new`] or
/// [`Default`]. It can only be absent after [`take_call_extras`] or when a
/// peer sent a profile without one; getters then return their defaults and
/// setters do nothing.
///
/// [`new`]: CallProfile::new
/// [`take_call_extras`]: CallProfile::take_call_extras
#[derive(Debug, Clone, PartialEq)]
pub struct CallProfile {
    service_type: ServiceType,
    call_type: CallType,
    restrict_cause: RestrictCause,
    call_extras: Option<CallExtras>,
    media_profile: StreamMediaProfile,
}

impl Default for CallProfile {
    fn default() -> Self {
        Self::new(ServiceType::Normal, CallType::VoiceAndVideo)
    }
}

impl CallProfile {
    /// Create a profile with the given service and call type
    pub fn new(service_type: ServiceType, call_type: CallType) -> Self {
        Self {
            service_type,
            call_type,
            restrict_cause: RestrictCause::None,
            call_extras: Some(CallExtras::new()),
            media_profile: StreamMediaProfile::default(),
        }
    }

    pub(crate) fn from_parts(
        service_type: ServiceType,
        call_type: CallType,
        call_extras: Option<CallExtras>,
        media_profile: StreamMediaProfile,
    ) -> Self {
        Self {
            service_type,
            call_type,
            restrict_cause: RestrictCause::None,
            call_extras,
            media_profile,
        }
    }

    /// Set the restrict cause
    pub fn with_restrict_cause(mut self, restrict_cause: RestrictCause) -> Self {
        self.restrict_cause = restrict_cause;
        self
    }

    /// Replace the media profile
    pub fn with_media_profile(mut self, media_profile: StreamMediaProfile) -> Self {
        self.media_profile = media_profile;
        self
    }

    /// Replace the extras bag
    pub fn with_call_extras(mut self, call_extras: CallExtras) -> Self {
        self.call_extras = Some(call_extras);
        self
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn call_type(&self) -> CallType {
        self.call_type
    }

    pub fn restrict_cause(&self) -> RestrictCause {
        self.restrict_cause
    }

    pub fn call_extras(&self) -> Option<&CallExtras> {
        self.call_extras.as_ref()
    }

    pub fn call_extras_mut(&mut self) -> Option<&mut CallExtras> {
        self.call_extras.as_mut()
    }

    /// Move the extras bag out, leaving the profile without one
    pub fn take_call_extras(&mut self) -> Option<CallExtras> {
        self.call_extras.take()
    }

    pub fn media_profile(&self) -> &StreamMediaProfile {
        &self.media_profile
    }

    pub fn media_profile_mut(&mut self) -> &mut StreamMediaProfile {
        &mut self.media_profile
    }

    // ===== Extras accessors =====

    /// String extra, or `""` if missing or not a string
    pub fn call_extra(&self, key: &str) -> String {
        self.call_extra_or(key, "")
    }

    pub fn call_extra_or(&self, key: &str, default: &str) -> String {
        match &self.call_extras {
            Some(extras) => extras.get_string_or(key, default),
            None => default.to_string(),
        }
    }

    /// Boolean extra, or `false` if missing or not a bool
    pub fn call_extra_bool(&self, key: &str) -> bool {
        self.call_extra_bool_or(key, false)
    }

    pub fn call_extra_bool_or(&self, key: &str, default: bool) -> bool {
        self.call_extras
            .as_ref()
            .map_or(default, |extras| extras.get_bool_or(key, default))
    }

    /// Integer extra, or `-1` if missing or not an int
    pub fn call_extra_int(&self, key: &str) -> i32 {
        self.call_extra_int_or(key, -1)
    }

    pub fn call_extra_int_or(&self, key: &str, default: i32) -> i32 {
        self.call_extras
            .as_ref()
            .map_or(default, |extras| extras.get_int_or(key, default))
    }

    pub fn set_call_extra(&mut self, key: &str, value: impl Into<String>) {
        if let Some(extras) = self.call_extras.as_mut() {
            extras.insert(key, value.into());
        }
    }

    pub fn set_call_extra_bool(&mut self, key: &str, value: bool) {
        if let Some(extras) = self.call_extras.as_mut() {
            extras.insert(key, value);
        }
    }

    pub fn set_call_extra_int(&mut self, key: &str, value: i32) {
        if let Some(extras) = self.call_extras.as_mut() {
            extras.insert(key, value);
        }
    }

    /// Radio technology tag, accepting either spelling of the key
    pub fn call_radio_tech(&self) -> Option<&str> {
        let extras = self.call_extras.as_ref()?;
        extras
            .get_str(keys::CALL_RAT_TYPE)
            .or_else(|| extras.get_str(keys::CALL_RAT_TYPE_ALT))
    }

    // ===== Updates from another profile =====

    /// Copy only the call type from `other`
    pub fn update_call_type(&mut self, other: &CallProfile) {
        self.call_type = other.call_type;
    }

    /// Replace this profile's extras with a deep copy of `other`'s
    ///
    /// If `other` has no extras bag this profile gets an empty one.
    pub fn update_call_extras(&mut self, other: &CallProfile) {
        self.call_extras = Some(other.call_extras.clone().unwrap_or_default());
    }

    // ===== Video =====

    /// Video is paused when the video stream is negotiated but inactive
    pub fn is_video_paused(&self) -> bool {
        self.media_profile.is_video_paused()
    }

    /// Whether the call type carries video in either direction
    pub fn is_video_call(&self) -> bool {
        video::call_type_to_video_state(self.call_type).is_video()
    }

    /// Video state of this profile, see [`video::profile_to_video_state`]
    pub fn video_state(&self) -> VideoState {
        video::profile_to_video_state(self)
    }
}

impl fmt::Display for CallProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ serviceType={}, callType={}, restrictCause={}, mediaProfile={} }}",
            self.service_type.code(),
            self.call_type.code(),
            self.restrict_cause.code(),
            self.media_profile,
        )
    }
}
