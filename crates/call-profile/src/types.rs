//! Core enumerations of a call profile
//!
//! Service type, call type, restrict cause and dial string. Codes follow
//! GSMA IR.92/IR.94 and 3GPP TS 24.229 usage and are what goes on the wire.

coded_enum! {
    /// Service type of an IMS call
    pub enum ServiceType ("service type") {
        /// Call placed without an IMS registration; the device connects to
        /// the IMS network at call initiation
        None = 0,
        /// Regular call over a registered IMS connection
        Normal = 1,
        /// Emergency call
        Emergency = 2,
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        Self::Normal
    }
}

coded_enum! {
    /// Call type of an IMS call
    ///
    /// The `Video*` variants are video telephony with two-way audio; the
    /// `VideoShare*` variants carry video only.
    pub enum CallType ("call type") {
        /// Voice with video upgrade/downgrade support (IR.92 + IR.94)
        VoiceAndVideo = 1,
        /// Voice only (IR.92)
        Voice = 2,
        /// Video with voice fallback (IR.92 + IR.94)
        VideoAndVoice = 3,
        /// Video telephony, video both ways
        VideoTwoWay = 4,
        /// Video telephony, video transmit only
        VideoTxOnly = 5,
        /// Video telephony, video receive only
        VideoRxOnly = 6,
        /// Video telephony, video inactive
        VideoNoDirection = 7,
        /// VideoShare, video both ways
        VideoShareTwoWay = 8,
        /// VideoShare, video transmit only
        VideoShareTx = 9,
        /// VideoShare, video receive only
        VideoShareRx = 10,
    }
}

impl Default for CallType {
    fn default() -> Self {
        Self::VoiceAndVideo
    }
}

impl CallType {
    /// Whether this is a VideoShare call type
    pub fn is_video_share(self) -> bool {
        matches!(
            self,
            Self::VideoShareTwoWay | Self::VideoShareTx | Self::VideoShareRx
        )
    }
}

coded_enum! {
    /// Cause restricting the call types available for a call
    pub enum RestrictCause ("restrict cause") {
        /// Not restricted at the peer, HD supported
        None = 0,
        /// Service not supported by the peer's radio access technology
        Rat = 1,
        /// Service disabled at the peer
        Disabled = 2,
        /// HD not supported
        Hd = 3,
    }
}

impl Default for RestrictCause {
    fn default() -> Self {
        Self::None
    }
}

coded_enum! {
    /// Kind of dial string for a mobile-originated call
    pub enum DialString ("dial string") {
        /// Normal call
        Normal = 0,
        /// SIP-based supplementary service configuration
        SsConf = 1,
        /// USSD message
        Ussd = 2,
    }
}

impl Default for DialString {
    fn default() -> Self {
        Self::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn test_codes_match_table() {
        assert_eq!(ServiceType::None.code(), 0);
        assert_eq!(ServiceType::Emergency.code(), 2);
        assert_eq!(CallType::VoiceAndVideo.code(), 1);
        assert_eq!(CallType::VideoTwoWay.code(), 4);
        assert_eq!(CallType::VideoShareRx.code(), 10);
        assert_eq!(RestrictCause::Hd.code(), 3);
        assert_eq!(DialString::Ussd.code(), 2);
    }

    #[test]
    fn test_from_code_covers_every_variant() {
        for call_type in CallType::ALL {
            assert_eq!(CallType::from_code(call_type.code()), Some(*call_type));
        }
        assert_eq!(CallType::ALL.len(), 10);
        assert_eq!(CallType::from_code(0), None);
        assert_eq!(CallType::from_code(11), None);
    }

    #[test]
    fn test_try_from_unknown_code() {
        let err = ServiceType::try_from(3).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::UnknownCode { kind: "service type", code: 3 }
        ));
        assert_eq!(RestrictCause::try_from(1).unwrap(), RestrictCause::Rat);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ServiceType::default(), ServiceType::Normal);
        assert_eq!(CallType::default(), CallType::VoiceAndVideo);
        assert_eq!(RestrictCause::default(), RestrictCause::None);
        assert_eq!(DialString::default(), DialString::Normal);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&CallType::VideoTxOnly).unwrap(), "5");
        let parsed: ServiceType = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, ServiceType::Emergency);
        assert!(serde_json::from_str::<ServiceType>("9").is_err());
    }

    #[test]
    fn test_video_share_variants() {
        assert!(CallType::VideoShareTx.is_video_share());
        assert!(!CallType::VideoTxOnly.is_video_share());
    }
}
