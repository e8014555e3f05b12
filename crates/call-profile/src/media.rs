//! Stream media profile of an IMS call
//!
//! Audio/video quality and direction as negotiated for the call's media
//! streams (3GPP TS 26.114). A call profile owns exactly one of these.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

coded_enum! {
    /// Audio codec quality in use for the call
    pub enum AudioQuality ("audio quality") {
        /// No audio
        None = 0,
        /// AMR narrowband
        Amr = 1,
        /// AMR wideband
        AmrWb = 2,
        /// QCELP 13k
        Qcelp13k = 3,
        /// EVRC
        Evrc = 4,
        /// EVRC-B
        EvrcB = 5,
        /// EVRC wideband
        EvrcWb = 6,
        /// EVRC narrowband-wideband
        EvrcNw = 7,
        /// GSM enhanced full rate
        GsmEfr = 8,
        /// GSM full rate
        GsmFr = 9,
        /// GSM half rate
        GsmHr = 10,
        /// G.711 mu-law
        G711U = 11,
        /// G.723
        G723 = 12,
        /// G.711 A-law
        G711A = 13,
        /// G.722
        G722 = 14,
        /// G.711 A/mu-law
        G711Ab = 15,
        /// G.729
        G729 = 16,
        /// EVS narrowband
        EvsNb = 17,
        /// EVS wideband
        EvsWb = 18,
        /// EVS super wideband
        EvsSwb = 19,
        /// EVS fullband
        EvsFb = 20,
    }
}

impl Default for AudioQuality {
    fn default() -> Self {
        Self::None
    }
}

coded_enum! {
    /// Media stream direction
    pub enum MediaDirection ("media direction") {
        /// Direction not negotiated (no such stream)
        Invalid = -1,
        /// Inactive
        Inactive = 0,
        /// Receive only
        Receive = 1,
        /// Send only
        Send = 2,
        /// Send and receive
        SendReceive = 3,
    }
}

impl MediaDirection {
    /// SDP direction attribute for this direction, if it has one
    pub fn sdp_attribute(self) -> Option<&'static str> {
        match self {
            Self::Invalid => None,
            Self::Inactive => Some("inactive"),
            Self::Receive => Some("recvonly"),
            Self::Send => Some("sendonly"),
            Self::SendReceive => Some("sendrecv"),
        }
    }
}

coded_enum! {
    /// Real-time text mode
    pub enum RttMode ("rtt mode") {
        /// RTT off
        Disabled = 0,
        /// RTT on
        Full = 1,
    }
}

impl Default for RttMode {
    fn default() -> Self {
        Self::Disabled
    }
}

/// Video resolution bitmask
///
/// Several resolutions may be offered at once, so this is a set of flags
/// rather than an enumeration. Unknown bits are retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoQuality(i32);

impl VideoQuality {
    pub const NONE: Self = Self(0);
    pub const QCIF: Self = Self(1 << 0);
    pub const QVGA_LANDSCAPE: Self = Self(1 << 1);
    pub const QVGA_PORTRAIT: Self = Self(1 << 2);
    pub const VGA_LANDSCAPE: Self = Self(1 << 3);
    pub const VGA_PORTRAIT: Self = Self(1 << 4);

    /// Build from raw bits, keeping any unknown bits
    pub const fn from_bits_retain(bits: i32) -> Self {
        Self(bits)
    }

    /// Raw bits
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Whether every bit of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for VideoQuality {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VideoQuality {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Media profile of an IMS call's streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamMediaProfile {
    /// Audio codec quality
    pub audio_quality: AudioQuality,
    /// Audio stream direction
    pub audio_direction: MediaDirection,
    /// Offered/negotiated video resolutions
    pub video_quality: VideoQuality,
    /// Video stream direction
    pub video_direction: MediaDirection,
    /// Real-time text mode
    pub rtt_mode: RttMode,
}

impl Default for StreamMediaProfile {
    fn default() -> Self {
        Self {
            audio_quality: AudioQuality::None,
            audio_direction: MediaDirection::SendReceive,
            video_quality: VideoQuality::NONE,
            video_direction: MediaDirection::Invalid,
            rtt_mode: RttMode::Disabled,
        }
    }
}

impl StreamMediaProfile {
    /// Create a new media profile with RTT disabled
    pub fn new(
        audio_quality: AudioQuality,
        audio_direction: MediaDirection,
        video_quality: VideoQuality,
        video_direction: MediaDirection,
    ) -> Self {
        Self {
            audio_quality,
            audio_direction,
            video_quality,
            video_direction,
            rtt_mode: RttMode::Disabled,
        }
    }

    /// Set the RTT mode
    pub fn with_rtt_mode(mut self, rtt_mode: RttMode) -> Self {
        self.rtt_mode = rtt_mode;
        self
    }

    /// Video is paused when its stream is negotiated but inactive
    pub fn is_video_paused(&self) -> bool {
        self.video_direction == MediaDirection::Inactive
    }

    pub fn is_rtt_call(&self) -> bool {
        self.rtt_mode == RttMode::Full
    }
}

impl fmt::Display for StreamMediaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ audioQuality={}, audioDirection={}, videoQuality={}, videoDirection={}, rttMode={} }}",
            self.audio_quality.code(),
            self.audio_direction.code(),
            self.video_quality.bits(),
            self.video_direction.code(),
            self.rtt_mode.code(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = StreamMediaProfile::default();
        assert_eq!(profile.audio_direction, MediaDirection::SendReceive);
        assert_eq!(profile.video_direction, MediaDirection::Invalid);
        assert!(!profile.is_video_paused());
        assert!(!profile.is_rtt_call());
    }

    #[test]
    fn test_inactive_video_is_paused() {
        let profile = StreamMediaProfile::new(
            AudioQuality::AmrWb,
            MediaDirection::SendReceive,
            VideoQuality::VGA_LANDSCAPE,
            MediaDirection::Inactive,
        );
        assert!(profile.is_video_paused());
    }

    #[test]
    fn test_display_uses_codes() {
        let profile = StreamMediaProfile::new(
            AudioQuality::EvsSwb,
            MediaDirection::Send,
            VideoQuality::QCIF | VideoQuality::VGA_PORTRAIT,
            MediaDirection::Receive,
        )
        .with_rtt_mode(RttMode::Full);

        assert_eq!(
            profile.to_string(),
            "{ audioQuality=19, audioDirection=2, videoQuality=17, videoDirection=1, rttMode=1 }"
        );
    }

    #[test]
    fn test_video_quality_flags() {
        let mut quality = VideoQuality::NONE;
        assert!(quality.is_none());
        quality |= VideoQuality::QVGA_LANDSCAPE;
        assert!(quality.contains(VideoQuality::QVGA_LANDSCAPE));
        assert!(!quality.contains(VideoQuality::QVGA_PORTRAIT));
        assert_eq!(VideoQuality::from_bits_retain(0x40).bits(), 0x40);
    }

    #[test]
    fn test_sdp_attributes() {
        assert_eq!(MediaDirection::SendReceive.sdp_attribute(), Some("sendrecv"));
        assert_eq!(MediaDirection::Receive.sdp_attribute(), Some("recvonly"));
        assert_eq!(MediaDirection::Invalid.sdp_attribute(), None);
    }
}
