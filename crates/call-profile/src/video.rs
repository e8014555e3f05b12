//! Video state translation
//!
//! The call-display layer describes video as a bitmask of independent flags
//! (transmit, receive, paused). These functions translate between that
//! bitmask and [`CallType`]. The mapping is lossy: only voice and the three
//! directional video telephony types survive a round trip, every other call
//! type reads back as voice.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

use crate::profile::CallProfile;
use crate::types::CallType;

/// Video state bitmask
///
/// Any `i32` is a valid video state; bits outside the known flags are kept
/// but ignored by the translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoState(i32);

impl VideoState {
    /// No video in either direction
    pub const AUDIO_ONLY: Self = Self(0x0);
    /// Video transmission enabled
    pub const TX_ENABLED: Self = Self(0x1);
    /// Video reception enabled
    pub const RX_ENABLED: Self = Self(0x2);
    /// Video in both directions
    pub const BIDIRECTIONAL: Self = Self(0x3);
    /// Video paused
    pub const PAUSED: Self = Self(0x4);

    /// Build from raw bits, keeping any unknown bits
    pub const fn from_bits_retain(bits: i32) -> Self {
        Self(bits)
    }

    /// Raw bits
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Whether every bit of `flag` is set
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Neither transmit nor receive is enabled
    pub const fn is_audio_only(self) -> bool {
        !self.contains(Self::TX_ENABLED) && !self.contains(Self::RX_ENABLED)
    }

    /// Transmit or receive is enabled
    pub const fn is_video(self) -> bool {
        self.contains(Self::TX_ENABLED) || self.contains(Self::RX_ENABLED)
    }

    /// Both transmit and receive are enabled
    pub const fn is_bidirectional(self) -> bool {
        self.contains(Self::BIDIRECTIONAL)
    }

    /// The paused flag is set
    pub const fn is_paused(self) -> bool {
        self.contains(Self::PAUSED)
    }
}

impl BitOr for VideoState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VideoState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for VideoState {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for VideoState {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Display for VideoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_audio_only() {
            write!(f, "Audio")?;
        } else {
            if self.contains(Self::TX_ENABLED) {
                write!(f, "Tx")?;
            }
            if self.contains(Self::RX_ENABLED) {
                write!(f, "Rx")?;
            }
        }
        if self.is_paused() {
            write!(f, " Paused")?;
        }
        Ok(())
    }
}

/// Translate a call type into a video state
///
/// Only the three directional video telephony types carry video bits.
/// `VideoNoDirection`, the VideoShare types and the voice/video upgradable
/// types all map to audio-only.
pub fn call_type_to_video_state(call_type: CallType) -> VideoState {
    match call_type {
        CallType::VideoTxOnly => VideoState::TX_ENABLED,
        CallType::VideoRxOnly => VideoState::RX_ENABLED,
        CallType::VideoTwoWay => VideoState::BIDIRECTIONAL,
        CallType::Voice => VideoState::AUDIO_ONLY,
        _ => VideoState::AUDIO_ONLY,
    }
}

/// Translate a raw call-type code into a video state
///
/// Codes that are not a known call type map to audio-only.
pub fn call_type_code_to_video_state(code: i32) -> VideoState {
    CallType::from_code(code)
        .map(call_type_to_video_state)
        .unwrap_or(VideoState::AUDIO_ONLY)
}

/// Video state of a profile, taking paused media into account
///
/// The paused flag is set only when the media profile's video direction is
/// inactive and the call type has video bits; an audio-only call is never
/// reported as paused.
pub fn profile_to_video_state(profile: &CallProfile) -> VideoState {
    let state = call_type_to_video_state(profile.call_type());
    if profile.is_video_paused() && !state.is_audio_only() {
        state | VideoState::PAUSED
    } else {
        state & !VideoState::PAUSED
    }
}

/// Translate a video state into a call type
///
/// Paused wins over the direction bits, so `TX_ENABLED | PAUSED` is
/// `VideoNoDirection`.
pub fn video_state_to_call_type(state: VideoState) -> CallType {
    let tx = state.contains(VideoState::TX_ENABLED);
    let rx = state.contains(VideoState::RX_ENABLED);

    if state.is_paused() {
        CallType::VideoNoDirection
    } else if tx && !rx {
        CallType::VideoTxOnly
    } else if rx && !tx {
        CallType::VideoRxOnly
    } else if tx && rx {
        CallType::VideoTwoWay
    } else {
        CallType::Voice
    }
}
