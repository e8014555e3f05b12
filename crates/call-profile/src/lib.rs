//! # IMS Call Profile
//!
//! Parameters of a telephony call over an IP Multimedia Subsystem (IMS)
//! network, as exchanged between the telephony middle layer and
//! application-facing call control.
//!
//! ## Overview
//!
//! - [`CallProfile`]: service type, call type, restrict cause, an extras bag
//!   and the stream media profile
//! - [`video`]: call type <-> video state bitmask translation
//! - [`presentation`]: network presentation <-> originating identity
//!   restriction (OIR) translation
//! - [`extras`]: the extras bag, its well-known keys, a typed view and the
//!   sanitizer that strips values which may not cross a process boundary
//! - [`wire`]: a versioned binary form of a profile
//!
//! ## Usage
//!
//! ```rust
//! use ims_call_profile::{CallProfile, CallType, ServiceType, VideoState};
//! use ims_call_profile::extras::keys;
//! use ims_call_profile::presentation::{presentation_to_oir, Presentation};
//!
//! let mut profile = CallProfile::new(ServiceType::Normal, CallType::VideoTxOnly);
//! profile.set_call_extra_int(keys::OIR, presentation_to_oir(Presentation::Restricted.code()).code());
//! profile.set_call_extra(keys::CNA, "Alice");
//!
//! assert_eq!(profile.video_state(), VideoState::TX_ENABLED);
//!
//! let bytes = profile.to_wire()?;
//! let received = CallProfile::from_wire(&bytes)?;
//! assert_eq!(received.call_extra(keys::CNA), "Alice");
//! # Ok::<(), ims_call_profile::ProfileError>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing` and never installs a subscriber.

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod extras;
pub mod media;
pub mod presentation;
pub mod profile;
pub mod types;
pub mod video;
pub mod wire;

pub use config::{ProfileConfig, SanitizerConfig, WireConfig};
pub use error::{ErrorCategory, ProfileError, Result};
pub use extras::{CallExtras, ExtraValue, OpaqueObject, WellKnownExtras};
pub use media::{AudioQuality, MediaDirection, RttMode, StreamMediaProfile, VideoQuality};
pub use presentation::{OirPresentation, Presentation};
pub use profile::CallProfile;
pub use types::{CallType, DialString, RestrictCause, ServiceType};
pub use video::VideoState;
pub use wire::{ProfileCodec, WIRE_VERSION};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
