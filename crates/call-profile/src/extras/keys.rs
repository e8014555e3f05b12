//! Well-known extras keys
//!
//! The key strings are part of the interface with the telephony middle
//! layer and are matched exactly, including case.

// Boolean extras
/// The session is a conference call
pub const CONFERENCE: &str = "conference";
/// The session is an emergency call
pub const E_CALL: &str = "e_call";
/// The session is connected to the voice mail system
pub const VMS: &str = "vms";
/// Video can be upgraded/downgraded during the voice call
pub const CALL_MODE_CHANGEABLE: &str = "call_mode_changeable";
/// The session can be extended to a conference
pub const CONFERENCE_AVAIL: &str = "conference_avail";
/// The call is a pulled call
pub const IS_CALL_PULL: &str = "CallPull";

// Integer extras holding presentation rules and dial string kind
/// Originating identity (number) presentation rule, an OIR code
pub const OIR: &str = "oir";
/// Calling name presentation rule, an OIR code
pub const CNAP: &str = "cnap";
/// Dial string kind of a mobile-originated call
pub const DIALSTRING: &str = "dialstring";

// String extras
/// Originating identity (number), mobile-terminated only
pub const OI: &str = "oi";
/// Calling name
pub const CNA: &str = "cna";
/// Network-initiated USSD text, mobile-terminated only
pub const USSD: &str = "ussd";
/// Connected user identity
pub const REMOTE_URI: &str = "remote_uri";
pub const CHILD_NUMBER: &str = "ChildNum";
pub const CODEC: &str = "Codec";
pub const DISPLAY_TEXT: &str = "DisplayText";
pub const ADDITIONAL_CALL_INFO: &str = "AdditionalCallInfo";

/// Radio technology of the call, as a decimal string (e.g. `"14"`)
pub const CALL_RAT_TYPE: &str = "CallRadioTech";
/// Lowercase variant of [`CALL_RAT_TYPE`] sent by some modems; read only
pub const CALL_RAT_TYPE_ALT: &str = "callRadioTech";

/// Nested bundle reserved for vendor extras
pub const OEM_EXTRAS: &str = "OemCallExtras";

/// Every well-known key
pub const ALL: &[&str] = &[
    CONFERENCE,
    E_CALL,
    VMS,
    CALL_MODE_CHANGEABLE,
    CONFERENCE_AVAIL,
    IS_CALL_PULL,
    OIR,
    CNAP,
    DIALSTRING,
    OI,
    CNA,
    USSD,
    REMOTE_URI,
    CHILD_NUMBER,
    CODEC,
    DISPLAY_TEXT,
    ADDITIONAL_CALL_INFO,
    CALL_RAT_TYPE,
    CALL_RAT_TYPE_ALT,
    OEM_EXTRAS,
];

/// Whether `key` carries defined semantics
pub fn is_well_known(key: &str) -> bool {
    ALL.contains(&key)
}
