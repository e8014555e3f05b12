//! Typed view of the well-known extras
//!
//! [`WellKnownExtras`] lifts every well-known key out of a [`CallExtras`]
//! bag into a named, typed field and keeps everything else in `residual`.
//! A well-known key whose value has the wrong kind (or an integer that is
//! not a valid code) stays in `residual` untouched, so building the view
//! never loses data.

use super::keys;
use super::{CallExtras, ExtraValue};
use crate::presentation::OirPresentation;
use crate::types::DialString;

/// Well-known call extras as typed fields plus the remaining entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WellKnownExtras {
    pub conference: Option<bool>,
    pub emergency_call: Option<bool>,
    pub voicemail: Option<bool>,
    pub call_mode_changeable: Option<bool>,
    pub conference_available: Option<bool>,
    pub call_pull: Option<bool>,

    /// Originating identity presentation rule
    pub oir: Option<OirPresentation>,
    /// Calling name presentation rule
    pub cnap: Option<OirPresentation>,
    pub dial_string: Option<DialString>,

    /// Originating identity (number)
    pub originating_identity: Option<String>,
    pub calling_name: Option<String>,
    pub ussd: Option<String>,
    pub remote_uri: Option<String>,
    pub child_number: Option<String>,
    pub codec: Option<String>,
    pub display_text: Option<String>,
    pub additional_call_info: Option<String>,
    /// Radio technology tag; read from either spelling of the key
    pub call_radio_tech: Option<String>,

    pub oem_extras: Option<CallExtras>,

    /// Entries that are not well-known, or well-known but mistyped
    pub residual: CallExtras,
}

fn take_bool(extras: &mut CallExtras, key: &str) -> Option<bool> {
    let value = extras.entries.get(key)?.as_bool()?;
    extras.remove(key);
    Some(value)
}

fn take_string(extras: &mut CallExtras, key: &str) -> Option<String> {
    match extras.entries.get(key) {
        Some(ExtraValue::String(_)) => match extras.remove(key) {
            Some(ExtraValue::String(value)) => Some(value),
            _ => None,
        },
        _ => None,
    }
}

fn take_code<T>(extras: &mut CallExtras, key: &str, from_code: fn(i32) -> Option<T>) -> Option<T> {
    let value = from_code(extras.entries.get(key)?.as_int()?)?;
    extras.remove(key);
    Some(value)
}

fn take_bundle(extras: &mut CallExtras, key: &str) -> Option<CallExtras> {
    match extras.entries.get(key) {
        Some(ExtraValue::Bundle(_)) => match extras.remove(key) {
            Some(ExtraValue::Bundle(value)) => Some(value),
            _ => None,
        },
        _ => None,
    }
}

impl WellKnownExtras {
    /// Split a bag into typed well-known fields and the residual entries
    pub fn from_extras(extras: &CallExtras) -> Self {
        let mut residual = extras.clone();

        let call_radio_tech = take_string(&mut residual, keys::CALL_RAT_TYPE)
            .or_else(|| take_string(&mut residual, keys::CALL_RAT_TYPE_ALT));

        Self {
            conference: take_bool(&mut residual, keys::CONFERENCE),
            emergency_call: take_bool(&mut residual, keys::E_CALL),
            voicemail: take_bool(&mut residual, keys::VMS),
            call_mode_changeable: take_bool(&mut residual, keys::CALL_MODE_CHANGEABLE),
            conference_available: take_bool(&mut residual, keys::CONFERENCE_AVAIL),
            call_pull: take_bool(&mut residual, keys::IS_CALL_PULL),
            oir: take_code(&mut residual, keys::OIR, OirPresentation::from_code),
            cnap: take_code(&mut residual, keys::CNAP, OirPresentation::from_code),
            dial_string: take_code(&mut residual, keys::DIALSTRING, DialString::from_code),
            originating_identity: take_string(&mut residual, keys::OI),
            calling_name: take_string(&mut residual, keys::CNA),
            ussd: take_string(&mut residual, keys::USSD),
            remote_uri: take_string(&mut residual, keys::REMOTE_URI),
            child_number: take_string(&mut residual, keys::CHILD_NUMBER),
            codec: take_string(&mut residual, keys::CODEC),
            display_text: take_string(&mut residual, keys::DISPLAY_TEXT),
            additional_call_info: take_string(&mut residual, keys::ADDITIONAL_CALL_INFO),
            call_radio_tech,
            oem_extras: take_bundle(&mut residual, keys::OEM_EXTRAS),
            residual,
        }
    }

    /// Write every present field into `extras` under its key
    ///
    /// Residual entries are not copied; use [`into_extras`](Self::into_extras)
    /// to rebuild a complete bag.
    pub fn apply_to(&self, extras: &mut CallExtras) {
        let flags = [
            (keys::CONFERENCE, self.conference),
            (keys::E_CALL, self.emergency_call),
            (keys::VMS, self.voicemail),
            (keys::CALL_MODE_CHANGEABLE, self.call_mode_changeable),
            (keys::CONFERENCE_AVAIL, self.conference_available),
            (keys::IS_CALL_PULL, self.call_pull),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                extras.insert(key, value);
            }
        }

        let codes = [
            (keys::OIR, self.oir.map(OirPresentation::code)),
            (keys::CNAP, self.cnap.map(OirPresentation::code)),
            (keys::DIALSTRING, self.dial_string.map(DialString::code)),
        ];
        for (key, value) in codes {
            if let Some(value) = value {
                extras.insert(key, value);
            }
        }

        let strings = [
            (keys::OI, &self.originating_identity),
            (keys::CNA, &self.calling_name),
            (keys::USSD, &self.ussd),
            (keys::REMOTE_URI, &self.remote_uri),
            (keys::CHILD_NUMBER, &self.child_number),
            (keys::CODEC, &self.codec),
            (keys::DISPLAY_TEXT, &self.display_text),
            (keys::ADDITIONAL_CALL_INFO, &self.additional_call_info),
            (keys::CALL_RAT_TYPE, &self.call_radio_tech),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                extras.insert(key, value.as_str());
            }
        }

        if let Some(oem) = &self.oem_extras {
            extras.insert(keys::OEM_EXTRAS, oem.clone());
        }
    }

    /// Rebuild a complete bag: residual entries plus the typed fields
    pub fn into_extras(self) -> CallExtras {
        let mut extras = self.residual.clone();
        self.apply_to(&mut extras);
        extras
    }
}
