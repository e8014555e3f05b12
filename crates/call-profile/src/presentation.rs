//! Identity presentation translation
//!
//! Network signaling describes caller identity presentation with
//! [`Presentation`]. The call profile stores the originating identity
//! restriction rule ([`OirPresentation`]) under the `oir` and `cnap` extras.
//!
//! The two directions do not share a fallback: unmapped presentation codes
//! become [`OirPresentation::Default`], unmapped OIR codes (including
//! `Default` itself) become [`Presentation::Unknown`]. So `Default` never
//! survives a round trip.

coded_enum! {
    /// Number presentation as signaled by the network
    pub enum Presentation ("presentation") {
        /// Identity may be shown
        Allowed = 1,
        /// Identity withheld
        Restricted = 2,
        /// Identity not available
        Unknown = 3,
        /// Call from a payphone
        Payphone = 4,
    }
}

coded_enum! {
    /// Originating identity restriction rule
    pub enum OirPresentation ("oir") {
        /// Subscription default
        Default = 0,
        /// Presentation restricted
        Restricted = 1,
        /// Presentation not restricted
        NotRestricted = 2,
        /// Presentation unknown
        Unknown = 3,
        /// Payphone presentation
        Payphone = 4,
    }
}

impl Default for OirPresentation {
    fn default() -> Self {
        Self::Default
    }
}

/// Translate a network presentation code into an OIR rule
pub fn presentation_to_oir(presentation: i32) -> OirPresentation {
    match Presentation::from_code(presentation) {
        Some(Presentation::Restricted) => OirPresentation::Restricted,
        Some(Presentation::Allowed) => OirPresentation::NotRestricted,
        Some(Presentation::Payphone) => OirPresentation::Payphone,
        Some(Presentation::Unknown) => OirPresentation::Unknown,
        None => OirPresentation::Default,
    }
}

/// Older name of [`presentation_to_oir`], same behavior
#[deprecated(note = "use `presentation_to_oir`")]
pub fn presentation_to_oir_rule(presentation: i32) -> OirPresentation {
    presentation_to_oir(presentation)
}

/// Translate an OIR code into a network presentation
pub fn oir_to_presentation(oir: i32) -> Presentation {
    match OirPresentation::from_code(oir) {
        Some(OirPresentation::Restricted) => Presentation::Restricted,
        Some(OirPresentation::NotRestricted) => Presentation::Allowed,
        Some(OirPresentation::Payphone) => Presentation::Payphone,
        Some(OirPresentation::Unknown) => Presentation::Unknown,
        Some(OirPresentation::Default) | None => Presentation::Unknown,
    }
}

impl From<Presentation> for OirPresentation {
    fn from(presentation: Presentation) -> Self {
        presentation_to_oir(presentation.code())
    }
}

impl From<OirPresentation> for Presentation {
    fn from(oir: OirPresentation) -> Self {
        oir_to_presentation(oir.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_forward_mapping() {
        assert_eq!(presentation_to_oir(2), OirPresentation::Restricted);
        assert_eq!(presentation_to_oir(1), OirPresentation::NotRestricted);
        assert_eq!(presentation_to_oir(4), OirPresentation::Payphone);
        assert_eq!(presentation_to_oir(3), OirPresentation::Unknown);
        assert_eq!(presentation_to_oir(0), OirPresentation::Default);
        assert_eq!(presentation_to_oir(99), OirPresentation::Default);
    }

    #[test]
    fn test_reverse_mapping() {
        assert_eq!(oir_to_presentation(1), Presentation::Restricted);
        assert_eq!(oir_to_presentation(2), Presentation::Allowed);
        assert_eq!(oir_to_presentation(4), Presentation::Payphone);
        assert_eq!(oir_to_presentation(3), Presentation::Unknown);
        assert_eq!(oir_to_presentation(-5), Presentation::Unknown);
    }

    #[test]
    fn test_default_falls_back_to_unknown() {
        // Asymmetric fallbacks: Default -> Unknown, never back to Default.
        assert_eq!(oir_to_presentation(OirPresentation::Default.code()), Presentation::Unknown);
        let round_trip = oir_to_presentation(presentation_to_oir(42).code());
        assert_eq!(round_trip, Presentation::Unknown);
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_name_matches() {
        for code in -2..8 {
            assert_eq!(presentation_to_oir_rule(code), presentation_to_oir(code));
        }
    }

    #[test]
    fn test_typed_conversions_round_trip() {
        for presentation in Presentation::ALL {
            let oir = OirPresentation::from(*presentation);
            assert_eq!(Presentation::from(oir), *presentation);
        }
    }

    proptest! {
        #[test]
        fn forward_is_total(code in any::<i32>()) {
            let oir = presentation_to_oir(code);
            if Presentation::from_code(code).is_none() {
                prop_assert_eq!(oir, OirPresentation::Default);
            }
        }

        #[test]
        fn reverse_never_returns_allowed_for_unmapped(code in any::<i32>()) {
            let presentation = oir_to_presentation(code);
            if !(1..=4).contains(&code) {
                prop_assert_eq!(presentation, Presentation::Unknown);
            }
        }
    }
}
