//! Extras sanitizer
//!
//! Runs on the encode path before extras leave the process. Scalars,
//! arrays and nested bundles are always transport-safe; opaque objects are
//! kept only when their type name lies in an approved system namespace.
//! Nested bundles are filtered recursively rather than dropped.

use std::borrow::Cow;
use tracing::info;

use super::{CallExtras, ExtraValue};
use crate::config::SanitizerConfig;

fn is_transport_safe(value: &ExtraValue, policy: &SanitizerConfig) -> bool {
    match value {
        ExtraValue::Object(object) => policy.is_system_type(&object.type_name),
        ExtraValue::Bundle(nested) => all_transport_safe(nested, policy),
        _ => true,
    }
}

fn all_transport_safe(extras: &CallExtras, policy: &SanitizerConfig) -> bool {
    extras.iter().all(|(_, value)| is_transport_safe(value, policy))
}

fn filter_values(extras: &CallExtras, policy: &SanitizerConfig) -> CallExtras {
    let mut filtered = CallExtras::new();
    for (key, value) in extras {
        match value {
            ExtraValue::Object(object) if !policy.is_system_type(&object.type_name) => {}
            ExtraValue::Bundle(nested) => {
                filtered.insert(key.clone(), filter_values(nested, policy));
            }
            other => {
                filtered.insert(key.clone(), other.clone());
            }
        }
    }
    filtered
}

/// Strip values that may not cross the transport
///
/// Returns the input itself when every value is transport-safe. Otherwise
/// returns a filtered copy and logs how many top-level entries were
/// removed. The removed keys are not reported.
pub fn sanitize<'a>(extras: &'a CallExtras, policy: &SanitizerConfig) -> Cow<'a, CallExtras> {
    if all_transport_safe(extras, policy) {
        return Cow::Borrowed(extras);
    }

    let start_size = extras.len();
    let filtered = filter_values(extras, policy);
    let end_size = filtered.len();
    if start_size != end_size {
        info!(
            removed = start_size - end_size,
            "sanitize: {} extra values were removed - only primitive types and system objects are permitted",
            start_size - end_size
        );
    }
    Cow::Owned(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extras::OpaqueObject;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn vendor_object() -> OpaqueObject {
        OpaqueObject::new("com.vendor.CallTrace", vec![0xde_u8, 0xad])
    }

    fn system_object() -> OpaqueObject {
        OpaqueObject::new("ims.RtpHeaderExtension", vec![0x01_u8])
    }

    #[test]
    fn test_all_valid_returns_same_reference() {
        let extras = CallExtras::new()
            .with("conference", true)
            .with("oir", 2)
            .with("cna", "Alice")
            .with("ids", vec![1_i64, 2])
            .with("ext", system_object());

        let sanitized = sanitize(&extras, &SanitizerConfig::default());
        match &sanitized {
            Cow::Borrowed(borrowed) => assert!(std::ptr::eq(*borrowed, &extras)),
            Cow::Owned(_) => panic!("expected the input to be returned unchanged"),
        }
        assert_eq!(*sanitized, extras);
    }

    #[traced_test]
    #[test]
    fn test_removes_invalid_entries_and_reports_count() {
        let extras = CallExtras::new()
            .with("conference", true)
            .with("cna", "Alice")
            .with("oir", 1)
            .with("trace", vendor_object())
            .with("debug", OpaqueObject::new("org.example.Debug", Vec::<u8>::new()));

        let sanitized = sanitize(&extras, &SanitizerConfig::default());
        assert!(matches!(sanitized, Cow::Owned(_)));
        assert_eq!(sanitized.len(), 3);
        assert!(!sanitized.contains_key("trace"));
        assert!(!sanitized.contains_key("debug"));
        assert!(logs_contain("2 extra values were removed"));
    }

    #[traced_test]
    #[test]
    fn test_nested_bundles_are_filtered_not_dropped() {
        let nested = CallExtras::new()
            .with("carrier.mode", 1)
            .with("carrier.blob", vendor_object());
        let extras = CallExtras::new().with("OemCallExtras", nested);

        let sanitized = sanitize(&extras, &SanitizerConfig::default());
        assert_eq!(sanitized.len(), 1);
        let inner = sanitized.get_bundle("OemCallExtras").unwrap();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner.get_int("carrier.mode"), Some(1));
        // Nothing removed at the top level, so nothing reported
        assert!(!logs_contain("extra values were removed"));
    }

    #[test]
    fn test_policy_controls_namespaces() {
        let extras = CallExtras::new().with("trace", vendor_object());
        let policy = SanitizerConfig::with_namespaces(["com.vendor."]);
        assert!(matches!(sanitize(&extras, &policy), Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_extras() {
        let extras = CallExtras::new();
        assert!(matches!(
            sanitize(&extras, &SanitizerConfig::default()),
            Cow::Borrowed(_)
        ));
    }
}
