//! Helper for types that provide their own `fromJson` factory.

use crate::fragment::HandlerOutcome;
use crate::helper::TypeHelper;
use fieldcodec_types::TypeDescriptor;
use fieldcodec_types::checker::{find_constructor, is_interface};

/// Name of the factory a type must declare to be handled.
pub const FROM_JSON: &str = "fromJson";

/// Coercion applied to the decoded wire value before it reaches `fromJson`.
pub const JSON_MAP_TYPE: &str = "Map<String, dynamic>";

/// Delegates conversion to the target type's own entry points.
///
/// Serialization passes the value through untouched: the JSON encoder calls
/// `toJson()` on objects it does not understand natively. Deserialization
/// calls the type's `fromJson` factory.
///
/// Known gaps, left unvalidated on purpose:
/// - the factory's arity and parameter type are not checked;
/// - the emitted type name is not qualified with its library, so two types
///   sharing a short name produce ambiguous code.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHelper;

impl JsonHelper {
    /// Creates a new JSON delegate helper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn applies_to(target_type: &TypeDescriptor) -> bool {
        // TODO: require exactly one parameter assignable from `Map<String, dynamic>`.
        is_interface(target_type) && find_constructor(target_type, FROM_JSON).is_some()
    }
}

impl TypeHelper for JsonHelper {
    fn serialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome {
        if !Self::applies_to(target_type) {
            return HandlerOutcome::Declined;
        }
        HandlerOutcome::accept(expression)
    }

    fn deserialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome {
        if !Self::applies_to(target_type) {
            return HandlerOutcome::Declined;
        }
        HandlerOutcome::accept(format!(
            "{}.{}({} as {})",
            target_type.name, FROM_JSON, expression, JSON_MAP_TYPE
        ))
    }

    fn name(&self) -> &str {
        "json"
    }
}
