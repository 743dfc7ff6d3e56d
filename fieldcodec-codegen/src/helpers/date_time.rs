//! Fixed-format helper for the core date-time type.

use crate::fragment::HandlerOutcome;
use crate::helper::TypeHelper;
use fieldcodec_types::well_known::{CORE_LIBRARY, DATE_TIME};
use fieldcodec_types::{TypeChecker, TypeDescriptor};

/// Encodes date-times as ISO-8601 strings.
///
/// The helper owns the wire format: it never calls conversion methods
/// declared by the target type, so a subtype or a type that changes its own
/// JSON convention does not change what is emitted. Matching is exact; a
/// subtype of `DateTime` is declined. See [`crate::iso8601`] for the
/// host-side rendition of the same format.
#[derive(Debug, Clone)]
pub struct DateTimeHelper {
    checker: TypeChecker,
}

impl DateTimeHelper {
    /// Creates a helper for the core `DateTime` type.
    #[must_use]
    pub fn new() -> Self {
        Self::with_checker(TypeChecker::exact(CORE_LIBRARY, DATE_TIME))
    }

    /// Creates a helper for another date-time type with the same
    /// `toIso8601String`/`parse` surface.
    #[must_use]
    pub fn with_checker(checker: TypeChecker) -> Self {
        Self { checker }
    }
}

impl Default for DateTimeHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeHelper for DateTimeHelper {
    fn serialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome {
        if !self.checker.is_exactly(target_type) {
            return HandlerOutcome::Declined;
        }
        HandlerOutcome::accept(format!("{}?.toIso8601String()", expression))
    }

    fn deserialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome {
        if !self.checker.is_exactly(target_type) {
            return HandlerOutcome::Declined;
        }
        HandlerOutcome::accept(format!(
            "{}.parse({} as String)",
            self.checker.name(),
            expression
        ))
    }

    fn name(&self) -> &str {
        "date_time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso8601;
    use chrono::{TimeZone, Utc};
    use fieldcodec_types::{ConstructorDef, well_known};

    #[test]
    fn test_serialize_tolerates_null() {
        assert_eq!(
            DateTimeHelper::new().serialize(&well_known::date_time(), "createdAt"),
            HandlerOutcome::accept("createdAt?.toIso8601String()")
        );
    }

    #[test]
    fn test_deserialize_parses_string() {
        assert_eq!(
            DateTimeHelper::new().deserialize(&well_known::date_time(), "json['createdAt']"),
            HandlerOutcome::accept("DateTime.parse(json['createdAt'] as String)")
        );
    }

    #[test]
    fn test_declines_subtype() {
        let subtype = TypeDescriptor::named("UtcDateTime")
            .in_library("package:clock/clock.dart")
            .with_supertype(well_known::date_time());
        let helper = DateTimeHelper::new();
        assert_eq!(helper.serialize(&subtype, "x"), HandlerOutcome::Declined);
        assert_eq!(helper.deserialize(&subtype, "x"), HandlerOutcome::Declined);
    }

    #[test]
    fn test_declines_lookalike() {
        let lookalike = TypeDescriptor::named("DateTime")
            .in_library("package:fake/time.dart")
            .with_constructor(ConstructorDef::new("parse"));
        let helper = DateTimeHelper::new();
        assert_eq!(helper.serialize(&lookalike, "x"), HandlerOutcome::Declined);
        assert_eq!(helper.deserialize(&lookalike, "x"), HandlerOutcome::Declined);
    }

    #[test]
    fn test_declines_other_types() {
        let helper = DateTimeHelper::default();
        for ty in [well_known::string(), well_known::int(), well_known::dynamic()] {
            assert_eq!(helper.serialize(&ty, "x"), HandlerOutcome::Declined);
            assert_eq!(helper.deserialize(&ty, "x"), HandlerOutcome::Declined);
        }
    }

    #[test]
    fn test_with_checker() {
        let local = TypeDescriptor::named("LocalDate").in_library("package:time/time.dart");
        let helper = DateTimeHelper::with_checker(TypeChecker::from_type(&local));
        assert_eq!(
            helper.deserialize(&local, "v"),
            HandlerOutcome::accept("LocalDate.parse(v as String)")
        );
        assert_eq!(
            helper.serialize(&well_known::date_time(), "v"),
            HandlerOutcome::Declined
        );
    }

    #[test]
    fn test_composed_round_trip() {
        let helper = DateTimeHelper::new();
        let ty = well_known::date_time();

        let encoded = helper.serialize(&ty, "x").into_fragment().unwrap();
        let decoded = helper
            .deserialize(&ty, encoded.as_str())
            .into_fragment()
            .unwrap();
        assert_eq!(
            decoded.as_str(),
            "DateTime.parse(x?.toIso8601String() as String)"
        );

        let leap_day = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 15).unwrap();
        let utc_midnight = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let with_micros = utc_midnight + chrono::Duration::microseconds(123_456);
        for value in [leap_day, utc_midnight, with_micros] {
            let wire = iso8601::format_utc(&value);
            assert_eq!(iso8601::parse(&wire).unwrap(), value, "wire {}", wire);
        }
    }

    #[test]
    fn test_is_pure() {
        let helper = DateTimeHelper::new();
        let ty = well_known::date_time();
        assert_eq!(helper.serialize(&ty, "a"), helper.serialize(&ty, "a"));
        assert_eq!(helper.deserialize(&ty, "a"), helper.deserialize(&ty, "a"));
    }
}
