//! Type helper contract.

use crate::fragment::{Direction, HandlerOutcome};
use fieldcodec_types::TypeDescriptor;

/// Trait for producing serialization code for the types a helper covers.
///
/// Both operations are pure: the outcome depends only on the arguments and
/// on configuration captured when the helper was built. "Not applicable"
/// is reported as [`HandlerOutcome::Declined`], never as an error.
pub trait TypeHelper: Send + Sync {
    /// Returns an expression encoding `expression` (of static type
    /// `target_type`) into its wire representation.
    ///
    /// # Arguments
    /// * `target_type` - Static type of the value
    /// * `expression` - Expression producing the value
    fn serialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome;

    /// Returns an expression building a `target_type` value from the decoded
    /// wire value `expression`.
    ///
    /// # Arguments
    /// * `target_type` - Type to construct
    /// * `expression` - Expression producing the decoded wire value
    fn deserialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome;

    /// Invokes the operation matching `direction`.
    fn apply(
        &self,
        direction: Direction,
        target_type: &TypeDescriptor,
        expression: &str,
    ) -> HandlerOutcome {
        match direction {
            Direction::Serialize => self.serialize(target_type, expression),
            Direction::Deserialize => self.deserialize(target_type, expression),
        }
    }

    /// Short name used in diagnostics: the type's last path segment,
    /// without generic arguments.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or("helper")
    }
}

/// Wrapper to turn a pair of closures into a [`TypeHelper`].
pub struct FnHelper<S, D> {
    name: String,
    serialize: S,
    deserialize: D,
}

impl<S, D> FnHelper<S, D>
where
    S: Fn(&TypeDescriptor, &str) -> HandlerOutcome + Send + Sync,
    D: Fn(&TypeDescriptor, &str) -> HandlerOutcome + Send + Sync,
{
    /// Creates a new closure helper.
    pub fn new(name: impl Into<String>, serialize: S, deserialize: D) -> Self {
        Self {
            name: name.into(),
            serialize,
            deserialize,
        }
    }
}

impl<S, D> TypeHelper for FnHelper<S, D>
where
    S: Fn(&TypeDescriptor, &str) -> HandlerOutcome + Send + Sync,
    D: Fn(&TypeDescriptor, &str) -> HandlerOutcome + Send + Sync,
{
    fn serialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome {
        (self.serialize)(target_type, expression)
    }

    fn deserialize(&self, target_type: &TypeDescriptor, expression: &str) -> HandlerOutcome {
        (self.deserialize)(target_type, expression)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri_helper() -> impl TypeHelper {
        FnHelper::new(
            "uri",
            |ty: &TypeDescriptor, expr: &str| {
                if ty.name == "Uri" {
                    HandlerOutcome::accept(format!("{}?.toString()", expr))
                } else {
                    HandlerOutcome::Declined
                }
            },
            |ty: &TypeDescriptor, expr: &str| {
                if ty.name == "Uri" {
                    HandlerOutcome::accept(format!("Uri.parse({} as String)", expr))
                } else {
                    HandlerOutcome::Declined
                }
            },
        )
    }

    #[test]
    fn test_fn_helper_dispatch() {
        let helper = uri_helper();
        let uri = TypeDescriptor::named("Uri");

        assert_eq!(
            helper.apply(Direction::Serialize, &uri, "link"),
            HandlerOutcome::accept("link?.toString()")
        );
        assert_eq!(
            helper.apply(Direction::Deserialize, &uri, "json['link']"),
            HandlerOutcome::accept("Uri.parse(json['link'] as String)")
        );
        assert_eq!(helper.name(), "uri");
    }

    #[test]
    fn test_fn_helper_declines() {
        let helper = uri_helper();
        let other = TypeDescriptor::named("Url");
        assert_eq!(helper.serialize(&other, "x"), HandlerOutcome::Declined);
        assert_eq!(helper.deserialize(&other, "x"), HandlerOutcome::Declined);
    }

    #[test]
    fn test_asymmetric_helper() {
        let helper = FnHelper::new(
            "write_only",
            |_: &TypeDescriptor, expr: &str| HandlerOutcome::accept(expr),
            |_: &TypeDescriptor, _: &str| HandlerOutcome::Declined,
        );
        let ty = TypeDescriptor::named("Secret");
        assert!(helper.serialize(&ty, "s").is_accepted());
        assert!(!helper.deserialize(&ty, "s").is_accepted());
    }

    struct Unit;

    impl TypeHelper for Unit {
        fn serialize(&self, _: &TypeDescriptor, _: &str) -> HandlerOutcome {
            HandlerOutcome::Declined
        }

        fn deserialize(&self, _: &TypeDescriptor, _: &str) -> HandlerOutcome {
            HandlerOutcome::Declined
        }
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Unit.name(), "Unit");
    }

    struct Wrap<T>(T);

    impl<T: Send + Sync> TypeHelper for Wrap<T> {
        fn serialize(&self, _: &TypeDescriptor, _: &str) -> HandlerOutcome {
            HandlerOutcome::Declined
        }

        fn deserialize(&self, _: &TypeDescriptor, _: &str) -> HandlerOutcome {
            HandlerOutcome::Declined
        }
    }

    #[test]
    fn test_default_name_strips_generic_arguments() {
        assert_eq!(Wrap(Unit).name(), "Wrap");
        assert_eq!(Wrap(std::collections::HashMap::<String, u8>::new()).name(), "Wrap");
    }
}
