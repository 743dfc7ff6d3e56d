//! End-to-end resolution of a small class's fields through the chain.

use fieldcodec_codegen::{
    ChainBuilder, CodegenError, Direction, FieldResolver, FnHelper, HandlerChain, HandlerOutcome,
    Resolution, ResolverConfig, UnsupportedPolicy, resolve_default,
};
use fieldcodec_types::{ConstructorDef, ParameterDef, TypeChecker, TypeDescriptor, well_known};

fn address() -> TypeDescriptor {
    TypeDescriptor::named("Address")
        .in_library("package:shop/address.dart")
        .with_constructor(ConstructorDef::unnamed().with_parameter(ParameterDef::new("street", "String")))
        .with_constructor(
            ConstructorDef::new("fromJson")
                .with_parameter(ParameterDef::new("json", "Map<String, dynamic>")),
        )
}

fn duration() -> TypeDescriptor {
    TypeDescriptor::primitive("Duration").in_library("dart:core")
}

fn duration_helper() -> impl fieldcodec_codegen::TypeHelper {
    let checker = TypeChecker::from_type(&duration());
    let de_checker = checker.clone();
    FnHelper::new(
        "duration",
        move |ty: &TypeDescriptor, expr: &str| {
            if checker.is_exactly(ty) {
                HandlerOutcome::accept(format!("{}?.inMicroseconds", expr))
            } else {
                HandlerOutcome::Declined
            }
        },
        move |ty: &TypeDescriptor, expr: &str| {
            if de_checker.is_exactly(ty) {
                HandlerOutcome::accept(format!("Duration(microseconds: {} as int)", expr))
            } else {
                HandlerOutcome::Declined
            }
        },
    )
}

#[test]
fn test_class_fields_resolve() {
    let chain = ChainBuilder::new()
        .helper(duration_helper())
        .with_defaults()
        .build();
    let resolver = FieldResolver::new(&chain, ResolverConfig::default());

    let fields = [
        ("shipTo", address()),
        ("placedAt", well_known::date_time()),
        ("ttl", duration()),
    ];

    let encoded: Vec<String> = fields
        .iter()
        .map(|(name, ty)| {
            resolver
                .resolve_field(name, ty, Direction::Serialize, name)
                .unwrap()
                .unwrap()
                .into_string()
        })
        .collect();
    assert_eq!(
        encoded,
        vec![
            "shipTo".to_string(),
            "placedAt?.toIso8601String()".to_string(),
            "ttl?.inMicroseconds".to_string(),
        ]
    );

    let decoded: Vec<String> = fields
        .iter()
        .map(|(name, ty)| {
            let source = format!("json['{}']", name);
            resolver
                .resolve_field(name, ty, Direction::Deserialize, &source)
                .unwrap()
                .unwrap()
                .into_string()
        })
        .collect();
    assert_eq!(
        decoded,
        vec![
            "Address.fromJson(json['shipTo'] as Map<String, dynamic>)".to_string(),
            "DateTime.parse(json['placedAt'] as String)".to_string(),
            "Duration(microseconds: json['ttl'] as int)".to_string(),
        ]
    );
}

#[test]
fn test_unsupported_field_policies() {
    let chain = HandlerChain::default_chain();
    let tags = TypeDescriptor::named("Set").with_type_argument(well_known::string());

    let strict = FieldResolver::new(&chain, ResolverConfig::default());
    assert!(matches!(
        strict.resolve_field("tags", &tags, Direction::Serialize, "tags"),
        Err(CodegenError::Unsupported { .. })
    ));

    let lenient = FieldResolver::new(
        &chain,
        ResolverConfig::new().unsupported(UnsupportedPolicy::Skip),
    );
    assert_eq!(
        lenient
            .resolve_field("tags", &tags, Direction::Serialize, "tags")
            .unwrap(),
        None
    );
}

#[test]
fn test_resolve_default() {
    let resolution = resolve_default(&address(), Direction::Deserialize, "json").unwrap();
    assert_eq!(
        resolution.fragment().map(|f| f.as_str()),
        Some("Address.fromJson(json as Map<String, dynamic>)")
    );

    let bare = TypeDescriptor::named("Address");
    assert_eq!(
        resolve_default(&bare, Direction::Serialize, "a").unwrap(),
        Resolution::Unsupported
    );
    assert_eq!(
        resolve_default(&bare, Direction::Deserialize, "a").unwrap(),
        Resolution::Unsupported
    );
}
