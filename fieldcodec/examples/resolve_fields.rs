//! Resolves the serializer and deserializer of a small class.
//!
//! Run with: `RUST_LOG=debug cargo run --example resolve_fields`

use fieldcodec::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let chain = ChainBuilder::new().with_defaults().build();
    let resolver = FieldResolver::new(
        &chain,
        ResolverConfig::new().unsupported(UnsupportedPolicy::Skip),
    );

    let customer = TypeDescriptor::named("Customer")
        .in_library("package:shop/customer.dart")
        .with_constructor(
            ConstructorDef::new("fromJson")
                .with_parameter(ParameterDef::new("json", "Map<String, dynamic>")),
        );
    let fields = [
        ("customer", customer),
        ("placedAt", well_known::date_time()),
        ("note", well_known::string()),
    ];

    println!("Map<String, dynamic> toJson() => {{");
    for (name, ty) in &fields {
        if let Some(code) = resolver.resolve_field(name, ty, Direction::Serialize, name)? {
            println!("  '{}': {},", name, code);
        }
    }
    println!("}};");

    println!();
    println!("Order.fromJson(Map<String, dynamic> json) : this(");
    for (name, ty) in &fields {
        let source = format!("json['{}']", name);
        if let Some(code) = resolver.resolve_field(name, ty, Direction::Deserialize, &source)? {
            println!("  {}: {},", name, code);
        }
    }
    println!(");");

    Ok(())
}
