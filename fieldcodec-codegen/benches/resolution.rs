//! Chain resolution benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use fieldcodec_codegen::{Direction, HandlerChain};
use fieldcodec_types::{ConstructorDef, TypeDescriptor, well_known};
use std::hint::black_box;

fn benchmark_first_helper(c: &mut Criterion) {
    let chain = HandlerChain::default_chain();
    let ty = TypeDescriptor::named("Foo").with_constructor(ConstructorDef::new("fromJson"));

    c.bench_function("resolve_first_helper", |b| {
        b.iter(|| chain.resolve(black_box(&ty), Direction::Deserialize, black_box("json")))
    });
}

fn benchmark_last_helper(c: &mut Criterion) {
    let chain = HandlerChain::default_chain();
    let ty = well_known::date_time();

    c.bench_function("resolve_last_helper", |b| {
        b.iter(|| chain.resolve(black_box(&ty), Direction::Serialize, black_box("at")))
    });
}

fn benchmark_unsupported(c: &mut Criterion) {
    let chain = HandlerChain::default_chain();
    let ty = well_known::string();

    c.bench_function("resolve_unsupported", |b| {
        b.iter(|| chain.resolve(black_box(&ty), Direction::Serialize, black_box("s")))
    });
}

criterion_group!(
    benches,
    benchmark_first_helper,
    benchmark_last_helper,
    benchmark_unsupported
);
criterion_main!(benches);
