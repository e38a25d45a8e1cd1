//! # Asset Registry Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Canonical encoding | Encode and hash one asset document |
//! | Registry | Register a batch, then list the whole namespace |

use asset_registry::{Asset, AssetRegistryApi, InMemoryWorldState, RegistryService};
use canonical_encoding::{canonical_hash, to_canonical_bytes, ToCanonical, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn sold_asset() -> Asset {
    let mut asset = Asset::new("I00000", "Av de la Paloma 81", "C00000");
    asset.record_sale("55555D", 200_000.0);
    asset
}

fn bench_canonical_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical-encoding");
    let tree = sold_asset().to_value();

    group.bench_function("encode_asset", |b| {
        b.iter(|| black_box(to_canonical_bytes(black_box(&tree)).is_ok()))
    });

    group.bench_function("hash_asset", |b| {
        b.iter(|| black_box(canonical_hash(black_box(&tree)).is_ok()))
    });

    let bytes = to_canonical_bytes(&tree).unwrap_or_default();
    group.bench_function("parse_stored_asset", |b| {
        b.iter(|| black_box(Value::parse(black_box(&bytes)).is_ok()))
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("asset-registry");

    for size in [10_usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("register_batch", size), &size, |b, &size| {
            b.iter(|| {
                let mut registry = RegistryService::new(InMemoryWorldState::new());
                for i in 0..size {
                    let _ = registry.register(&format!("I{i:05}"), "direccion", "C00000");
                }
                black_box(registry.store().len())
            })
        });

        let mut registry = RegistryService::new(InMemoryWorldState::new());
        for i in 0..size {
            let _ = registry.register(&format!("I{i:05}"), "direccion", "C00000");
        }
        group.bench_with_input(BenchmarkId::new("list_all_json", size), &registry, |b, registry| {
            b.iter(|| black_box(registry.list_all_json().map(|json| json.len())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonical_encoding, bench_registry);
criterion_main!(benches);
