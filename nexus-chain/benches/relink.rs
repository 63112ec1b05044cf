//! Benchmarks for buffer-based relinking.
//!
//! Run: cargo bench -p nexus-chain --bench relink

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nexus_chain::{chain, fixture, relink, relink_buffer, Buffer, FixedStorage, Node};

fn chain_of(len: usize) -> (FixedStorage<Node>, u32) {
    let names: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut storage = FixedStorage::with_capacity(len);
    let head = fixture::build_chain(&mut storage, &names).unwrap();
    (storage, head)
}

fn bench_relink(c: &mut Criterion) {
    let mut group = c.benchmark_group("relink");

    for len in [5usize, 64, 4096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("snapshot_and_link", len), &len, |b, &len| {
            let (mut storage, head) = chain_of(len);
            let mut buffer = Buffer::with_capacity(len);
            b.iter(|| black_box(relink(&mut storage, &mut buffer, black_box(head), len).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("from_buffer", len), &len, |b, &len| {
            let (mut storage, head) = chain_of(len);
            let mut buffer = Buffer::with_capacity(len);
            relink(&mut storage, &mut buffer, head, len).unwrap();
            b.iter(|| black_box(relink_buffer(&mut storage, &buffer).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("traverse", len), &len, |b, &len| {
            let (storage, head) = chain_of(len);
            b.iter(|| black_box(chain::iter(&storage, black_box(head)).count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_relink);
criterion_main!(benches);
