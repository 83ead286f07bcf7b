//! # Shared IP Benchmarks
//!
//! Hot paths for the networking layer:
//! - Ingestion of text and raw bytes
//! - Canonical IPv6 rendering
//! - Containment and classification checks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shared_ip::Address;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in [
        "192.168.1.1",
        "10.0.0.0/8",
        "fe80:dead:00be:00ef:0000:0000:0000:0001",
        "::ffff:192.0.2.1",
        "fc00::/7",
    ] {
        group.bench_with_input(BenchmarkId::new("text", input), input, |b, input| {
            b.iter(|| Address::parse_text(black_box(input)))
        });
    }

    let v4 = [127u8, 0, 0, 1];
    let v6 = [0xfeu8, 0x80, 0xde, 0xad, 0, 0xbe, 0, 0xef, 0, 0, 0, 0, 0, 0, 0, 1];
    group.bench_function("bytes/v4", |b| {
        b.iter(|| Address::parse_bytes(black_box(&v4)))
    });
    group.bench_function("bytes/v6", |b| {
        b.iter(|| Address::parse_bytes(black_box(&v6)))
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for input in ["127.0.0.1", "::ffff:7f00:1", "fe80:dead:be:ef::1", "2001:db8:0:0:1:0:0:1"] {
        let Ok(ip) = Address::parse_text(input) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("to_text", input), &ip, |b, ip| {
            b.iter(|| black_box(ip).to_text())
        });
        group.bench_with_input(BenchmarkId::new("to_byte_array", input), &ip, |b, ip| {
            b.iter(|| black_box(ip).to_byte_array())
        });
    }
    group.finish();
}

fn bench_relations(c: &mut Criterion) {
    let mut group = c.benchmark_group("relations");
    let (Ok(subnet), Ok(host), Ok(v6)) = (
        Address::parse_text("10.0.0.0/8"),
        Address::parse_text("10.20.30.40"),
        Address::parse_text("fd80::1"),
    ) else {
        return;
    };

    group.bench_function("includes", |b| {
        b.iter(|| black_box(&subnet).includes(black_box(&host)))
    });
    group.bench_function("equals", |b| {
        b.iter(|| black_box(&host).equals(black_box(&host)))
    });
    group.bench_function("is_private/v4", |b| b.iter(|| black_box(&host).is_private()));
    group.bench_function("is_private/v6", |b| b.iter(|| black_box(&v6).is_private()));
    group.bench_function("is_loopback/v6", |b| b.iter(|| black_box(&v6).is_loopback()));
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_relations);
criterion_main!(benches);
