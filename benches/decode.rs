use absage::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_decode(c: &mut Criterion) {
    let full_body = br#"{
        "error": "invalid_grant",
        "error_description": "The refresh token has expired",
        "error_uri": "https://auth.example.com/docs/errors",
        "trace_id": "d81c4e52-9c1f-4a9e-b0f3-1c2d3e4f5a6b"
    }"#;
    let minimal_body = br#"{"error":"invalid_client"}"#;
    let rejected_body = br#"{"message":"something went wrong"}"#;

    c.bench_function("decode_full_body", |b| {
        b.iter(|| OAuthError::decode_from_bytes(black_box(full_body)))
    });

    c.bench_function("decode_minimal_body", |b| {
        b.iter(|| OAuthError::decode_from_bytes(black_box(minimal_body)))
    });

    c.bench_function("decode_rejected_body", |b| {
        b.iter(|| OAuthError::decode_from_bytes(black_box(rejected_body)))
    });

    c.bench_function("host_error_conversion", |b| {
        let error = OAuthError::decode_from_bytes(full_body).unwrap();
        b.iter(|| black_box(&error).host_error())
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
