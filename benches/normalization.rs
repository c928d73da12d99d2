//! Benchmarks for response normalization
//!
//! This benchmark measures:
//! - Shaping of success bodies of growing size
//! - Error message extraction from failure bodies
//! - Rendering of results for display

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ms_demo_client::client::normalize::normalize_response;
use ms_demo_client::console::ResponseView;

fn order_list_body(count: usize) -> Vec<u8> {
    let orders: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("order-{i}"),
                "user_id": "user-1",
                "status": "pending",
                "items": [
                    {"product_id": "p-1", "quantity": 2, "unit_price": 9.99},
                    {"product_id": "p-2", "quantity": 1, "unit_price": 24.5}
                ],
                "total": 44.48
            })
        })
        .collect();
    serde_json::to_vec(&serde_json::json!({"success": true, "orders": orders})).unwrap_or_default()
}

fn bench_success_bodies(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_success");

    for count in [1usize, 50, 500] {
        let body = order_list_body(count);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("orders", count), &body, |b, body| {
            b.iter(|| normalize_response(black_box(200), black_box(body)))
        });
    }

    group.finish();
}

fn bench_failure_bodies(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_failure");

    let flat = br#"{"success":false,"error":"User not found"}"#.to_vec();
    let nested = br#"{"error":{"message":"Rate limit exceeded","type":"rate_limit_error"}}"#.to_vec();
    let html = b"<html><body>502 Bad Gateway</body></html>".to_vec();

    group.bench_function("flat_message", |b| {
        b.iter(|| normalize_response(black_box(404), black_box(&flat)))
    });
    group.bench_function("nested_message", |b| {
        b.iter(|| normalize_response(black_box(429), black_box(&nested)))
    });
    group.bench_function("html_page", |b| {
        b.iter(|| normalize_response(black_box(502), black_box(&html)))
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let result = normalize_response(200, &order_list_body(50));
    c.bench_function("render_response_view", |b| {
        b.iter(|| ResponseView::from_result(black_box(&result)))
    });
}

criterion_group!(
    benches,
    bench_success_bodies,
    bench_failure_bodies,
    bench_rendering
);
criterion_main!(benches);
