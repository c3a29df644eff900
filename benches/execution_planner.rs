//! Planner benchmarks.
//!
//! Measures `plan_snapshot` over synthetic snapshots of growing size, and a
//! full `plan` call through the JSON repository.

#![allow(clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use execution_planner::application::services::ExecutionPlanner;
use execution_planner::domain::entities::{AvailableFunds, Exchange, Order, OrderBook};
use execution_planner::domain::value_objects::{OrderSide, Price, Quantity};
use execution_planner::infrastructure::persistence::{
    InMemoryExchangeRepository, JsonExchangeRepository,
};
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::Arc;

/// Build `exchanges` exchanges with `depth` bids and asks each.
fn build_snapshot(exchanges: usize, depth: usize) -> Vec<Exchange> {
    (0..exchanges)
        .map(|e| {
            let mut book = OrderBook::new();
            for level in 0..depth {
                let offset = Decimal::new((level * 7 + e * 3) as i64, 2);
                book = book
                    .with_ask(Order::new(
                        format!("ex{e}-ask{level}"),
                        OrderSide::Sell,
                        Quantity::new(Decimal::new(25, 2)),
                        Price::new(Decimal::new(3000, 0) + offset),
                    ))
                    .with_bid(Order::new(
                        format!("ex{e}-bid{level}"),
                        OrderSide::Buy,
                        Quantity::new(Decimal::new(25, 2)),
                        Price::new(Decimal::new(2990, 0) - offset),
                    ));
            }
            Exchange::new(
                format!("ex{e}"),
                AvailableFunds::new(Decimal::new(250_000, 0), Decimal::new(40, 0)),
                book,
            )
        })
        .collect()
}

fn planner() -> ExecutionPlanner {
    ExecutionPlanner::with_defaults(Arc::new(InMemoryExchangeRepository::new()))
}

/// Benchmark: plan over an in-memory snapshot
fn bench_plan_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_snapshot");
    let planner = planner();

    for (exchanges, depth) in [(3, 50), (10, 200), (50, 500)] {
        let snapshot = build_snapshot(exchanges, depth);
        group.throughput(Throughput::Elements((exchanges * depth) as u64));

        for side in [OrderSide::Buy, OrderSide::Sell] {
            group.bench_with_input(
                BenchmarkId::new(side.as_str(), format!("{exchanges}x{depth}")),
                &snapshot,
                |b, snapshot| {
                    b.iter(|| {
                        black_box(
                            planner
                                .plan_snapshot(
                                    black_box(snapshot),
                                    side,
                                    Quantity::new(Decimal::new(25, 0)),
                                )
                                .unwrap(),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: plan through the JSON repository, including file reads
fn bench_plan_from_json(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    for exchange in build_snapshot(10, 100) {
        let path = dir.path().join(format!("{}.json", exchange.id()));
        std::fs::write(path, serde_json::to_vec(&exchange).unwrap()).unwrap();
    }

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let planner = ExecutionPlanner::with_defaults(Arc::new(JsonExchangeRepository::new(dir.path())));

    c.bench_function("plan_from_json/10x100", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(
                planner
                    .plan(OrderSide::Buy, Quantity::new(Decimal::new(10, 0)))
                    .await
                    .unwrap(),
            )
        });
    });
}

criterion_group!(benches, bench_plan_snapshot, bench_plan_from_json);
criterion_main!(benches);
