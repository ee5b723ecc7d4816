use arara_idgen::{
    ExecutionIdContext, InstrumentIdContext, MarketEntryIdContext, OrderIdContext,
};
use arara_markets::OrderId;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn order_id_generation(c: &mut Criterion) {
    let mut ctx = OrderIdContext::new();
    c.bench_function("order_id_generation", |b| {
        b.iter(|| black_box(ctx.generate()))
    });
}

fn execution_id_generation(c: &mut Criterion) {
    let mut ctx = ExecutionIdContext::new(OrderId(240307093005000000));
    c.bench_function("execution_id_generation", |b| {
        b.iter(|| black_box(ctx.generate()))
    });
}

fn instrument_id_generation(c: &mut Criterion) {
    let mut ctx = InstrumentIdContext::new();
    c.bench_function("instrument_id_generation", |b| {
        b.iter(|| black_box(ctx.generate()))
    });
}

fn market_entry_id_generation(c: &mut Criterion) {
    let mut ctx = MarketEntryIdContext::new();
    c.bench_function("market_entry_id_generation", |b| {
        b.iter(|| black_box(ctx.generate()))
    });
}

criterion_group!(
    benches,
    order_id_generation,
    execution_id_generation,
    instrument_id_generation,
    market_entry_id_generation
);
criterion_main!(benches);
