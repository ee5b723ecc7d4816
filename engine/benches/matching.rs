use arara_engine::{
    clock::UtcClock,
    matching::MatchingEngine,
    protocol::{OrderPlacementRequest, ReplyChannel, TradingReply},
    venue::VenueConfig,
};
use arara_markets::{
    ClientOrderId, Instrument, InstrumentId, MatchingConfig, OrderType, SecurityLookup,
    SecurityType, Side,
};
use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smol_str::SmolStr;

/// Swallows every reply; the bench measures the matching path alone.
#[derive(Debug, Clone)]
struct NullChannel;

impl ReplyChannel for NullChannel {
    fn send_reply(&self, _: TradingReply) {}
}

fn instrument() -> Instrument {
    Instrument {
        id: InstrumentId(1),
        symbol: SmolStr::new("BENCH"),
        security_type: SecurityType::CommonStock,
        currency: SmolStr::new("USD"),
        security_exchange: SmolStr::new("ARARA"),
        security_id: None,
        security_id_source: None,
        parties: Vec::new(),
        config: MatchingConfig {
            price_tick: Some(dec!(0.01)),
            quantity_tick: Some(dec!(1)),
            min_quantity: Some(dec!(1)),
            max_quantity: None,
        },
    }
}

fn request(serial: u64, side: Side, quantity: Decimal, price: Decimal) -> OrderPlacementRequest {
    let mut request = OrderPlacementRequest::new("bench", SecurityLookup::by_symbol("BENCH"));
    request.client_order_id = Some(ClientOrderId::new(format!("c{serial}")));
    request.side = Some(side);
    request.order_type = Some(OrderType::Limit);
    request.order_price = Some(price);
    request.order_quantity = Some(quantity);
    request
}

fn place_resting_orders(c: &mut Criterion) {
    c.bench_function("place_resting_orders", |b| {
        let mut serial = 0u64;
        b.iter_batched(
            || {
                MatchingEngine::new(instrument(), VenueConfig::default(), UtcClock, NullChannel)
            },
            |mut engine| {
                for _ in 0..100 {
                    serial += 1;
                    let price = dec!(10.00) - Decimal::from(serial % 10) * dec!(0.01);
                    engine.place(request(serial, Side::Buy, dec!(10), price));
                }
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn place_and_match(c: &mut Criterion) {
    c.bench_function("place_and_match", |b| {
        let mut serial = 0u64;
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::new(
                    instrument(),
                    VenueConfig::default(),
                    UtcClock,
                    NullChannel,
                );
                for _ in 0..100 {
                    serial += 1;
                    engine.place(request(serial, Side::Buy, dec!(10), dec!(10.00)));
                }
                engine
            },
            |mut engine| {
                serial += 1;
                engine.place(request(serial, Side::Sell, dec!(1000), dec!(10.00)));
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, place_resting_orders, place_and_match);
criterion_main!(benches);
