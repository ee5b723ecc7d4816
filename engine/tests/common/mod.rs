//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

use arara_engine::{
    clock::ManualClock,
    matching::MatchingEngine,
    protocol::{
        MarketDataRequest, OrderCancellationRequest, OrderModificationRequest,
        OrderPlacementRequest, ReplyChannel, TradingReply,
    },
    venue::VenueConfig,
};
use arara_markets::{
    ClientOrderId, Instrument, InstrumentId, MatchingConfig, MdEntryType, MdRequestId,
    MdSubscriptionAction, MdUpdateType, OrderType, SecurityLookup, SecurityType, Side,
    TimeInForce,
};
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smol_str::SmolStr;
use std::sync::Arc;

/// Reply channel that records everything for assertions.
#[derive(Debug, Clone, Default)]
pub struct ReplyCollector {
    replies: Arc<Mutex<Vec<TradingReply>>>,
}

impl ReplyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every collected reply.
    pub fn take(&self) -> Vec<TradingReply> {
        std::mem::take(&mut *self.replies.lock())
    }
}

impl ReplyChannel for ReplyCollector {
    fn send_reply(&self, reply: TradingReply) {
        self.replies.lock().push(reply);
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap()
}

pub fn instrument() -> Instrument {
    Instrument {
        id: InstrumentId(1),
        symbol: SmolStr::new("AAPL"),
        security_type: SecurityType::CommonStock,
        currency: SmolStr::new("USD"),
        security_exchange: SmolStr::new("XNAS"),
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

pub type TestEngine = MatchingEngine<ManualClock, ReplyCollector>;

pub fn engine() -> (TestEngine, ReplyCollector) {
    let collector = ReplyCollector::new();
    let engine = MatchingEngine::new(
        instrument(),
        VenueConfig::default(),
        ManualClock::new(start_time()),
        collector.clone(),
    );
    (engine, collector)
}

pub fn limit(
    session: &str,
    client_order_id: &str,
    side: Side,
    quantity: Decimal,
    price: Decimal,
) -> OrderPlacementRequest {
    let mut request =
        OrderPlacementRequest::new(session, SecurityLookup::by_symbol("AAPL"));
    request.client_order_id = Some(ClientOrderId::from(client_order_id));
    request.side = Some(side);
    request.order_type = Some(OrderType::Limit);
    request.order_price = Some(price);
    request.order_quantity = Some(quantity);
    request
}

pub fn limit_with_tif(
    session: &str,
    client_order_id: &str,
    side: Side,
    quantity: Decimal,
    price: Decimal,
    time_in_force: TimeInForce,
) -> OrderPlacementRequest {
    let mut request = limit(session, client_order_id, side, quantity, price);
    request.time_in_force = Some(time_in_force);
    request
}

pub fn market(
    session: &str,
    client_order_id: &str,
    side: Side,
    quantity: Decimal,
) -> OrderPlacementRequest {
    let mut request =
        OrderPlacementRequest::new(session, SecurityLookup::by_symbol("AAPL"));
    request.client_order_id = Some(ClientOrderId::from(client_order_id));
    request.side = Some(side);
    request.order_type = Some(OrderType::Market);
    request.order_quantity = Some(quantity);
    request
}

pub fn modify(
    session: &str,
    orig_client_order_id: &str,
    client_order_id: &str,
    side: Side,
    quantity: Decimal,
    price: Decimal,
) -> OrderModificationRequest {
    OrderModificationRequest {
        session: session.into(),
        seq_num: None,
        instrument: SecurityLookup::by_symbol("AAPL"),
        client_order_id: Some(ClientOrderId::from(client_order_id)),
        orig_client_order_id: Some(ClientOrderId::from(orig_client_order_id)),
        venue_order_id: None,
        side: Some(side),
        order_type: Some(OrderType::Limit),
        order_price: Some(price),
        order_quantity: Some(quantity),
        time_in_force: None,
        expire_time: None,
        expire_date: None,
        short_sale_exempt_reason: None,
        parties: Vec::new(),
    }
}

pub fn cancel(session: &str, orig_client_order_id: &str) -> OrderCancellationRequest {
    OrderCancellationRequest {
        session: session.into(),
        seq_num: None,
        instrument: SecurityLookup::by_symbol("AAPL"),
        client_order_id: None,
        orig_client_order_id: Some(ClientOrderId::from(orig_client_order_id)),
        venue_order_id: None,
        side: None,
    }
}

pub fn subscribe(
    session: &str,
    request_id: &str,
    entry_types: Vec<MdEntryType>,
) -> MarketDataRequest {
    MarketDataRequest {
        session: session.into(),
        seq_num: None,
        request_id: Some(MdRequestId::from(request_id)),
        action: Some(MdSubscriptionAction::Subscribe),
        update_type: Some(MdUpdateType::Incremental),
        market_depth: Some(1),
        entry_types,
        instruments: vec![SecurityLookup::by_symbol("AAPL")],
    }
}

pub fn md_snapshot_request(
    session: &str,
    request_id: &str,
    entry_types: Vec<MdEntryType>,
) -> MarketDataRequest {
    let mut request = subscribe(session, request_id, entry_types);
    request.action = Some(MdSubscriptionAction::Snapshot);
    request
}

pub fn unsubscribe(session: &str, request_id: &str) -> MarketDataRequest {
    let mut request = subscribe(session, request_id, Vec::new());
    request.action = Some(MdSubscriptionAction::Unsubscribe);
    request
}
