use arara_markets::{
    ClientOrderId, InstrumentId, MdEntryType, MdRequestId, MdSubscriptionAction, MdUpdateType,
    OrderId, OrderType, Party, PhaseTransition, RequestSeqNum, SecurityLookup, SessionId, Side,
    TimeInForce,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// New-order-single as parsed by the codec. All business attributes are
/// optional here; the validators decide what is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacementRequest {
    pub session: SessionId,
    pub seq_num: Option<RequestSeqNum>,
    pub instrument: SecurityLookup,
    pub client_order_id: Option<ClientOrderId>,
    pub side: Option<Side>,
    pub order_type: Option<OrderType>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
    pub expire_time: Option<DateTime<Utc>>,
    pub expire_date: Option<NaiveDate>,
    pub short_sale_exempt_reason: Option<SmolStr>,
    pub parties: Vec<Party>,
}

impl OrderPlacementRequest {
    pub fn new(session: impl Into<SessionId>, instrument: SecurityLookup) -> Self {
        Self {
            session: session.into(),
            seq_num: None,
            instrument,
            client_order_id: None,
            side: None,
            order_type: None,
            order_price: None,
            order_quantity: None,
            time_in_force: None,
            expire_time: None,
            expire_date: None,
            short_sale_exempt_reason: None,
            parties: Vec::new(),
        }
    }
}

/// Cancel-replace request. The target order is located by
/// `orig_client_order_id` or `venue_order_id`, scoped to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderModificationRequest {
    pub session: SessionId,
    pub seq_num: Option<RequestSeqNum>,
    pub instrument: SecurityLookup,
    pub client_order_id: Option<ClientOrderId>,
    pub orig_client_order_id: Option<ClientOrderId>,
    pub venue_order_id: Option<OrderId>,
    pub side: Option<Side>,
    pub order_type: Option<OrderType>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
    pub expire_time: Option<DateTime<Utc>>,
    pub expire_date: Option<NaiveDate>,
    pub short_sale_exempt_reason: Option<SmolStr>,
    pub parties: Vec<Party>,
}

/// Order-cancel request, located like a modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancellationRequest {
    pub session: SessionId,
    pub seq_num: Option<RequestSeqNum>,
    pub instrument: SecurityLookup,
    pub client_order_id: Option<ClientOrderId>,
    pub orig_client_order_id: Option<ClientOrderId>,
    pub venue_order_id: Option<OrderId>,
    pub side: Option<Side>,
}

/// Market-data subscribe/unsubscribe/snapshot request.
///
/// `entry_types` empty means "all entry types"; `market_depth` of 0 or 1
/// both mean top of book, which is what this venue disseminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataRequest {
    pub session: SessionId,
    pub seq_num: Option<RequestSeqNum>,
    pub request_id: Option<MdRequestId>,
    pub action: Option<MdSubscriptionAction>,
    pub update_type: Option<MdUpdateType>,
    pub market_depth: Option<u32>,
    pub entry_types: Vec<MdEntryType>,
    pub instruments: Vec<SecurityLookup>,
}

/// Security-status request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityStatusRequest {
    pub session: SessionId,
    pub seq_num: Option<RequestSeqNum>,
    pub request_id: Option<SmolStr>,
    pub instrument: SecurityLookup,
}

/// Any inbound trading request, as routed by the trading system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TradingRequest {
    Place(OrderPlacementRequest),
    Modify(OrderModificationRequest),
    Cancel(OrderCancellationRequest),
    MarketData(MarketDataRequest),
    SecurityStatus(SecurityStatusRequest),
}

impl TradingRequest {
    pub fn session(&self) -> &SessionId {
        match self {
            TradingRequest::Place(request) => &request.session,
            TradingRequest::Modify(request) => &request.session,
            TradingRequest::Cancel(request) => &request.session,
            TradingRequest::MarketData(request) => &request.session,
            TradingRequest::SecurityStatus(request) => &request.session,
        }
    }
}

impl From<OrderPlacementRequest> for TradingRequest {
    fn from(request: OrderPlacementRequest) -> Self {
        TradingRequest::Place(request)
    }
}

impl From<OrderModificationRequest> for TradingRequest {
    fn from(request: OrderModificationRequest) -> Self {
        TradingRequest::Modify(request)
    }
}

impl From<OrderCancellationRequest> for TradingRequest {
    fn from(request: OrderCancellationRequest) -> Self {
        TradingRequest::Cancel(request)
    }
}

impl From<MarketDataRequest> for TradingRequest {
    fn from(request: MarketDataRequest) -> Self {
        TradingRequest::MarketData(request)
    }
}

impl From<SecurityStatusRequest> for TradingRequest {
    fn from(request: SecurityStatusRequest) -> Self {
        TradingRequest::SecurityStatus(request)
    }
}

/// Work item consumed by an instrument worker.
#[derive(Debug)]
pub enum EngineTask {
    /// A client request routed to the instrument.
    Request {
        instrument_id: InstrumentId,
        request: TradingRequest,
    },
    /// Periodic expiry sweep.
    Tick,
    /// Trading-phase transition for every instrument of the worker.
    Phase(PhaseTransition),
    /// A client session disconnected.
    SessionTerminated {
        session: SessionId,
        cancel_orders: bool,
    },
    /// Collect persisted state of every instrument owned by the worker.
    Snapshot {
        reply: tokio::sync::oneshot::Sender<Vec<crate::market_state::InstrumentState>>,
    },
}
