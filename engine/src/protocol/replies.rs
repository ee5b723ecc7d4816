use arara_markets::{
    BusinessRejectReason, ClientOrderId, ExecutionId, ExecutionType, MarketEntryId, MdEntryAction,
    MdEntryType, MdRejectReason, MdRequestId, OrderId, OrderStatus, OrderType, Party,
    RejectedMessageType, RequestSeqNum, SecurityLookup, SessionId, Side, TimeInForce,
    TradingPhase, TradingStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use derive_more::From;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Which request an order-cancel reject answers (FIX CxlRejResponseTo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelRejectResponseTo {
    Cancel,
    CancelReplace,
}

/// Acknowledges a placement that was accepted (placed and/or executed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacementConfirmation {
    pub session: SessionId,
    pub instrument: SecurityLookup,
    pub venue_order_id: OrderId,
    pub execution_id: ExecutionId,
    pub client_order_id: Option<ClientOrderId>,
    pub parties: Vec<Party>,
    pub side: Option<Side>,
    pub order_type: Option<OrderType>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub leaves_quantity: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
    pub expire_time: Option<DateTime<Utc>>,
    pub expire_date: Option<NaiveDate>,
    pub order_status: OrderStatus,
    pub execution_type: ExecutionType,
}

/// Rejects a placement request; correlating fields are copied from the
/// request so the client can match it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacementReject {
    pub session: SessionId,
    pub instrument: SecurityLookup,
    pub venue_order_id: OrderId,
    pub execution_id: ExecutionId,
    pub client_order_id: Option<ClientOrderId>,
    pub parties: Vec<Party>,
    pub side: Option<Side>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
    pub expire_time: Option<DateTime<Utc>>,
    pub expire_date: Option<NaiveDate>,
    pub order_status: OrderStatus,
    pub execution_type: ExecutionType,
    pub reject_text: String,
}

/// Acknowledges an in-place or re-priced modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderModificationConfirmation {
    pub session: SessionId,
    pub instrument: SecurityLookup,
    pub venue_order_id: OrderId,
    pub execution_id: ExecutionId,
    pub client_order_id: Option<ClientOrderId>,
    pub orig_client_order_id: Option<ClientOrderId>,
    pub parties: Vec<Party>,
    pub side: Option<Side>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub cum_executed_quantity: Decimal,
    pub leaves_quantity: Decimal,
    pub time_in_force: Option<TimeInForce>,
    pub order_status: OrderStatus,
    pub execution_type: ExecutionType,
}

/// Rejects a modification whose attributes failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderModificationReject {
    pub session: SessionId,
    pub client_order_id: Option<ClientOrderId>,
    pub orig_client_order_id: Option<ClientOrderId>,
    pub venue_order_id: Option<OrderId>,
    pub order_status: OrderStatus,
    pub reject_text: String,
}

/// Acknowledges a cancellation (explicit, expiry or disconnect-driven).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancellationConfirmation {
    pub session: SessionId,
    pub instrument: SecurityLookup,
    pub venue_order_id: OrderId,
    pub execution_id: ExecutionId,
    pub client_order_id: Option<ClientOrderId>,
    pub orig_client_order_id: Option<ClientOrderId>,
    pub parties: Vec<Party>,
    pub side: Option<Side>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub cum_executed_quantity: Decimal,
    pub leaves_quantity: Decimal,
    pub order_status: OrderStatus,
    pub execution_type: ExecutionType,
    /// Present when the venue cancelled the order on its own, e.g. on
    /// expiry.
    pub text: Option<String>,
}

/// Rejects a cancel or cancel-replace that could not locate its order (or
/// arrived in a phase that forbids it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancellationReject {
    pub session: SessionId,
    pub client_order_id: Option<ClientOrderId>,
    pub orig_client_order_id: Option<ClientOrderId>,
    pub venue_order_id: Option<OrderId>,
    pub order_status: OrderStatus,
    pub response_to: CancelRejectResponseTo,
    pub reject_text: String,
}

/// Trade execution report, sent to both counterparties of every fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub session: SessionId,
    pub instrument: SecurityLookup,
    pub venue_order_id: OrderId,
    pub execution_id: ExecutionId,
    pub client_order_id: Option<ClientOrderId>,
    pub parties: Vec<Party>,
    pub side: Option<Side>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub trade_price: Decimal,
    pub traded_quantity: Decimal,
    pub cum_executed_quantity: Decimal,
    pub leaves_quantity: Decimal,
    pub aggressor_side: Option<Side>,
    pub order_status: OrderStatus,
    pub execution_type: ExecutionType,
    pub transact_time: DateTime<Utc>,
}

/// A single row of a market-data message.
///
/// In snapshots `action` is omitted; in incremental updates it is always
/// present and `entry_id` identifies the entry it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataEntry {
    pub entry_id: Option<MarketEntryId>,
    pub entry_type: MdEntryType,
    pub action: Option<MdEntryAction>,
    pub price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub buyer_id: Option<OrderId>,
    pub seller_id: Option<OrderId>,
    pub aggressor_side: Option<Side>,
    pub time: Option<DateTime<Utc>>,
    pub phase: Option<TradingPhase>,
}

/// One-shot full view for a snapshot request or the head of a
/// subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataSnapshot {
    pub session: SessionId,
    pub request_id: Option<MdRequestId>,
    pub instrument: SecurityLookup,
    pub entries: Vec<MarketDataEntry>,
}

/// Incremental refresh carrying only deltas, one per subscriber per
/// processed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataUpdate {
    pub session: SessionId,
    pub request_id: Option<MdRequestId>,
    pub instrument: SecurityLookup,
    pub entries: Vec<MarketDataEntry>,
}

/// Rejects a market-data request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataReject {
    pub session: SessionId,
    pub request_id: Option<MdRequestId>,
    pub reject_reason: Option<MdRejectReason>,
    pub reject_text: Option<String>,
}

/// Answers a security-status request with the instrument's phase and
/// status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityStatus {
    pub session: SessionId,
    pub request_id: Option<SmolStr>,
    pub instrument: SecurityLookup,
    pub trading_phase: TradingPhase,
    pub trading_status: TradingStatus,
}

/// Business-level reject for requests that cannot be answered in kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMessageReject {
    pub session: SessionId,
    pub ref_seq_num: Option<RequestSeqNum>,
    pub ref_message_type: RejectedMessageType,
    pub ref_id: Option<SmolStr>,
    pub business_reject_reason: BusinessRejectReason,
    pub text: Option<String>,
}

/// Any outbound reply of the trading system.
#[derive(Debug, Clone, PartialEq, From, Serialize, Deserialize)]
pub enum TradingReply {
    OrderPlaced(OrderPlacementConfirmation),
    OrderPlacementRejected(OrderPlacementReject),
    OrderModified(OrderModificationConfirmation),
    OrderModificationRejected(OrderModificationReject),
    OrderCancelled(OrderCancellationConfirmation),
    OrderCancellationRejected(OrderCancellationReject),
    OrderTraded(ExecutionReport),
    MarketDataSnapshot(MarketDataSnapshot),
    MarketDataUpdate(MarketDataUpdate),
    MarketDataRejected(MarketDataReject),
    SecurityStatus(SecurityStatus),
    BusinessRejected(BusinessMessageReject),
}

impl TradingReply {
    /// Session this reply must be delivered to.
    pub fn session(&self) -> &SessionId {
        match self {
            TradingReply::OrderPlaced(reply) => &reply.session,
            TradingReply::OrderPlacementRejected(reply) => &reply.session,
            TradingReply::OrderModified(reply) => &reply.session,
            TradingReply::OrderModificationRejected(reply) => &reply.session,
            TradingReply::OrderCancelled(reply) => &reply.session,
            TradingReply::OrderCancellationRejected(reply) => &reply.session,
            TradingReply::OrderTraded(reply) => &reply.session,
            TradingReply::MarketDataSnapshot(reply) => &reply.session,
            TradingReply::MarketDataUpdate(reply) => &reply.session,
            TradingReply::MarketDataRejected(reply) => &reply.session,
            TradingReply::SecurityStatus(reply) => &reply.session,
            TradingReply::BusinessRejected(reply) => &reply.session,
        }
    }
}
