//! Structured trading protocol: inbound requests as the FIX codec parses
//! them and outbound replies as the codec serialises them.
//!
//! Every message carries the opaque [`SessionId`] of the client session it
//! belongs to; the core never interprets it beyond equality.

use crate::channel::{Tx, UnboundedTx};

/// Inbound request messages.
pub mod requests;

/// Outbound reply messages.
pub mod replies;

pub use requests::{
    EngineTask, MarketDataRequest, OrderCancellationRequest, OrderModificationRequest,
    OrderPlacementRequest, SecurityStatusRequest, TradingRequest,
};
pub use replies::{
    BusinessMessageReject, CancelRejectResponseTo, ExecutionReport, MarketDataEntry,
    MarketDataReject, MarketDataSnapshot, MarketDataUpdate, OrderCancellationConfirmation,
    OrderCancellationReject, OrderModificationConfirmation, OrderModificationReject,
    OrderPlacementConfirmation, OrderPlacementReject, SecurityStatus, TradingReply,
};

/// Outbound edge of the matching path.
///
/// Implementations must not block: the engine hands replies off and moves
/// on. Delivery failures are swallowed here because a dropped receiver only
/// happens at shutdown, when replies are moot.
pub trait ReplyChannel {
    fn send_reply(&self, reply: TradingReply);
}

impl ReplyChannel for UnboundedTx<TradingReply> {
    fn send_reply(&self, reply: TradingReply) {
        let _ = self.send(reply);
    }
}
