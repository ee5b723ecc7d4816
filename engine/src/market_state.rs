//! Persisted per-instrument state for restart recovery.
//!
//! A snapshot carries every resting order in priority order, the
//! aggregated-statistics cells and the subscription list. Restoring
//! re-validates each order with the resting-order checkers and drops (and
//! logs) any that fail, so a snapshot taken under an older configuration
//! cannot smuggle invalid orders back into a book.

use arara_markets::InstrumentId;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{book::LimitOrder, mdata::MarketEntryCell, mdata::Subscription};

/// Aggregated-statistics cells of one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsState {
    pub bid: MarketEntryCell,
    pub offer: MarketEntryCell,
    pub low: MarketEntryCell,
    pub mid: MarketEntryCell,
    pub high: MarketEntryCell,
}

/// Snapshot of one instrument's trading state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentState {
    pub instrument_id: InstrumentId,
    pub symbol: SmolStr,
    /// Bid-side resting orders in priority order.
    pub bid_orders: Vec<LimitOrder>,
    /// Offer-side resting orders in priority order.
    pub offer_orders: Vec<LimitOrder>,
    pub stats: StatsState,
    pub subscriptions: Vec<Subscription>,
}
