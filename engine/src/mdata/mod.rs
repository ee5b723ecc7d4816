//! Market-data dissemination: per-instrument subscription registry,
//! snapshot assembly and incremental update generation with stable entry
//! identifiers.

use arara_markets::{MdEntryType, MdRequestId, MdUpdateType, OrderId, SessionId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

mod aggregator;
mod cells;

pub use aggregator::{MarketDataAggregator, MARKET_DATA_PUBLISH_SPAN_NAME};
pub use cells::MarketEntryCell;

/// A trade produced by the matching engine, as the market-data layer sees
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub price: Decimal,
    pub quantity: Decimal,
    pub buyer_order_id: OrderId,
    pub seller_order_id: OrderId,
    pub aggressor_side: Option<Side>,
    pub executed_at: DateTime<Utc>,
}

/// A registered market-data subscription.
///
/// A session may hold at most one subscription per request id. An empty
/// `entry_types` mask subscribes to every entry type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub session: SessionId,
    pub request_id: MdRequestId,
    pub entry_types: Vec<MdEntryType>,
    pub market_depth: u32,
    pub update_type: MdUpdateType,
}

impl Subscription {
    pub fn wants(&self, entry_type: MdEntryType) -> bool {
        self.entry_types.is_empty() || self.entry_types.contains(&entry_type)
    }
}
