use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Kind of a market-data entry (FIX MDEntryType).
///
/// `Bid`/`Offer` describe the top of book, `Trade` a single execution on
/// the tape, and the `*Price` values the per-instrument aggregated
/// statistics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum MdEntryType {
    Bid,
    Offer,
    Trade,
    LowPrice,
    MidPrice,
    HighPrice,
}

/// Incremental-refresh action of a market-data entry (FIX MDUpdateAction).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum MdEntryAction {
    New,
    Change,
    Delete,
}

/// Whether a subscriber receives full refreshes or deltas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum MdUpdateType {
    Snapshot,
    Incremental,
}

/// What a market-data request asks the venue to do (FIX
/// SubscriptionRequestType).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum MdSubscriptionAction {
    Subscribe,
    Unsubscribe,
    Snapshot,
}

/// Reason a market-data request was rejected (FIX MDReqRejReason).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum MdRejectReason {
    UnknownSymbol,
    DuplicateMdReqId,
}

/// Message type referenced by a business-level reject (FIX RefMsgType).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum RejectedMessageType {
    SecurityStatusRequest,
}

/// Reason of a business-level reject (FIX BusinessRejectReason).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum BusinessRejectReason {
    Other,
    UnknownId,
    UnknownSecurity,
}
