use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Internal instrument identifier, assigned by the instrument id generator
/// when the catalogue is loaded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Serialize,
    Deserialize,
)]
pub struct InstrumentId(pub u64);

/// Venue-assigned order identifier.
///
/// Composed as `YYMMDDhhmmssCCCCCC`; on the wire it travels as its decimal
/// string form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Serialize,
    Deserialize,
)]
pub struct OrderId(pub u64);

/// Client-assigned order identifier, unique per session.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct ClientOrderId(pub SmolStr);

impl ClientOrderId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for ClientOrderId {
    fn from(value: &str) -> Self {
        Self(SmolStr::new(value))
    }
}

/// Execution identifier, `"<order-id>-<n>"` per parent order.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct ExecutionId(pub SmolStr);

impl ExecutionId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }
}

/// Market-data entry identifier, `"<seed>:<n>"`, stable across the lifetime
/// of a persistent entry.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct MarketEntryId(pub SmolStr);

impl MarketEntryId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }
}

/// Client-assigned market-data request identifier (FIX MDReqID).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct MdRequestId(pub SmolStr);

impl MdRequestId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for MdRequestId {
    fn from(value: &str) -> Self {
        Self(SmolStr::new(value))
    }
}

/// Opaque handle of the client session a request arrived on.
///
/// The core never interprets it; replies carry it back so the acceptor can
/// route them to the right FIX session.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct SessionId(pub SmolStr);

impl SessionId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(SmolStr::new(value))
    }
}

/// Party identifier.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct PartyId(pub SmolStr);

impl PartyId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for PartyId {
    fn from(value: &str) -> Self {
        Self(SmolStr::new(value))
    }
}

/// Session-level sequence number of an inbound request, echoed back on
/// business-level rejects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Serialize,
    Deserialize,
)]
pub struct RequestSeqNum(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_displays_as_decimal_string() {
        assert_eq!(OrderId(220101093000000042).to_string(), "220101093000000042");
    }

    #[test]
    fn ids_serialize_transparently() {
        let client_order_id = ClientOrderId::new("ord-1");
        let json = serde_json::to_string(&client_order_id).unwrap();
        assert_eq!(json, r#""ord-1""#);
        assert_eq!(
            serde_json::from_str::<ClientOrderId>(&json).unwrap(),
            client_order_id
        );

        let order_id = OrderId(42);
        let json = serde_json::to_string(&order_id).unwrap();
        assert_eq!(json, "42");
        assert_eq!(serde_json::from_str::<OrderId>(&json).unwrap(), order_id);
    }
}
