use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Classification of a listed security (FIX SecurityType).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum SecurityType {
    CommonStock,
    Future,
    Option,
    MultiLeg,
    SyntheticMultiLeg,
    Warrant,
    MutualFund,
    CorporateBond,
    ConvertibleBond,
    RepurchaseAgreement,
    Index,
    ContractForDifference,
    Certificate,
    FxSpot,
    Forward,
    FxForward,
    FxNonDeliverableForward,
    FxSwap,
    FxNonDeliverableSwap,
}

impl SecurityType {
    /// Parse the display name used by reference-data records.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|security_type| security_type.to_string() == value)
    }
}

/// Scheme of the external security identifier (FIX SecurityIDSource).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum SecurityIdSource {
    Cusip,
    Sedol,
    Isin,
    Ric,
    ExchangeSymbol,
    BloombergSymbol,
}

impl SecurityIdSource {
    /// Parse the display name used by reference-data records.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| source.to_string() == value)
    }
}
