use crate::{
    ids::InstrumentId, party::Party, security::SecurityIdSource, security::SecurityType,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// An instrument listed on the venue. Immutable after creation.
///
/// The internal [`InstrumentId`] addresses the instrument inside the
/// trading system; clients address it by any combination of the external
/// identity fields (see [`SecurityLookup`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: InstrumentId,
    pub symbol: SmolStr,
    pub security_type: SecurityType,
    pub currency: SmolStr,
    pub security_exchange: SmolStr,
    pub security_id: Option<SmolStr>,
    pub security_id_source: Option<SecurityIdSource>,
    pub parties: Vec<Party>,
    pub config: MatchingConfig,
}

impl Instrument {
    /// Whether this instrument is the one a request addresses.
    ///
    /// Every field present in the lookup must match; an empty lookup
    /// matches nothing.
    pub fn matches(&self, lookup: &SecurityLookup) -> bool {
        if lookup.is_empty() {
            return false;
        }

        let symbol_ok = lookup
            .symbol
            .as_ref()
            .map(|symbol| *symbol == self.symbol)
            .unwrap_or(true);

        let security_id_ok = match (&lookup.security_id, &self.security_id) {
            (Some(requested), Some(listed)) => {
                requested == listed
                    && lookup
                        .security_id_source
                        .map(|source| Some(source) == self.security_id_source)
                        .unwrap_or(true)
            }
            (Some(_), None) => false,
            (None, _) => true,
        };

        let security_type_ok = lookup
            .security_type
            .map(|security_type| security_type == self.security_type)
            .unwrap_or(true);

        let exchange_ok = lookup
            .security_exchange
            .as_ref()
            .map(|exchange| *exchange == self.security_exchange)
            .unwrap_or(true);

        symbol_ok && security_id_ok && security_type_ok && exchange_ok
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol, self.id)
    }
}

/// Matching configuration of a listing.
///
/// Absent bounds are unconstrained; absent ticks disable the corresponding
/// tick validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub price_tick: Option<Decimal>,
    pub quantity_tick: Option<Decimal>,
    pub min_quantity: Option<Decimal>,
    pub max_quantity: Option<Decimal>,
}

/// External instrument identity as carried on an inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityLookup {
    pub symbol: Option<SmolStr>,
    pub security_id: Option<SmolStr>,
    pub security_id_source: Option<SecurityIdSource>,
    pub security_type: Option<SecurityType>,
    pub security_exchange: Option<SmolStr>,
}

impl SecurityLookup {
    pub fn by_symbol(symbol: impl Into<SmolStr>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.security_id.is_none()
            && self.security_type.is_none()
            && self.security_exchange.is_none()
    }
}

impl fmt::Display for SecurityLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.symbol, &self.security_id) {
            (Some(symbol), _) => write!(f, "{symbol}"),
            (None, Some(id)) => write!(f, "{id}"),
            (None, None) => write!(f, "<unspecified>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn instrument() -> Instrument {
        Instrument {
            id: InstrumentId(1),
            symbol: SmolStr::new("AAPL"),
            security_type: SecurityType::CommonStock,
            currency: SmolStr::new("USD"),
            security_exchange: SmolStr::new("XNAS"),
            security_id: Some(SmolStr::new("US0378331005")),
            security_id_source: Some(SecurityIdSource::Isin),
            parties: Vec::new(),
            config: MatchingConfig {
                price_tick: Some(dec!(0.01)),
                quantity_tick: Some(dec!(1)),
                min_quantity: Some(dec!(1)),
                max_quantity: None,
            },
        }
    }

    #[test]
    fn matches_by_symbol() {
        assert!(instrument().matches(&SecurityLookup::by_symbol("AAPL")));
        assert!(!instrument().matches(&SecurityLookup::by_symbol("MSFT")));
    }

    #[test]
    fn empty_lookup_matches_nothing() {
        assert!(!instrument().matches(&SecurityLookup::default()));
    }

    #[test]
    fn security_id_must_agree_with_source() {
        let lookup = SecurityLookup {
            security_id: Some(SmolStr::new("US0378331005")),
            security_id_source: Some(SecurityIdSource::Isin),
            ..SecurityLookup::default()
        };
        assert!(instrument().matches(&lookup));

        let wrong_source = SecurityLookup {
            security_id_source: Some(SecurityIdSource::Cusip),
            ..lookup
        };
        assert!(!instrument().matches(&wrong_source));
    }

    #[test]
    fn mismatched_security_type_fails() {
        let lookup = SecurityLookup {
            symbol: Some(SmolStr::new("AAPL")),
            security_type: Some(SecurityType::Future),
            ..SecurityLookup::default()
        };
        assert!(!instrument().matches(&lookup));
    }
}
