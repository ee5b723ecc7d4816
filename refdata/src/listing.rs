use crate::{error::StorageError, predicate::Model};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A listing (instrument) record.
///
/// Enumerated attributes are stored in their string form; the trading
/// system converts them into its domain enums when the instrument catalogue
/// is built and drops listings whose values do not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: u64,
    pub venue_id: SmolStr,
    pub symbol: Option<SmolStr>,
    pub security_type: Option<String>,
    pub currency: Option<SmolStr>,
    pub security_exchange: Option<SmolStr>,
    pub security_id: Option<SmolStr>,
    pub security_id_source: Option<String>,
    pub party_id: Option<SmolStr>,
    pub party_role: Option<String>,
    pub price_tick: Option<Decimal>,
    pub quantity_tick: Option<Decimal>,
    pub min_quantity: Option<Decimal>,
    pub max_quantity: Option<Decimal>,
    pub enabled: Option<bool>,
}

impl Listing {
    pub fn create(listing_id: u64, patch: ListingPatch) -> Result<Self, StorageError> {
        let venue_id = patch.venue_id.ok_or_else(|| {
            StorageError::DataIntegrityViolated("listing record requires a venue id".into())
        })?;

        Ok(Self {
            listing_id,
            venue_id,
            symbol: patch.symbol,
            security_type: patch.security_type,
            currency: patch.currency,
            security_exchange: patch.security_exchange,
            security_id: patch.security_id,
            security_id_source: patch.security_id_source,
            party_id: patch.party_id,
            party_role: patch.party_role,
            price_tick: patch.price_tick,
            quantity_tick: patch.quantity_tick,
            min_quantity: patch.min_quantity,
            max_quantity: patch.max_quantity,
            enabled: patch.enabled,
        })
    }

    pub fn update(&mut self, patch: ListingPatch) {
        if let Some(venue_id) = patch.venue_id {
            self.venue_id = venue_id;
        }
        if patch.symbol.is_some() {
            self.symbol = patch.symbol;
        }
        if patch.security_type.is_some() {
            self.security_type = patch.security_type;
        }
        if patch.currency.is_some() {
            self.currency = patch.currency;
        }
        if patch.security_exchange.is_some() {
            self.security_exchange = patch.security_exchange;
        }
        if patch.security_id.is_some() {
            self.security_id = patch.security_id;
        }
        if patch.security_id_source.is_some() {
            self.security_id_source = patch.security_id_source;
        }
        if patch.party_id.is_some() {
            self.party_id = patch.party_id;
        }
        if patch.party_role.is_some() {
            self.party_role = patch.party_role;
        }
        if patch.price_tick.is_some() {
            self.price_tick = patch.price_tick;
        }
        if patch.quantity_tick.is_some() {
            self.quantity_tick = patch.quantity_tick;
        }
        if patch.min_quantity.is_some() {
            self.min_quantity = patch.min_quantity;
        }
        if patch.max_quantity.is_some() {
            self.max_quantity = patch.max_quantity;
        }
        if patch.enabled.is_some() {
            self.enabled = patch.enabled;
        }
    }
}

/// Patch-style creation/update payload for [`Listing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPatch {
    pub venue_id: Option<SmolStr>,
    pub symbol: Option<SmolStr>,
    pub security_type: Option<String>,
    pub currency: Option<SmolStr>,
    pub security_exchange: Option<SmolStr>,
    pub security_id: Option<SmolStr>,
    pub security_id_source: Option<String>,
    pub party_id: Option<SmolStr>,
    pub party_role: Option<String>,
    pub price_tick: Option<Decimal>,
    pub quantity_tick: Option<Decimal>,
    pub min_quantity: Option<Decimal>,
    pub max_quantity: Option<Decimal>,
    pub enabled: Option<bool>,
}

impl ListingPatch {
    pub fn with_venue_id(mut self, venue_id: impl Into<SmolStr>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<SmolStr>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_security_type(mut self, security_type: impl Into<String>) -> Self {
        self.security_type = Some(security_type.into());
        self
    }

    pub fn with_price_tick(mut self, tick: Decimal) -> Self {
        self.price_tick = Some(tick);
        self
    }

    pub fn with_quantity_tick(mut self, tick: Decimal) -> Self {
        self.quantity_tick = Some(tick);
        self
    }

    pub fn with_min_quantity(mut self, min: Decimal) -> Self {
        self.min_quantity = Some(min);
        self
    }

    pub fn with_max_quantity(mut self, max: Decimal) -> Self {
        self.max_quantity = Some(max);
        self
    }
}

/// Queryable fields of a [`Listing`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ListingField {
    ListingId,
    VenueId,
    Symbol,
    SecurityType,
    Currency,
    SecurityExchange,
    SecurityId,
    SecurityIdSource,
    PartyId,
    PartyRole,
    PriceTick,
    QuantityTick,
    MinQuantity,
    MaxQuantity,
    Enabled,
}

impl Model for Listing {
    type Field = ListingField;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn create_requires_a_venue_id() {
        let err = Listing::create(1, ListingPatch::default()).unwrap_err();
        assert!(matches!(err, StorageError::DataIntegrityViolated(_)));
    }

    #[test]
    fn update_overlays_only_present_fields() {
        let mut listing = Listing::create(
            7,
            ListingPatch::default()
                .with_venue_id("XLON")
                .with_symbol("VOD")
                .with_price_tick(dec!(0.01)),
        )
        .unwrap();

        listing.update(ListingPatch::default().with_price_tick(dec!(0.05)));
        assert_eq!(listing.price_tick, Some(dec!(0.05)));
        assert_eq!(listing.symbol.as_deref(), Some("VOD"));
    }

    #[test]
    fn listing_serializes_and_comes_back_identical() {
        let listing = Listing::create(
            7,
            ListingPatch::default()
                .with_venue_id("XLON")
                .with_symbol("VOD")
                .with_security_type("CommonStock")
                .with_price_tick(dec!(0.01))
                .with_min_quantity(dec!(1)),
        )
        .unwrap();

        let json = serde_json::to_string(&listing).unwrap();
        assert_eq!(serde_json::from_str::<Listing>(&json).unwrap(), listing);
    }
}
