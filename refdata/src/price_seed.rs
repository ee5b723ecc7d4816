use crate::predicate::Model;
use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Seed prices used to initialise an instrument's aggregated statistics at
/// startup, before the venue has produced any trades of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeed {
    pub price_seed_id: u64,
    pub symbol: Option<SmolStr>,
    pub security_type: Option<String>,
    pub price_currency: Option<SmolStr>,
    pub security_id: Option<SmolStr>,
    pub security_id_source: Option<String>,
    pub bid_price: Option<Decimal>,
    pub offer_price: Option<Decimal>,
    pub mid_price: Option<Decimal>,
    pub last_price: Option<Decimal>,
    pub last_update: Option<DateTime<Utc>>,
}

impl PriceSeed {
    pub fn create(price_seed_id: u64, patch: PriceSeedPatch) -> Self {
        Self {
            price_seed_id,
            symbol: patch.symbol,
            security_type: patch.security_type,
            price_currency: patch.price_currency,
            security_id: patch.security_id,
            security_id_source: patch.security_id_source,
            bid_price: patch.bid_price,
            offer_price: patch.offer_price,
            mid_price: patch.mid_price,
            last_price: patch.last_price,
            last_update: patch.last_update,
        }
    }

    pub fn update(&mut self, patch: PriceSeedPatch) {
        if patch.symbol.is_some() {
            self.symbol = patch.symbol;
        }
        if patch.security_type.is_some() {
            self.security_type = patch.security_type;
        }
        if patch.price_currency.is_some() {
            self.price_currency = patch.price_currency;
        }
        if patch.security_id.is_some() {
            self.security_id = patch.security_id;
        }
        if patch.security_id_source.is_some() {
            self.security_id_source = patch.security_id_source;
        }
        if patch.bid_price.is_some() {
            self.bid_price = patch.bid_price;
        }
        if patch.offer_price.is_some() {
            self.offer_price = patch.offer_price;
        }
        if patch.mid_price.is_some() {
            self.mid_price = patch.mid_price;
        }
        if patch.last_price.is_some() {
            self.last_price = patch.last_price;
        }
        if patch.last_update.is_some() {
            self.last_update = patch.last_update;
        }
    }
}

/// Patch-style creation/update payload for [`PriceSeed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeedPatch {
    pub symbol: Option<SmolStr>,
    pub security_type: Option<String>,
    pub price_currency: Option<SmolStr>,
    pub security_id: Option<SmolStr>,
    pub security_id_source: Option<String>,
    pub bid_price: Option<Decimal>,
    pub offer_price: Option<Decimal>,
    pub mid_price: Option<Decimal>,
    pub last_price: Option<Decimal>,
    pub last_update: Option<DateTime<Utc>>,
}

impl PriceSeedPatch {
    pub fn with_symbol(mut self, symbol: impl Into<SmolStr>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_bid_price(mut self, price: Decimal) -> Self {
        self.bid_price = Some(price);
        self
    }

    pub fn with_offer_price(mut self, price: Decimal) -> Self {
        self.offer_price = Some(price);
        self
    }

    pub fn with_mid_price(mut self, price: Decimal) -> Self {
        self.mid_price = Some(price);
        self
    }

    pub fn with_last_price(mut self, price: Decimal) -> Self {
        self.last_price = Some(price);
        self
    }
}

/// Queryable fields of a [`PriceSeed`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PriceSeedField {
    PriceSeedId,
    Symbol,
    SecurityType,
    PriceCurrency,
    SecurityId,
    SecurityIdSource,
    BidPrice,
    OfferPrice,
    MidPrice,
    LastPrice,
    LastUpdate,
}

impl Model for PriceSeed {
    type Field = PriceSeedField;
}
