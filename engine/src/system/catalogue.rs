use arara_idgen::InstrumentIdContext;
use arara_markets::{
    Instrument, MatchingConfig, Party, PartyIdSource, PartyRole, SecurityIdSource, SecurityLookup,
    SecurityType,
};
use arara_refdata::Listing;
use smol_str::SmolStr;
use tracing::{info, warn};

use crate::error::EngineError;

/// The venue's instrument catalogue, built from reference-data listings.
///
/// Read-mostly: the trading system resolves every inbound request against
/// it, while reloads replace it wholesale under the writer side of the
/// catalogue lock.
#[derive(Debug, Default)]
pub struct InstrumentCatalogue {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalogue {
    /// Build the catalogue for one venue.
    ///
    /// Listings that are disabled, belong to another venue, or do not parse
    /// are skipped with a log line; identifier exhaustion is the only hard
    /// error.
    pub fn from_listings(
        listings: &[Listing],
        venue_id: &str,
        ids: &mut InstrumentIdContext,
    ) -> Result<Self, EngineError> {
        let mut instruments = Vec::new();

        for listing in listings {
            if listing.venue_id != venue_id || listing.enabled == Some(false) {
                continue;
            }
            let Some(symbol) = listing.symbol.clone() else {
                warn!(listing_id = listing.listing_id, "skipping listing without a symbol");
                continue;
            };

            let security_type = match listing.security_type.as_deref() {
                Some(name) => match SecurityType::from_name(name) {
                    Some(security_type) => security_type,
                    None => {
                        warn!(
                            listing_id = listing.listing_id,
                            security_type = name,
                            "skipping listing with unknown security type"
                        );
                        continue;
                    }
                },
                None => SecurityType::CommonStock,
            };

            let security_id_source = listing
                .security_id_source
                .as_deref()
                .and_then(SecurityIdSource::from_name);

            let parties = match (&listing.party_id, &listing.party_role) {
                (Some(party_id), Some(role_name)) => match PartyRole::from_name(role_name) {
                    Some(role) => vec![Party::new(
                        party_id.clone(),
                        PartyIdSource::Proprietary,
                        role,
                    )],
                    None => {
                        warn!(
                            listing_id = listing.listing_id,
                            party_role = %role_name,
                            "ignoring listing party with unknown role"
                        );
                        Vec::new()
                    }
                },
                _ => Vec::new(),
            };

            let instrument = Instrument {
                id: ids.generate()?,
                symbol,
                security_type,
                currency: listing.currency.clone().unwrap_or_else(|| SmolStr::new("USD")),
                security_exchange: listing
                    .security_exchange
                    .clone()
                    .unwrap_or_else(|| SmolStr::new(venue_id)),
                security_id: listing.security_id.clone(),
                security_id_source,
                parties,
                config: MatchingConfig {
                    price_tick: listing.price_tick,
                    quantity_tick: listing.quantity_tick,
                    min_quantity: listing.min_quantity,
                    max_quantity: listing.max_quantity,
                },
            };
            instruments.push(instrument);
        }

        info!(count = instruments.len(), venue_id, "instrument catalogue built");
        Ok(Self { instruments })
    }

    /// Resolve a request's instrument identity to a listed instrument.
    pub fn resolve(&self, lookup: &SecurityLookup) -> Option<&Instrument> {
        self.instruments
            .iter()
            .find(|instrument| instrument.matches(lookup))
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
