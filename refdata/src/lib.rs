#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # 🦜 Refdata - Reference Data Interface
//!
//! Record types and query vocabulary of the reference-data layer the Arara
//! trading system consumes at startup and on reconfiguration: venues,
//! listings, market phases, price seeds, settings and data sources.
//!
//! The records are *patch-style*: every attribute of a `*Patch` payload is
//! optional, mirroring how creation and update commands arrive from the
//! persistent store's API. The trading system itself never executes
//! queries; it receives resolved records plus, for callers that need to
//! express filters, the [`predicate`] expression algebra
//! (`eq`/`neq`/`less`/`greater`/`less_eq`/`greater_eq` composed with
//! `and`/`or`).

/// Storage-layer error taxonomy.
pub mod error;

/// Predicate expression algebra.
pub mod predicate;

/// Data source descriptions (external market-data feeds).
pub mod datasource;

/// Listing (instrument) records.
pub mod listing;

/// Venue market-phase schedule records.
pub mod market_phase;

/// Price-seed records used to initialise instrument statistics.
pub mod price_seed;

/// Venue-level key/value settings.
pub mod setting;

/// Venue records.
pub mod venue;

pub use datasource::{Datasource, DatasourceField, DatasourcePatch};
pub use error::StorageError;
pub use listing::{Listing, ListingField, ListingPatch};
pub use market_phase::{MarketPhase, MarketPhaseField, MarketPhasePatch};
pub use price_seed::{PriceSeed, PriceSeedField, PriceSeedPatch};
pub use setting::{Setting, SettingField, SettingPatch};
pub use venue::{Venue, VenueField, VenuePatch};
