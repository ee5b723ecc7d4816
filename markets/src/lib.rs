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
#![allow(clippy::type_complexity, clippy::too_many_arguments)]

//! # 🦜 Markets - Arara Domain Vocabulary
//!
//! Core domain types shared by every crate of the Arara market simulator:
//! the venue that the FIX acceptor, matching engine and market-data
//! dissemination layers all speak.
//!
//! ## 🎯 Main Components
//!
//! * **Enumerated attributes**: [`Side`], [`OrderType`], [`TimeInForce`],
//!   [`OrderStatus`], [`ExecutionType`], security classification, party
//!   roles, market-data entry/action/update types, trading phases.
//!   Each value set is fixed and carries exactly one FIX mapping
//!   (see [`fix`]), so enum ↔ wire conversion is a round-trip identity.
//! * **Identifiers**: strongly-typed ids ([`OrderId`], [`InstrumentId`],
//!   [`ExecutionId`], [`ClientOrderId`], ...) that make it impossible to
//!   confuse a venue-assigned identifier with a client-assigned one.
//! * **Instrument**: immutable listing description plus the matching
//!   configuration (price/quantity ticks and bounds) the engine validates
//!   against.
//!
//! Prices and quantities are `rust_decimal::Decimal` throughout; FIX
//! timestamps are `chrono` UTC datetimes with microsecond precision.

/// Order side and the two sides of a book.
pub mod side;

/// Order attributes: type, time-in-force, status, execution type.
pub mod order;

/// Party identification (id source, role, party triple).
pub mod party;

/// Security classification attributes.
pub mod security;

/// Market-data attributes: entry types, actions, update and subscription
/// types, reject reasons, business-level reject attributes.
pub mod mdata;

/// Venue trading phases and trading status.
pub mod phase;

/// Strongly-typed identifiers.
pub mod ids;

/// Instrument (listing) description and matching configuration.
pub mod instrument;

/// FIX value mappings for every enumerated attribute.
pub mod fix;

pub use ids::{
    ClientOrderId, ExecutionId, InstrumentId, MarketEntryId, MdRequestId, OrderId, PartyId,
    RequestSeqNum, SessionId,
};
pub use instrument::{Instrument, MatchingConfig, SecurityLookup};
pub use mdata::{
    BusinessRejectReason, MdEntryAction, MdEntryType, MdRejectReason, MdSubscriptionAction,
    MdUpdateType, RejectedMessageType,
};
pub use order::{ExecutionType, OrderStatus, OrderType, TimeInForce};
pub use party::{Party, PartyIdSource, PartyRole};
pub use phase::{PhaseTransition, TradingPhase, TradingStatus};
pub use security::{SecurityIdSource, SecurityType};
pub use side::{BookSide, Side};
