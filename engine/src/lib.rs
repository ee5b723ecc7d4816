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

//! # 🦜 Engine - Arara Trading System Core
//!
//! The core of the Arara FIX market simulator: a trading venue that
//! accepts order-entry and market-data requests from connected client
//! sessions, maintains an order book per instrument, matches orders
//! deterministically with price-time priority, and disseminates
//! executions, book updates and security-status events back to
//! subscribers.
//!
//! ## 🏗️ Main Components
//!
//! * **[`matching::MatchingEngine`]** — the per-instrument engine:
//!   placement (with IOC/FOK/GTD/GTC semantics), cancel-replace with
//!   priority rules, cancellation, expiry sweeps, trading-phase handling
//!   and auction uncrossing. Trades always execute at the resting order's
//!   price.
//! * **[`mdata::MarketDataAggregator`]** — subscription registry, snapshot
//!   assembly and incremental updates with stable market-entry
//!   identifiers; every request's deltas coalesce into one update per
//!   subscriber.
//! * **[`system::TradingSystem`]** — instrument catalogue built from
//!   reference data, request routing, and the worker pool that binds each
//!   instrument to a single matching thread.
//! * **[`validation`]** — per-field request and resting-order checkers
//!   with a stable error taxonomy surfaced as reject text.
//! * **[`reject::RejectNotifier`]** — uniform construction of every
//!   outbound reject.
//!
//! ## 🔁 Data Flow
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌──────────────────┐
//! │ FIX acceptor │───▶│ TradingSystem  │───▶│ MatchingEngine   │
//! │  (external)  │    │  route+reject  │    │  book + aggreg.  │
//! └──────▲───────┘    └────────────────┘    └────────┬─────────┘
//!        │                                           │
//!        └────────────── trading replies ◀───────────┘
//! ```
//!
//! The matching path is synchronous and lock-free: replies are handed to
//! an unbounded channel and the engine moves on. Within an instrument,
//! requests are processed in arrival order; a placement confirmation is
//! always emitted before any trade executions the same request produced.

/// Channel abstraction between the system's moving parts.
pub mod channel;

/// Engine time source.
pub mod clock;

/// Central error types.
pub mod error;

/// Logging configuration.
pub mod logging;

/// Persisted per-instrument state for restart recovery.
pub mod market_state;

/// Market-data aggregation and dissemination.
pub mod mdata;

/// Per-instrument order books.
pub mod book;

/// Per-instrument matching engines.
pub mod matching;

/// Inbound/outbound protocol messages.
pub mod protocol;

/// Uniform reject construction.
pub mod reject;

/// Catalogue, router and worker pool.
pub mod system;

/// Request and resting-order validation.
pub mod validation;

/// Venue configuration and phase schedule.
pub mod venue;

pub use book::{LimitOrder, OrderBook, OrderBookSide};
pub use channel::{unbounded, Tx, UnboundedTx};
pub use clock::{EngineClock, ManualClock, UtcClock};
pub use error::EngineError;
pub use market_state::{InstrumentState, StatsState};
pub use matching::MatchingEngine;
pub use mdata::{MarketDataAggregator, Subscription, Trade};
pub use protocol::{ReplyChannel, TradingReply, TradingRequest};
pub use reject::RejectNotifier;
pub use system::{InstrumentCatalogue, TradingSystem, TradingSystemConfig};
pub use venue::{PhaseSchedule, TifSupport, VenueConfig};
