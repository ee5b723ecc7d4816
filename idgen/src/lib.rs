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

//! # 🦜 Idgen - Identifier Generation
//!
//! Monotonic, collision-resistant identifier generation for the Arara
//! market simulator. Each identifier family is produced by a *context*
//! object owning its counter state:
//!
//! * [`OrderIdContext`] — venue order ids in `YYMMDDhhmmssCCCCCC` form,
//!   unique up to one million orders per second per context.
//! * [`ExecutionIdContext`] — `"<order-id>-<n>"` per parent order.
//! * [`InstrumentIdContext`] — strictly increasing instrument ids from 1.
//! * [`MarketEntryIdContext`] — `"<seed>:<n>"` with a Unix-seconds seed.
//!
//! Contexts are deliberately not shareable between threads without external
//! synchronisation: each one belongs to a single instrument engine (or a
//! single parent order) and is mutated serially there. Exhausted counters
//! surface [`GenerationError::CollisionDetected`] rather than silently
//! recycling identifiers.

use arara_markets::{ExecutionId, InstrumentId, MarketEntryId, OrderId};
use chrono::{DateTime, Utc};
use smol_str::format_smolstr;
use thiserror::Error;
use tracing::debug;

pub mod sequence;

use sequence::{compose_timestamp_int, NumericSequence};

/// Identifier-generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The counter space of the context is exhausted; generating another
    /// identifier would collide with an already-issued one.
    #[error("identifier collision detected: generation context exhausted")]
    CollisionDetected,
}

/// Context producing strictly increasing [`InstrumentId`]s starting at 1.
#[derive(Debug)]
pub struct InstrumentIdContext {
    sequence: Option<NumericSequence>,
}

impl InstrumentIdContext {
    pub fn new() -> Self {
        Self {
            sequence: Some(NumericSequence::new(1, u64::MAX)),
        }
    }

    pub fn generate(&mut self) -> Result<InstrumentId, GenerationError> {
        let Some(sequence) = self.sequence.as_mut() else {
            return Err(GenerationError::CollisionDetected);
        };

        let id = InstrumentId(sequence.current());
        if sequence.increment().is_err() {
            self.sequence = None;
        }
        Ok(id)
    }

    /// Return the context to its initial state; the next identifier is 1.
    pub fn reset(&mut self) {
        self.sequence = Some(NumericSequence::new(1, u64::MAX));
        debug!("instrument id generation context state was reset");
    }
}

impl Default for InstrumentIdContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context producing venue [`OrderId`]s.
///
/// Identifiers compose as `YYMMDDhhmmss * 10^6 + counter` with the time
/// component derived from the clock at generation. The counter wraps within
/// a second and resets whenever the clock advances to a new second, so the
/// contract holds for up to 1,000,000 orders per second per context.
#[derive(Debug)]
pub struct OrderIdContext {
    time_component: u64,
    tick_seconds: i64,
    counter: NumericSequence,
}

impl OrderIdContext {
    const COUNTER_FIRST: u64 = 0;
    const COUNTER_LAST: u64 = 999_999;
    const TIME_MULTIPLIER: u64 = 1_000_000;

    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            time_component: compose_timestamp_int(now),
            tick_seconds: now.timestamp(),
            counter: NumericSequence::new(Self::COUNTER_FIRST, Self::COUNTER_LAST),
        }
    }

    pub fn generate(&mut self) -> OrderId {
        self.generate_at(Utc::now())
    }

    pub fn generate_at(&mut self, now: DateTime<Utc>) -> OrderId {
        // Refresh the time component before composing so the identifier
        // carries the second it was generated in.
        if now.timestamp() > self.tick_seconds {
            self.time_component = compose_timestamp_int(now);
            self.tick_seconds = now.timestamp();
            self.counter.reset();
        }

        let id = OrderId(self.time_component * Self::TIME_MULTIPLIER + self.counter.current());
        if self.counter.increment().is_err() {
            self.counter.reset();
        }
        id
    }
}

impl Default for OrderIdContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context producing [`ExecutionId`]s for a single parent order.
///
/// Emits `"<parent>-<n>"` with n starting at 1. Once the counter space is
/// exhausted the context is unusable and every further call reports
/// [`GenerationError::CollisionDetected`].
#[derive(Debug)]
pub struct ExecutionIdContext {
    parent: OrderId,
    counter: Option<NumericSequence>,
}

impl ExecutionIdContext {
    pub fn new(parent: OrderId) -> Self {
        Self {
            parent,
            counter: Some(NumericSequence::new(1, u64::MAX)),
        }
    }

    /// Resume a context for a parent order that already issued `issued`
    /// identifiers, e.g. after a snapshot restore.
    pub fn resume(parent: OrderId, issued: u64) -> Self {
        let counter = issued
            .checked_add(1)
            .map(|next| NumericSequence::starting_at(next, 1, u64::MAX));
        Self { parent, counter }
    }

    #[cfg(test)]
    fn with_counter_end(parent: OrderId, last: u64) -> Self {
        Self {
            parent,
            counter: Some(NumericSequence::new(1, last)),
        }
    }

    pub fn parent(&self) -> OrderId {
        self.parent
    }

    pub fn generate(&mut self) -> Result<ExecutionId, GenerationError> {
        let Some(counter) = self.counter.as_mut() else {
            return Err(GenerationError::CollisionDetected);
        };

        let id = ExecutionId::new(format_smolstr!("{}-{}", self.parent, counter.current()));
        if counter.increment().is_err() {
            self.counter = None;
        }
        Ok(id)
    }
}

/// Context producing [`MarketEntryId`]s.
///
/// Emits `"<seed>:<n>"` where the seed is the Unix-seconds timestamp at
/// context creation. When the counter overflows, the seed re-rolls to the
/// current Unix seconds and the counter restarts at 1, so identifiers stay
/// unique across the wrap.
#[derive(Debug)]
pub struct MarketEntryIdContext {
    seed: i64,
    counter: NumericSequence,
}

impl MarketEntryIdContext {
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            seed: now.timestamp(),
            counter: NumericSequence::new(1, u64::MAX),
        }
    }

    #[cfg(test)]
    fn with_counter_end(now: DateTime<Utc>, last: u64) -> Self {
        Self {
            seed: now.timestamp(),
            counter: NumericSequence::new(1, last),
        }
    }

    pub fn generate(&mut self) -> MarketEntryId {
        self.generate_at(Utc::now())
    }

    pub fn generate_at(&mut self, now: DateTime<Utc>) -> MarketEntryId {
        let id = MarketEntryId::new(format_smolstr!("{}:{}", self.seed, self.counter.current()));
        if self.counter.increment().is_err() {
            self.seed = now.timestamp();
            self.counter.reset();
            debug!("market entry identifier context has been reset");
        }
        id
    }
}

impl Default for MarketEntryIdContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, h, m, s).unwrap()
    }

    #[test]
    fn instrument_ids_count_up_from_one() {
        let mut ctx = InstrumentIdContext::new();
        assert_eq!(ctx.generate().unwrap(), InstrumentId(1));
        assert_eq!(ctx.generate().unwrap(), InstrumentId(2));
        assert_eq!(ctx.generate().unwrap(), InstrumentId(3));
    }

    #[test]
    fn instrument_id_context_resets_to_one() {
        let mut ctx = InstrumentIdContext::new();
        ctx.generate().unwrap();
        ctx.generate().unwrap();
        ctx.reset();
        assert_eq!(ctx.generate().unwrap(), InstrumentId(1));
    }

    #[test]
    fn order_id_composes_timestamp_and_counter() {
        let mut ctx = OrderIdContext::new_at(at(9, 30, 5));
        assert_eq!(ctx.generate_at(at(9, 30, 5)), OrderId(240307093005000000));
        assert_eq!(ctx.generate_at(at(9, 30, 5)), OrderId(240307093005000001));
    }

    #[test]
    fn order_id_counter_resets_when_second_advances() {
        let mut ctx = OrderIdContext::new_at(at(9, 30, 5));
        ctx.generate_at(at(9, 30, 5));
        ctx.generate_at(at(9, 30, 5));
        assert_eq!(ctx.generate_at(at(9, 30, 6)), OrderId(240307093006000000));
    }

    #[test]
    fn order_id_ignores_clock_going_backwards() {
        let mut ctx = OrderIdContext::new_at(at(9, 30, 5));
        ctx.generate_at(at(9, 30, 5));
        // A stale clock must not roll the time component back.
        assert_eq!(ctx.generate_at(at(9, 30, 4)), OrderId(240307093005000001));
    }

    #[test]
    fn execution_ids_are_suffixed_with_a_counter() {
        let mut ctx = ExecutionIdContext::new(OrderId(240307093005000000));
        assert_eq!(
            ctx.generate().unwrap().to_string(),
            "240307093005000000-1"
        );
        assert_eq!(
            ctx.generate().unwrap().to_string(),
            "240307093005000000-2"
        );
    }

    #[test]
    fn exhausted_execution_id_context_reports_collision() {
        let mut ctx = ExecutionIdContext::with_counter_end(OrderId(7), 2);
        assert_eq!(ctx.generate().unwrap().to_string(), "7-1");
        assert_eq!(ctx.generate().unwrap().to_string(), "7-2");
        assert_eq!(ctx.generate(), Err(GenerationError::CollisionDetected));
        assert_eq!(ctx.generate(), Err(GenerationError::CollisionDetected));
    }

    #[test]
    fn resumed_execution_id_context_continues_the_serial() {
        let mut ctx = ExecutionIdContext::resume(OrderId(7), 2);
        assert_eq!(ctx.generate().unwrap().to_string(), "7-3");

        let mut exhausted = ExecutionIdContext::resume(OrderId(7), u64::MAX);
        assert_eq!(
            exhausted.generate(),
            Err(GenerationError::CollisionDetected)
        );
    }

    #[test]
    fn market_entry_ids_compose_seed_and_counter() {
        let now = at(9, 30, 5);
        let mut ctx = MarketEntryIdContext::new_at(now);
        let seed = now.timestamp();
        assert_eq!(ctx.generate_at(now).to_string(), format!("{seed}:1"));
        assert_eq!(ctx.generate_at(now).to_string(), format!("{seed}:2"));
    }

    #[test]
    fn market_entry_id_seed_rerolls_on_counter_overflow() {
        let created = at(9, 30, 5);
        let rolled = at(9, 31, 0);
        let mut ctx = MarketEntryIdContext::with_counter_end(created, 2);

        assert_eq!(
            ctx.generate_at(created).to_string(),
            format!("{}:1", created.timestamp())
        );
        assert_eq!(
            ctx.generate_at(rolled).to_string(),
            format!("{}:2", created.timestamp())
        );
        // Overflow happened above; the next identifier uses the new seed.
        assert_eq!(
            ctx.generate_at(rolled).to_string(),
            format!("{}:1", rolled.timestamp())
        );
    }
}
