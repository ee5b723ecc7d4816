use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Venue trading phase (FIX TradingSessionSubID).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum TradingPhase {
    Open,
    Closed,
    PostTrading,
    OpeningAuction,
    IntradayAuction,
    ClosingAuction,
}

impl TradingPhase {
    /// Auction phases defer matching to the uncross at phase end.
    pub fn is_auction(&self) -> bool {
        matches!(
            self,
            TradingPhase::OpeningAuction
                | TradingPhase::IntradayAuction
                | TradingPhase::ClosingAuction
        )
    }

    /// Continuous matching only happens while the venue is open.
    pub fn allows_continuous_trading(&self) -> bool {
        matches!(self, TradingPhase::Open)
    }

    /// Parse the display name used by reference-data records.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.to_string() == value)
    }
}

/// Instrument-level trading status (FIX SecurityTradingStatus).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum TradingStatus {
    Halt,
    Resume,
}

/// A single transition on the trading-phase stream consumed by the engine.
///
/// `allow_cancels` is the venue's per-phase policy: when the phase does not
/// accept placements (Closed, Halt), cancellation requests are still honoured
/// iff this flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub phase: TradingPhase,
    pub status: TradingStatus,
    pub allow_cancels: bool,
}

impl PhaseTransition {
    pub fn new(phase: TradingPhase, status: TradingStatus, allow_cancels: bool) -> Self {
        Self {
            phase,
            status,
            allow_cancels,
        }
    }

    /// An open, non-halted venue accepts and matches orders continuously.
    pub fn accepts_placements(&self) -> bool {
        self.status == TradingStatus::Resume
            && (self.phase.allows_continuous_trading() || self.phase.is_auction())
    }

    pub fn accepts_cancellations(&self) -> bool {
        self.accepts_placements() || self.allow_cancels
    }
}

impl Default for PhaseTransition {
    fn default() -> Self {
        Self::new(TradingPhase::Open, TradingStatus::Resume, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halted_venue_rejects_placements() {
        let transition = PhaseTransition::new(TradingPhase::Open, TradingStatus::Halt, true);
        assert!(!transition.accepts_placements());
        assert!(transition.accepts_cancellations());
    }

    #[test]
    fn closed_venue_without_cancel_policy_rejects_everything() {
        let transition = PhaseTransition::new(TradingPhase::Closed, TradingStatus::Resume, false);
        assert!(!transition.accepts_placements());
        assert!(!transition.accepts_cancellations());
    }

    #[test]
    fn auction_phases_accept_orders() {
        let transition =
            PhaseTransition::new(TradingPhase::OpeningAuction, TradingStatus::Resume, true);
        assert!(transition.accepts_placements());
        assert!(TradingPhase::OpeningAuction.is_auction());
        assert!(!TradingPhase::OpeningAuction.allows_continuous_trading());
    }
}
