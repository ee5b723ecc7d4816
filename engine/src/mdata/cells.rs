use arara_idgen::MarketEntryIdContext;
use arara_markets::{MarketEntryId, MdEntryAction, MdEntryType, TradingPhase};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::protocol::MarketDataEntry;

/// What a cell's identity is bound to.
///
/// A top-of-book *level* entry is identified by its price level: when the
/// best price moves, a fresh entry (with a fresh identifier) is born and
/// the old one silently leaves the visible window. A *statistic* entry
/// (low/mid/high) is a single long-lived cell whose value changes in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum CellKind {
    Level,
    Statistic,
}

/// A persistent market-data entry: one of the instrument-price statistics
/// cells or a top-of-book level.
///
/// The cell tracks the observable value, the pending incremental action and
/// the stable [`MarketEntryId`]. First publication emits `New` and assigns
/// the identifier; value changes emit `Change` under the same identifier;
/// removal emits `Delete` and retires it. Once marked deleted, further
/// updates are ignored until the delete has been published and the cell
/// reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEntryCell {
    entry_type: MdEntryType,
    kind: CellKind,
    price: Option<Decimal>,
    quantity: Option<Decimal>,
    action: MdEntryAction,
    entry_id: Option<MarketEntryId>,
    dirty: bool,
}

impl MarketEntryCell {
    /// A top-of-book level cell.
    pub fn level(entry_type: MdEntryType) -> Self {
        Self::with_kind(entry_type, CellKind::Level)
    }

    /// An aggregated-statistics cell.
    pub fn statistic(entry_type: MdEntryType) -> Self {
        Self::with_kind(entry_type, CellKind::Statistic)
    }

    fn with_kind(entry_type: MdEntryType, kind: CellKind) -> Self {
        Self {
            entry_type,
            kind,
            price: None,
            quantity: None,
            action: MdEntryAction::New,
            entry_id: None,
            dirty: false,
        }
    }

    pub fn entry_type(&self) -> MdEntryType {
        self.entry_type
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn quantity(&self) -> Option<Decimal> {
        self.quantity
    }

    /// Update the price (and optionally quantity) of the cell.
    ///
    /// Returns true iff the observable state changed. For a level cell a
    /// price move births a fresh entry; only a quantity change at the same
    /// price is a `Change` of the existing one.
    pub fn update(&mut self, price: Decimal, quantity: Option<Decimal>) -> bool {
        if self.action == MdEntryAction::Delete {
            return false;
        }
        if self.price == Some(price) && self.quantity == quantity {
            return false;
        }

        self.action = match self.price {
            None => MdEntryAction::New,
            // A pending first publication stays a New whatever else changes.
            Some(_) if self.dirty && self.action == MdEntryAction::New => MdEntryAction::New,
            Some(current) if self.kind == CellKind::Level && current != price => {
                self.entry_id = None;
                MdEntryAction::New
            }
            Some(_) => MdEntryAction::Change,
        };
        self.price = Some(price);
        self.quantity = quantity;
        self.dirty = true;
        true
    }

    /// Flip the cell to `Delete` if it currently publishes a value.
    pub fn mark_deleted(&mut self) {
        if self.price.is_some() && self.action != MdEntryAction::Delete {
            self.action = MdEntryAction::Delete;
            self.dirty = true;
        }
    }

    /// Return the cell to its pristine state.
    pub fn reset(&mut self) {
        self.price = None;
        self.quantity = None;
        self.action = MdEntryAction::New;
        self.entry_id = None;
        self.dirty = false;
    }

    /// Take the pending incremental entry, if any.
    ///
    /// Assigns the stable identifier on first publication and retires it
    /// (resetting the cell) after a delete is taken.
    pub fn take_delta(
        &mut self,
        ids: &mut MarketEntryIdContext,
        now: DateTime<Utc>,
        phase: TradingPhase,
    ) -> Option<MarketDataEntry> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;

        match self.action {
            MdEntryAction::New => {
                let entry_id = ids.generate_at(now);
                self.entry_id = Some(entry_id.clone());
                Some(self.entry(Some(entry_id), Some(MdEntryAction::New), now, phase))
            }
            MdEntryAction::Change => {
                let entry_id = self.entry_id.clone();
                debug_assert!(entry_id.is_some(), "change taken from an unpublished cell");
                Some(self.entry(entry_id, Some(MdEntryAction::Change), now, phase))
            }
            MdEntryAction::Delete => {
                let entry_id = self.entry_id.take();
                let entry = MarketDataEntry {
                    entry_id,
                    entry_type: self.entry_type,
                    action: Some(MdEntryAction::Delete),
                    price: self.price,
                    quantity: None,
                    buyer_id: None,
                    seller_id: None,
                    aggressor_side: None,
                    time: Some(now),
                    phase: Some(phase),
                };
                self.reset();
                Some(entry)
            }
        }
    }

    /// Entry for a full snapshot; `None` when the cell publishes nothing.
    /// Snapshot entries omit the action.
    pub fn snapshot_entry(
        &self,
        now: DateTime<Utc>,
        phase: TradingPhase,
    ) -> Option<MarketDataEntry> {
        // A cell pending deletion no longer belongs in a snapshot.
        if self.action == MdEntryAction::Delete {
            return None;
        }
        self.price?;
        Some(self.entry(self.entry_id.clone(), None, now, phase))
    }

    fn entry(
        &self,
        entry_id: Option<MarketEntryId>,
        action: Option<MdEntryAction>,
        now: DateTime<Utc>,
        phase: TradingPhase,
    ) -> MarketDataEntry {
        MarketDataEntry {
            entry_id,
            entry_type: self.entry_type,
            action,
            price: self.price,
            quantity: self.quantity,
            buyer_id: None,
            seller_id: None,
            aggressor_side: None,
            time: Some(now),
            phase: Some(phase),
        }
    }
}
