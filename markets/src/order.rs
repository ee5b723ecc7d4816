use serde::{Deserialize, Serialize};
use std::fmt;

/// Order type supported by the venue.
///
/// A `Market` order is priced against the opposite top of book at matching
/// time and never rests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Limit,
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "Limit"),
            OrderType::Market => write!(f, "Market"),
        }
    }
}

/// Time-in-force constraining how long an order may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    Day,
    ImmediateOrCancel,
    FillOrKill,
    GoodTillDate,
    GoodTillCancel,
}

impl TimeInForce {
    /// GoodTillDate/GoodTillCancel orders must carry exactly one of
    /// expire_time or expire_date; every other TIF must carry neither.
    pub fn requires_expire_info(&self) -> bool {
        matches!(self, TimeInForce::GoodTillDate | TimeInForce::GoodTillCancel)
    }

    /// An immediate TIF never leaves a remainder resting in the book.
    pub fn is_immediate(&self) -> bool {
        matches!(
            self,
            TimeInForce::ImmediateOrCancel | TimeInForce::FillOrKill
        )
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Day => write!(f, "Day"),
            TimeInForce::ImmediateOrCancel => write!(f, "ImmediateOrCancel"),
            TimeInForce::FillOrKill => write!(f, "FillOrKill"),
            TimeInForce::GoodTillDate => write!(f, "GoodTillDate"),
            TimeInForce::GoodTillCancel => write!(f, "GoodTillCancel"),
        }
    }
}

/// Lifecycle status of an order.
///
/// ```text
///           ┌────► Filled ───┐
///           │                ▼
/// New ──► PartiallyFilled ─► Cancelled   (terminal)
///   │        │
///   │        └► Modified ──► (back to a resting status)
///   │
///   └──────► Rejected        (terminal, never rests)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Modified,
    Cancelled,
    Rejected,
}

impl OrderStatus {
    /// Terminal statuses are immutable; requests targeting a terminal order
    /// are rejected.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled | OrderStatus::Cancelled | OrderStatus::Rejected
        )
    }

    /// Statuses an order resting in a book may have.
    pub fn is_resting(&self) -> bool {
        matches!(
            self,
            OrderStatus::New | OrderStatus::PartiallyFilled | OrderStatus::Modified
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => write!(f, "New"),
            OrderStatus::PartiallyFilled => write!(f, "PartiallyFilled"),
            OrderStatus::Filled => write!(f, "Filled"),
            OrderStatus::Modified => write!(f, "Modified"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
            OrderStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Kind of event an execution report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExecutionType {
    OrderPlaced,
    OrderModified,
    OrderCancelled,
    Rejected,
    OrderTraded,
}

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionType::OrderPlaced => write!(f, "OrderPlaced"),
            ExecutionType::OrderModified => write!(f, "OrderModified"),
            ExecutionType::OrderCancelled => write!(f, "OrderCancelled"),
            ExecutionType::Rejected => write!(f, "Rejected"),
            ExecutionType::OrderTraded => write!(f, "OrderTraded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_are_not_resting() {
        for status in [
            OrderStatus::Filled,
            OrderStatus::Cancelled,
            OrderStatus::Rejected,
        ] {
            assert!(status.is_terminal());
            assert!(!status.is_resting());
        }
    }

    #[test]
    fn modified_order_keeps_resting() {
        assert!(OrderStatus::Modified.is_resting());
        assert!(!OrderStatus::Modified.is_terminal());
    }

    #[test]
    fn only_gtd_and_gtc_carry_expire_info() {
        assert!(TimeInForce::GoodTillDate.requires_expire_info());
        assert!(TimeInForce::GoodTillCancel.requires_expire_info());
        assert!(!TimeInForce::Day.requires_expire_info());
        assert!(!TimeInForce::ImmediateOrCancel.requires_expire_info());
        assert!(!TimeInForce::FillOrKill.requires_expire_info());
    }
}
