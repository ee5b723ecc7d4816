use arara_markets::{
    ClientOrderId, OrderId, OrderStatus, OrderType, Party, SessionId, Side, TimeInForce,
};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A venue order, resting or in flight through the matching path.
///
/// Market orders are represented with `price: None` until they are priced
/// against the opposite top of book; an order never rests without a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub order_id: OrderId,
    pub client_order_id: Option<ClientOrderId>,
    pub session: SessionId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Option<Decimal>,
    pub total_quantity: Decimal,
    pub cum_executed_quantity: Decimal,
    pub time_in_force: TimeInForce,
    pub expire_time: Option<DateTime<Utc>>,
    pub expire_date: Option<NaiveDate>,
    pub short_sale_exempt_reason: Option<SmolStr>,
    pub parties: Vec<Party>,
    pub status: OrderStatus,
    /// Arrival sequence number assigned by the book; the time component of
    /// price-time priority.
    pub sequence: u64,
    /// How many execution identifiers this order has consumed. Persisted so
    /// identifier generation continues correctly after a restore.
    pub execution_count: u64,
    pub created_at: DateTime<Utc>,
}

impl LimitOrder {
    pub fn remaining_quantity(&self) -> Decimal {
        self.total_quantity - self.cum_executed_quantity
    }

    pub fn is_filled(&self) -> bool {
        self.cum_executed_quantity >= self.total_quantity
    }

    /// Record a fill of `quantity` against this order.
    ///
    /// Broken quantity accounting is a programming error, not a client
    /// error, so it aborts loudly.
    pub fn execute(&mut self, quantity: Decimal) {
        assert!(
            quantity > Decimal::ZERO && quantity <= self.remaining_quantity(),
            "order {} executed {} with only {} remaining",
            self.order_id,
            quantity,
            self.remaining_quantity()
        );

        self.cum_executed_quantity += quantity;
        self.status = if self.is_filled() {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
    }

    pub fn mark_cancelled(&mut self) {
        debug_assert!(!self.status.is_terminal());
        self.status = OrderStatus::Cancelled;
    }

    pub fn mark_modified(&mut self) {
        debug_assert!(!self.status.is_terminal());
        self.status = OrderStatus::Modified;
    }

    /// Whether the periodic expiry sweep should cancel this order.
    ///
    /// Calendar comparisons use the venue-local timezone.
    pub fn is_expired(&self, now: DateTime<Utc>, timezone: &FixedOffset) -> bool {
        let today = now.with_timezone(timezone).date_naive();
        match self.time_in_force {
            TimeInForce::Day => self.created_at.with_timezone(timezone).date_naive() < today,
            TimeInForce::GoodTillDate | TimeInForce::GoodTillCancel => {
                let time_expired = self
                    .expire_time
                    .map(|expire_time| expire_time <= now)
                    .unwrap_or(false);
                let date_expired = self
                    .expire_date
                    .map(|expire_date| expire_date < today)
                    .unwrap_or(false);
                time_expired || date_expired
            }
            TimeInForce::ImmediateOrCancel | TimeInForce::FillOrKill => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn order(time_in_force: TimeInForce) -> LimitOrder {
        LimitOrder {
            order_id: OrderId(1),
            client_order_id: None,
            session: SessionId::from("client-1"),
            side: Side::Buy,
            order_type: OrderType::Limit,
            price: Some(dec!(10.00)),
            total_quantity: dec!(100),
            cum_executed_quantity: Decimal::ZERO,
            time_in_force,
            expire_time: None,
            expire_date: None,
            short_sale_exempt_reason: None,
            parties: Vec::new(),
            status: OrderStatus::New,
            sequence: 1,
            execution_count: 0,
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn partial_fill_keeps_the_order_partially_filled() {
        let mut order = order(TimeInForce::Day);
        order.execute(dec!(40));
        assert_eq!(order.status, OrderStatus::PartiallyFilled);
        assert_eq!(order.remaining_quantity(), dec!(60));
        order.execute(dec!(60));
        assert_eq!(order.status, OrderStatus::Filled);
        assert!(order.is_filled());
    }

    #[test]
    #[should_panic(expected = "executed")]
    fn overfill_aborts() {
        let mut order = order(TimeInForce::Day);
        order.execute(dec!(101));
    }

    #[test]
    fn day_order_expires_on_the_next_local_day() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let order = order(TimeInForce::Day);
        let same_day = Utc.with_ymd_and_hms(2024, 3, 7, 20, 0, 0).unwrap();
        let next_day = Utc.with_ymd_and_hms(2024, 3, 8, 9, 0, 0).unwrap();
        assert!(!order.is_expired(same_day, &utc));
        assert!(order.is_expired(next_day, &utc));
    }

    #[test]
    fn gtd_order_expires_when_its_time_passes() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let mut gtd = order(TimeInForce::GoodTillDate);
        let expire = Utc.with_ymd_and_hms(2024, 3, 7, 10, 0, 0).unwrap();
        gtd.expire_time = Some(expire);

        assert!(!gtd.is_expired(expire - chrono::Duration::seconds(1), &utc));
        assert!(gtd.is_expired(expire, &utc));
    }
}
