use arara_markets::{BookSide, ClientOrderId, OrderId, SessionId};
use chrono::{DateTime, FixedOffset, Utc};
use fnv::FnvHashMap;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::order::LimitOrder;

/// Priority key of a resting order.
///
/// `rank` is the raw price on the offer side and the negated price on the
/// bid side, so ascending map order is strict price-time priority on both
/// sides: better price first, then smaller arrival sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey {
    rank: Decimal,
    sequence: u64,
}

/// One side of an order book: the price-time-priority ordered container of
/// resting limit orders, with an id index for O(log n) removal.
#[derive(Debug)]
pub struct OrderBookSide {
    side: BookSide,
    orders: BTreeMap<PriorityKey, LimitOrder>,
    index: FnvHashMap<OrderId, PriorityKey>,
}

impl OrderBookSide {
    pub fn new(side: BookSide) -> Self {
        Self {
            side,
            orders: BTreeMap::new(),
            index: FnvHashMap::default(),
        }
    }

    pub fn side(&self) -> BookSide {
        self.side
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn key_for(&self, price: Decimal, sequence: u64) -> PriorityKey {
        let rank = match self.side {
            BookSide::Bid => -price,
            BookSide::Offer => price,
        };
        PriorityKey { rank, sequence }
    }

    /// Rest an order on this side. The order must be priced and resting.
    pub fn insert(&mut self, order: LimitOrder) {
        let price = order
            .price
            .expect("an order cannot rest in a book without a price");
        debug_assert!(order.status.is_resting());
        debug_assert_eq!(order.side.book_side(), self.side);

        let key = self.key_for(price, order.sequence);
        self.index.insert(order.order_id, key);
        let evicted = self.orders.insert(key, order);
        debug_assert!(evicted.is_none(), "duplicate priority key in book side");
    }

    pub fn best(&self) -> Option<&LimitOrder> {
        self.orders.first_key_value().map(|(_, order)| order)
    }

    pub fn best_mut(&mut self) -> Option<&mut LimitOrder> {
        self.orders.iter_mut().next().map(|(_, order)| order)
    }

    pub fn best_price(&self) -> Option<Decimal> {
        self.best().and_then(|order| order.price)
    }

    pub fn pop_best(&mut self) -> Option<LimitOrder> {
        let (_, order) = self.orders.pop_first()?;
        self.index.remove(&order.order_id);
        Some(order)
    }

    pub fn get(&self, order_id: OrderId) -> Option<&LimitOrder> {
        let key = self.index.get(&order_id)?;
        self.orders.get(key)
    }

    pub fn get_mut(&mut self, order_id: OrderId) -> Option<&mut LimitOrder> {
        let key = self.index.get(&order_id)?;
        self.orders.get_mut(key)
    }

    pub fn remove(&mut self, order_id: OrderId) -> Option<LimitOrder> {
        let key = self.index.remove(&order_id)?;
        self.orders.remove(&key)
    }

    pub fn contains(&self, order_id: OrderId) -> bool {
        self.index.contains_key(&order_id)
    }

    /// Resting orders in priority order.
    pub fn orders(&self) -> impl Iterator<Item = &LimitOrder> {
        self.orders.values()
    }

    /// Locate a session's order by its client order id.
    pub fn find_client_order(
        &self,
        session: &SessionId,
        client_order_id: &ClientOrderId,
    ) -> Option<OrderId> {
        self.orders
            .values()
            .find(|order| {
                order.session == *session
                    && order.client_order_id.as_ref() == Some(client_order_id)
            })
            .map(|order| order.order_id)
    }

    /// Best price level as `(price, aggregated remaining quantity)`.
    pub fn top_of_book(&self) -> Option<(Decimal, Decimal)> {
        let best_price = self.best_price()?;
        let quantity = self
            .orders
            .values()
            .take_while(|order| order.price == Some(best_price))
            .map(|order| order.remaining_quantity())
            .sum();
        Some((best_price, quantity))
    }

    /// Aggregate remaining quantity an aggressor with the given price limit
    /// could execute against this side. `None` means no limit (a market
    /// order).
    pub fn aggressable_quantity(&self, limit: Option<Decimal>) -> Decimal {
        self.orders
            .values()
            .take_while(|order| match (limit, order.price) {
                (Some(limit), Some(price)) => match self.side {
                    BookSide::Offer => price <= limit,
                    BookSide::Bid => price >= limit,
                },
                _ => true,
            })
            .map(|order| order.remaining_quantity())
            .sum()
    }

    /// Remove and return every order the expiry sweep should cancel.
    pub fn drain_expired(&mut self, now: DateTime<Utc>, timezone: &FixedOffset) -> Vec<LimitOrder> {
        let expired_ids: Vec<OrderId> = self
            .orders
            .values()
            .filter(|order| order.is_expired(now, timezone))
            .map(|order| order.order_id)
            .collect();

        expired_ids
            .into_iter()
            .filter_map(|order_id| self.remove(order_id))
            .collect()
    }

    /// Remove and return every order owned by a session.
    pub fn remove_session_orders(&mut self, session: &SessionId) -> Vec<LimitOrder> {
        let session_ids: Vec<OrderId> = self
            .orders
            .values()
            .filter(|order| order.session == *session)
            .map(|order| order.order_id)
            .collect();

        session_ids
            .into_iter()
            .filter_map(|order_id| self.remove(order_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arara_markets::{OrderStatus, OrderType, Side, TimeInForce};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn order(id: u64, side: Side, price: Decimal, sequence: u64) -> LimitOrder {
        LimitOrder {
            order_id: OrderId(id),
            client_order_id: Some(ClientOrderId::from(format!("c{id}").as_str())),
            session: SessionId::from("client-1"),
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            total_quantity: dec!(100),
            cum_executed_quantity: Decimal::ZERO,
            time_in_force: TimeInForce::GoodTillCancel,
            expire_time: None,
            expire_date: None,
            short_sale_exempt_reason: None,
            parties: Vec::new(),
            status: OrderStatus::New,
            sequence,
            execution_count: 0,
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn bid_side_orders_best_price_first() {
        let mut side = OrderBookSide::new(BookSide::Bid);
        side.insert(order(1, Side::Buy, dec!(10.00), 1));
        side.insert(order(2, Side::Buy, dec!(10.05), 2));
        side.insert(order(3, Side::Buy, dec!(9.95), 3));

        let prices: Vec<Decimal> =
            side.orders().map(|order| order.price.unwrap()).collect();
        assert_eq!(prices, vec![dec!(10.05), dec!(10.00), dec!(9.95)]);
        assert_eq!(side.best_price(), Some(dec!(10.05)));
    }

    #[test]
    fn offer_side_orders_lowest_price_first() {
        let mut side = OrderBookSide::new(BookSide::Offer);
        side.insert(order(1, Side::Sell, dec!(10.00), 1));
        side.insert(order(2, Side::Sell, dec!(9.95), 2));

        assert_eq!(side.best_price(), Some(dec!(9.95)));
    }

    #[test]
    fn equal_prices_order_by_arrival_sequence() {
        let mut side = OrderBookSide::new(BookSide::Bid);
        side.insert(order(2, Side::Buy, dec!(10.00), 2));
        side.insert(order(1, Side::Buy, dec!(10.00), 1));

        let ids: Vec<OrderId> = side.orders().map(|order| order.order_id).collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(2)]);
    }

    #[test]
    fn removal_by_id_keeps_the_rest_ordered() {
        let mut side = OrderBookSide::new(BookSide::Offer);
        side.insert(order(1, Side::Sell, dec!(10.00), 1));
        side.insert(order(2, Side::Sell, dec!(10.05), 2));

        let removed = side.remove(OrderId(1)).unwrap();
        assert_eq!(removed.order_id, OrderId(1));
        assert!(!side.contains(OrderId(1)));
        assert_eq!(side.best_price(), Some(dec!(10.05)));
    }

    #[test]
    fn top_of_book_aggregates_the_best_level() {
        let mut side = OrderBookSide::new(BookSide::Bid);
        side.insert(order(1, Side::Buy, dec!(10.00), 1));
        side.insert(order(2, Side::Buy, dec!(10.00), 2));
        side.insert(order(3, Side::Buy, dec!(9.90), 3));

        assert_eq!(side.top_of_book(), Some((dec!(10.00), dec!(200))));
    }

    #[test]
    fn aggressable_quantity_respects_the_price_limit() {
        let mut side = OrderBookSide::new(BookSide::Offer);
        side.insert(order(1, Side::Sell, dec!(10.00), 1));
        side.insert(order(2, Side::Sell, dec!(10.10), 2));
        side.insert(order(3, Side::Sell, dec!(10.20), 3));

        assert_eq!(side.aggressable_quantity(Some(dec!(10.10))), dec!(200));
        assert_eq!(side.aggressable_quantity(None), dec!(300));
        assert_eq!(side.aggressable_quantity(Some(dec!(9.00))), Decimal::ZERO);
    }

    #[test]
    fn find_client_order_is_scoped_to_the_session() {
        let mut side = OrderBookSide::new(BookSide::Bid);
        side.insert(order(1, Side::Buy, dec!(10.00), 1));

        let cid = ClientOrderId::from("c1");
        assert_eq!(
            side.find_client_order(&SessionId::from("client-1"), &cid),
            Some(OrderId(1))
        );
        assert_eq!(
            side.find_client_order(&SessionId::from("client-2"), &cid),
            None
        );
    }
}
