//! Per-instrument order book: two price-time-priority sides plus the
//! arrival sequence counter that provides the time component of priority.

use arara_markets::{BookSide, ClientOrderId, OrderId, SessionId};

mod order;
mod side;

pub use order::LimitOrder;
pub use side::{OrderBookSide, PriorityKey};

/// An instrument's order book.
#[derive(Debug)]
pub struct OrderBook {
    bid: OrderBookSide,
    offer: OrderBookSide,
    next_sequence: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bid: OrderBookSide::new(BookSide::Bid),
            offer: OrderBookSide::new(BookSide::Offer),
            next_sequence: 1,
        }
    }

    pub fn side(&self, side: BookSide) -> &OrderBookSide {
        match side {
            BookSide::Bid => &self.bid,
            BookSide::Offer => &self.offer,
        }
    }

    pub fn side_mut(&mut self, side: BookSide) -> &mut OrderBookSide {
        match side {
            BookSide::Bid => &mut self.bid,
            BookSide::Offer => &mut self.offer,
        }
    }

    /// Allocate the next arrival sequence number.
    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// Reserve sequence space after a restore so new arrivals sort behind
    /// every restored order.
    pub fn bump_sequence_past(&mut self, sequence: u64) {
        if sequence >= self.next_sequence {
            self.next_sequence = sequence + 1;
        }
    }

    /// Locate a session's order by venue order id or client order id.
    ///
    /// Orders are invisible to foreign sessions: a match on identifiers
    /// owned by another session reports not-found.
    pub fn locate(
        &self,
        venue_order_id: Option<OrderId>,
        client_order_id: Option<&ClientOrderId>,
        session: &SessionId,
    ) -> Option<(BookSide, OrderId)> {
        if let Some(order_id) = venue_order_id {
            for book_side in [BookSide::Bid, BookSide::Offer] {
                if let Some(order) = self.side(book_side).get(order_id) {
                    if order.session == *session {
                        return Some((book_side, order_id));
                    }
                }
            }
            return None;
        }

        let client_order_id = client_order_id?;
        for book_side in [BookSide::Bid, BookSide::Offer] {
            if let Some(order_id) = self.side(book_side).find_client_order(session, client_order_id)
            {
                return Some((book_side, order_id));
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.bid.is_empty() && self.offer.is_empty()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
