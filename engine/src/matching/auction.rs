//! Auction uncross price selection.

use arara_markets::BookSide;
use itertools::Itertools;
use rust_decimal::Decimal;

use crate::book::OrderBook;

/// Choose the clearing price of an auction uncross.
///
/// Returns `(price, executable volume)`, or `None` when the book is not
/// crossed. Among the candidate prices inside the crossed region the one
/// maximising executable volume wins; ties prefer the smaller absolute
/// imbalance between demand and supply, then the price closest to the
/// reference price (the last trade), then the lowest price.
pub fn clearing_price(
    book: &OrderBook,
    reference: Option<Decimal>,
) -> Option<(Decimal, Decimal)> {
    let best_bid = book.side(BookSide::Bid).best_price()?;
    let best_offer = book.side(BookSide::Offer).best_price()?;
    if best_bid < best_offer {
        return None;
    }

    let candidates: Vec<Decimal> = book
        .side(BookSide::Bid)
        .orders()
        .chain(book.side(BookSide::Offer).orders())
        .filter_map(|order| order.price)
        .filter(|price| *price >= best_offer && *price <= best_bid)
        .sorted()
        .dedup()
        .collect();

    let mut selected: Option<(Decimal, Decimal, Decimal)> = None;
    for price in candidates {
        let demand: Decimal = book
            .side(BookSide::Bid)
            .orders()
            .filter(|order| order.price >= Some(price))
            .map(|order| order.remaining_quantity())
            .sum();
        let supply: Decimal = book
            .side(BookSide::Offer)
            .orders()
            .filter(|order| {
                order
                    .price
                    .map(|order_price| order_price <= price)
                    .unwrap_or(false)
            })
            .map(|order| order.remaining_quantity())
            .sum();

        let volume = demand.min(supply);
        if volume <= Decimal::ZERO {
            continue;
        }
        let imbalance = (demand - supply).abs();

        let better = match selected {
            None => true,
            Some((best_price, best_volume, best_imbalance)) => {
                if volume != best_volume {
                    volume > best_volume
                } else if imbalance != best_imbalance {
                    imbalance < best_imbalance
                } else {
                    match reference {
                        Some(reference) => {
                            (price - reference).abs() < (best_price - reference).abs()
                        }
                        None => price < best_price,
                    }
                }
            }
        };
        if better {
            selected = Some((price, volume, imbalance));
        }
    }

    selected.map(|(price, volume, _)| (price, volume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::LimitOrder;
    use arara_markets::{ClientOrderId, OrderId, OrderStatus, OrderType, SessionId, Side, TimeInForce};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn order(id: u64, side: Side, price: Decimal, quantity: Decimal, sequence: u64) -> LimitOrder {
        LimitOrder {
            order_id: OrderId(id),
            client_order_id: Some(ClientOrderId::from(format!("c{id}").as_str())),
            session: SessionId::from("client-1"),
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            total_quantity: quantity,
            cum_executed_quantity: Decimal::ZERO,
            time_in_force: TimeInForce::Day,
            expire_time: None,
            expire_date: None,
            short_sale_exempt_reason: None,
            parties: Vec::new(),
            status: OrderStatus::New,
            sequence,
            execution_count: 0,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 3, 7, 7, 55, 0).unwrap(),
        }
    }

    fn crossed_book() -> OrderBook {
        let mut book = OrderBook::new();
        book.side_mut(arara_markets::BookSide::Bid)
            .insert(order(1, Side::Buy, dec!(10.10), dec!(100), 1));
        book.side_mut(arara_markets::BookSide::Bid)
            .insert(order(2, Side::Buy, dec!(10.00), dec!(50), 2));
        book.side_mut(arara_markets::BookSide::Offer)
            .insert(order(3, Side::Sell, dec!(9.90), dec!(80), 3));
        book.side_mut(arara_markets::BookSide::Offer)
            .insert(order(4, Side::Sell, dec!(10.00), dec!(40), 4));
        book
    }

    #[test]
    fn uncrossed_book_has_no_clearing_price() {
        let mut book = OrderBook::new();
        book.side_mut(arara_markets::BookSide::Bid)
            .insert(order(1, Side::Buy, dec!(9.90), dec!(100), 1));
        book.side_mut(arara_markets::BookSide::Offer)
            .insert(order(2, Side::Sell, dec!(10.00), dec!(100), 2));
        assert_eq!(clearing_price(&book, None), None);
    }

    #[test]
    fn clearing_price_maximises_volume() {
        let book = crossed_book();
        // At 10.00: demand = 150, supply = 120 -> volume 120.
        // At 10.10: demand = 100, supply = 120 -> volume 100.
        // At 9.90:  demand = 150, supply = 80  -> volume 80.
        let (price, volume) = clearing_price(&book, None).unwrap();
        assert_eq!(price, dec!(10.00));
        assert_eq!(volume, dec!(120));
    }

    #[test]
    fn reference_price_breaks_volume_ties() {
        let mut book = OrderBook::new();
        book.side_mut(arara_markets::BookSide::Bid)
            .insert(order(1, Side::Buy, dec!(10.10), dec!(100), 1));
        book.side_mut(arara_markets::BookSide::Offer)
            .insert(order(2, Side::Sell, dec!(9.90), dec!(100), 2));
        // Both candidate prices execute 100 with equal imbalance; the one
        // nearest the reference wins.
        let (price, _) = clearing_price(&book, Some(dec!(10.20))).unwrap();
        assert_eq!(price, dec!(10.10));
        let (price, _) = clearing_price(&book, Some(dec!(9.80))).unwrap();
        assert_eq!(price, dec!(9.90));
        // Without a reference the lower candidate wins.
        let (price, _) = clearing_price(&book, None).unwrap();
        assert_eq!(price, dec!(9.90));
    }
}
