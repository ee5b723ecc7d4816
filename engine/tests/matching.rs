//! Continuous-matching scenarios: price-time priority, trade pricing,
//! time-in-force semantics and the cancel/replace rules.

mod common;

use arara_markets::{BookSide, OrderStatus, Side, TimeInForce};
use arara_engine::protocol::{CancelRejectResponseTo, TradingReply};
use rust_decimal_macros::dec;

use common::{cancel, engine, limit, limit_with_tif, market, modify};

#[test]
fn crossing_limit_produces_trade_at_resting_price() {
    let (mut engine, replies) = engine();

    engine.place(limit("buyer", "b1", Side::Buy, dec!(100), dec!(10.00)));
    replies.take();

    engine.place(limit("seller", "s1", Side::Sell, dec!(60), dec!(9.50)));
    let replies = replies.take();

    let TradingReply::OrderPlaced(confirmation) = &replies[0] else {
        panic!("expected a placement confirmation, got {:?}", replies[0]);
    };
    assert_eq!(confirmation.order_status, OrderStatus::New);

    let TradingReply::OrderTraded(maker_report) = &replies[1] else {
        panic!("expected the maker execution report, got {:?}", replies[1]);
    };
    let TradingReply::OrderTraded(aggressor_report) = &replies[2] else {
        panic!("expected the aggressor execution report, got {:?}", replies[2]);
    };

    // The trade executes at the resting (passive) order's price.
    assert_eq!(maker_report.trade_price, dec!(10.00));
    assert_eq!(maker_report.traded_quantity, dec!(60));
    assert_eq!(maker_report.side, Some(Side::Buy));
    assert_eq!(maker_report.order_status, OrderStatus::PartiallyFilled);
    assert_eq!(maker_report.cum_executed_quantity, dec!(60));
    assert_eq!(maker_report.leaves_quantity, dec!(40));

    assert_eq!(aggressor_report.trade_price, dec!(10.00));
    assert_eq!(aggressor_report.order_status, OrderStatus::Filled);
    assert_eq!(aggressor_report.leaves_quantity, dec!(0));
    assert_eq!(aggressor_report.aggressor_side, Some(Side::Sell));

    // buy.price >= trade_price >= sell.price
    assert!(maker_report.order_price.unwrap() >= maker_report.trade_price);
    assert!(aggressor_report.order_price.unwrap() <= aggressor_report.trade_price);

    // The buy remains resting with the remainder; the offer side is empty.
    let bid = engine.book().side(BookSide::Bid);
    assert_eq!(bid.len(), 1);
    let resting = bid.best().unwrap();
    assert_eq!(resting.cum_executed_quantity, dec!(60));
    assert_eq!(resting.remaining_quantity(), dec!(40));
    assert!(engine.book().side(BookSide::Offer).is_empty());
}

#[test]
fn ioc_partial_execution_cancels_the_remainder() {
    let (mut engine, replies) = engine();

    engine.place(limit("buyer", "b1", Side::Buy, dec!(50), dec!(10.00)));
    replies.take();

    engine.place(limit_with_tif(
        "seller",
        "s1",
        Side::Sell,
        dec!(80),
        dec!(10.00),
        TimeInForce::ImmediateOrCancel,
    ));
    let replies = replies.take();

    assert!(matches!(&replies[0], TradingReply::OrderPlaced(_)));
    let TradingReply::OrderTraded(maker_report) = &replies[1] else {
        panic!("expected the maker execution report");
    };
    assert_eq!(maker_report.traded_quantity, dec!(50));
    assert_eq!(maker_report.order_status, OrderStatus::Filled);

    let cancellation = replies
        .iter()
        .find_map(|reply| match reply {
            TradingReply::OrderCancelled(cancellation) => Some(cancellation),
            _ => None,
        })
        .expect("the unfilled IOC remainder must be cancelled");
    assert_eq!(cancellation.order_status, OrderStatus::Cancelled);
    assert_eq!(cancellation.cum_executed_quantity, dec!(50));
    assert_eq!(cancellation.leaves_quantity, dec!(0));

    // The IOC never rests: both sides are empty afterwards.
    assert!(engine.book().is_empty());
}

#[test]
fn fill_or_kill_failure_leaves_the_book_untouched() {
    let (mut engine, replies) = engine();

    engine.place(limit("buyer", "b1", Side::Buy, dec!(50), dec!(10.00)));
    replies.take();

    engine.place(limit_with_tif(
        "seller",
        "s1",
        Side::Sell,
        dec!(80),
        dec!(10.00),
        TimeInForce::FillOrKill,
    ));
    let replies = replies.take();

    assert_eq!(replies.len(), 1);
    let TradingReply::OrderPlacementRejected(reject) = &replies[0] else {
        panic!("expected a placement reject, got {:?}", replies[0]);
    };
    assert_eq!(reject.order_status, OrderStatus::Cancelled);

    // No fills happened: the resting buy is untouched.
    let resting = engine.book().side(BookSide::Bid).best().unwrap();
    assert_eq!(resting.cum_executed_quantity, dec!(0));
    assert_eq!(resting.remaining_quantity(), dec!(50));
}

#[test]
fn fill_or_kill_executes_fully_when_liquidity_suffices() {
    let (mut engine, replies) = engine();

    engine.place(limit("buyer", "b1", Side::Buy, dec!(50), dec!(10.00)));
    engine.place(limit("buyer", "b2", Side::Buy, dec!(50), dec!(9.99)));
    replies.take();

    engine.place(limit_with_tif(
        "seller",
        "s1",
        Side::Sell,
        dec!(80),
        dec!(9.99),
        TimeInForce::FillOrKill,
    ));
    let replies = replies.take();

    let traded: rust_decimal::Decimal = replies
        .iter()
        .filter_map(|reply| match reply {
            TradingReply::OrderTraded(report) if report.side == Some(Side::Sell) => {
                Some(report.traded_quantity)
            }
            _ => None,
        })
        .sum();
    assert_eq!(traded, dec!(80));
    assert!(engine.book().side(BookSide::Offer).is_empty());
}

#[test]
fn modification_priority_rules() {
    let (mut engine, replies) = engine();

    engine.place(limit("client", "A", Side::Buy, dec!(10), dec!(10.00)));
    engine.place(limit("client", "B", Side::Buy, dec!(10), dec!(10.00)));
    replies.take();

    // Same price, same quantity: priority is preserved and the venue order
    // id does not change.
    let original_ids: Vec<_> = engine
        .book()
        .side(BookSide::Bid)
        .orders()
        .map(|order| order.order_id)
        .collect();
    engine.modify(modify("client", "A", "A2", Side::Buy, dec!(10), dec!(10.00)));
    let replies_in_place = replies.take();
    let TradingReply::OrderModified(confirmation) = &replies_in_place[0] else {
        panic!("expected a modification confirmation");
    };
    assert_eq!(confirmation.venue_order_id, original_ids[0]);

    let ids_after: Vec<_> = engine
        .book()
        .side(BookSide::Bid)
        .orders()
        .map(|order| order.order_id)
        .collect();
    assert_eq!(ids_after, original_ids);

    // A price improvement re-queues the order with a new venue order id at
    // the top of the book.
    engine.modify(modify("client", "A2", "A3", Side::Buy, dec!(10), dec!(10.01)));
    let replies_repriced = replies.take();
    let TradingReply::OrderModified(confirmation) = &replies_repriced[0] else {
        panic!("expected a modification confirmation");
    };
    assert_ne!(confirmation.venue_order_id, original_ids[0]);

    let best = engine.book().side(BookSide::Bid).best().unwrap();
    assert_eq!(best.order_id, confirmation.venue_order_id);
    assert_eq!(best.price, Some(dec!(10.01)));
}

#[test]
fn quantity_decrease_preserves_priority_and_increase_loses_it() {
    let (mut engine, replies) = engine();

    engine.place(limit("client", "A", Side::Buy, dec!(20), dec!(10.00)));
    engine.place(limit("client", "B", Side::Buy, dec!(20), dec!(10.00)));
    replies.take();

    engine.modify(modify("client", "A", "A2", Side::Buy, dec!(10), dec!(10.00)));
    replies.take();
    let first = engine.book().side(BookSide::Bid).best().unwrap();
    assert_eq!(first.client_order_id.as_ref().unwrap().to_string(), "A2");
    assert_eq!(first.total_quantity, dec!(10));

    engine.modify(modify("client", "A2", "A3", Side::Buy, dec!(30), dec!(10.00)));
    replies.take();
    let first = engine.book().side(BookSide::Bid).best().unwrap();
    assert_eq!(first.client_order_id.as_ref().unwrap().to_string(), "B");
}

#[test]
fn placement_confirmation_precedes_trades_of_the_same_request() {
    let (mut engine, replies) = engine();

    engine.place(limit("buyer", "b1", Side::Buy, dec!(100), dec!(10.00)));
    replies.take();

    engine.place(limit("seller", "s1", Side::Sell, dec!(100), dec!(10.00)));
    let replies = replies.take();

    let placement_position = replies
        .iter()
        .position(|reply| matches!(reply, TradingReply::OrderPlaced(_)))
        .unwrap();
    let first_trade_position = replies
        .iter()
        .position(|reply| matches!(reply, TradingReply::OrderTraded(_)))
        .unwrap();
    assert!(placement_position < first_trade_position);
}

#[test]
fn executions_respect_price_time_priority() {
    let (mut engine, replies) = engine();

    engine.place(limit("m1", "a", Side::Sell, dec!(10), dec!(10.02)));
    engine.place(limit("m2", "b", Side::Sell, dec!(10), dec!(10.01)));
    engine.place(limit("m3", "c", Side::Sell, dec!(10), dec!(10.02)));
    replies.take();

    engine.place(limit("taker", "t", Side::Buy, dec!(30), dec!(10.02)));
    let replies = replies.take();

    let maker_sessions: Vec<String> = replies
        .iter()
        .filter_map(|reply| match reply {
            TradingReply::OrderTraded(report) if report.side == Some(Side::Sell) => {
                Some(report.session.to_string())
            }
            _ => None,
        })
        .collect();
    // Better price first; equal prices by arrival order.
    assert_eq!(maker_sessions, vec!["m2", "m1", "m3"]);
}

#[test]
fn place_then_cancel_returns_the_book_to_its_previous_state() {
    let (mut engine, replies) = engine();

    engine.place(limit("client", "keep", Side::Buy, dec!(10), dec!(9.99)));
    replies.take();
    let before: Vec<_> = engine
        .book()
        .side(BookSide::Bid)
        .orders()
        .cloned()
        .collect();

    engine.place(limit("client", "temp", Side::Buy, dec!(10), dec!(10.00)));
    engine.cancel(cancel("client", "temp"));
    let replies = replies.take();

    let cancellation = replies
        .iter()
        .find_map(|reply| match reply {
            TradingReply::OrderCancelled(cancellation) => Some(cancellation),
            _ => None,
        })
        .expect("explicit cancellation must confirm");
    assert_eq!(cancellation.order_status, OrderStatus::Cancelled);

    let after: Vec<_> = engine
        .book()
        .side(BookSide::Bid)
        .orders()
        .cloned()
        .collect();
    assert_eq!(before, after);
}

#[test]
fn cancel_of_unknown_order_is_rejected() {
    let (mut engine, replies) = engine();

    engine.cancel(cancel("client", "missing"));
    let replies = replies.take();

    let TradingReply::OrderCancellationRejected(reject) = &replies[0] else {
        panic!("expected a cancellation reject");
    };
    assert_eq!(reject.response_to, CancelRejectResponseTo::Cancel);
}

#[test]
fn cross_session_modification_is_rejected() {
    let (mut engine, replies) = engine();

    engine.place(limit("owner", "A", Side::Buy, dec!(10), dec!(10.00)));
    replies.take();

    engine.modify(modify("intruder", "A", "A2", Side::Buy, dec!(10), dec!(10.01)));
    let replies = replies.take();

    let TradingReply::OrderCancellationRejected(reject) = &replies[0] else {
        panic!("expected a cancellation reject for the cancel-replace");
    };
    assert_eq!(reject.response_to, CancelRejectResponseTo::CancelReplace);

    // The owner's order is untouched.
    assert_eq!(engine.book().side(BookSide::Bid).len(), 1);
}

#[test]
fn market_order_with_empty_opposite_book() {
    let (mut engine, replies) = engine();

    // Immediate market orders cancel without ever resting.
    let mut ioc = market("client", "m1", Side::Buy, dec!(10));
    ioc.time_in_force = Some(TimeInForce::ImmediateOrCancel);
    engine.place(ioc);
    let ioc_replies = replies.take();
    let TradingReply::OrderPlaced(confirmation) = &ioc_replies[0] else {
        panic!("expected a placement confirmation");
    };
    assert_eq!(confirmation.order_status, OrderStatus::Cancelled);

    // Non-immediate market orders are rejected outright.
    engine.place(market("client", "m2", Side::Buy, dec!(10)));
    let day_replies = replies.take();
    assert!(matches!(
        day_replies[0],
        TradingReply::OrderPlacementRejected(_)
    ));

    assert!(engine.book().is_empty());
}

#[test]
fn market_order_sweeps_multiple_levels() {
    let (mut engine, replies) = engine();

    engine.place(limit("m1", "a", Side::Sell, dec!(10), dec!(10.00)));
    engine.place(limit("m2", "b", Side::Sell, dec!(10), dec!(10.05)));
    replies.take();

    engine.place(market("taker", "t", Side::Buy, dec!(15)));
    let replies = replies.take();

    let prices: Vec<_> = replies
        .iter()
        .filter_map(|reply| match reply {
            TradingReply::OrderTraded(report) if report.side == Some(Side::Buy) => {
                Some(report.trade_price)
            }
            _ => None,
        })
        .collect();
    // Each fill trades at the resting order's own price.
    assert_eq!(prices, vec![dec!(10.00), dec!(10.05)]);
    assert!(engine.book().side(BookSide::Bid).is_empty());
}

#[test]
fn validation_failure_is_rejected_with_the_specific_reason() {
    let (mut engine, replies) = engine();

    let mut request = limit("client", "bad", Side::Buy, dec!(10), dec!(10.005));
    request.order_price = Some(dec!(10.005));
    engine.place(request);
    let replies = replies.take();

    let TradingReply::OrderPlacementRejected(reject) = &replies[0] else {
        panic!("expected a placement reject");
    };
    assert_eq!(reject.order_status, OrderStatus::Rejected);
    assert!(reject.reject_text.contains("price tick"));
}
