//! Per-instrument matching engine.
//!
//! A single engine instance owns one instrument's book, statistics and
//! subscription registry. It is single-threaded by construction: the
//! trading system binds each instrument to one worker and every mutation
//! serialises through it, so the matching path holds no locks and performs
//! no I/O beyond handing replies to the outbound channel.

use arara_idgen::{ExecutionIdContext, GenerationError, OrderIdContext};
use arara_markets::{
    BookSide, ExecutionId, ExecutionType, Instrument, OrderStatus, OrderType, PhaseTransition,
    SecurityLookup, SessionId, Side, TimeInForce,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, error, info, info_span};

use crate::{
    book::{LimitOrder, OrderBook},
    clock::EngineClock,
    mdata::{MarketDataAggregator, Trade},
    protocol::{
        ExecutionReport, MarketDataRequest, OrderCancellationConfirmation,
        OrderCancellationRequest, OrderModificationConfirmation, OrderModificationRequest,
        OrderPlacementConfirmation, OrderPlacementRequest, ReplyChannel, SecurityStatus,
        SecurityStatusRequest, TradingRequest,
    },
    reject::RejectNotifier,
    validation::{OrderAttributes, PlacementValidator, ValidationError},
    venue::VenueConfig,
};

mod auction;

pub use auction::clearing_price;

/// Generate the next execution identifier of an order.
///
/// The per-order serial is persisted on the order itself so identifier
/// generation continues correctly across snapshot restores.
fn next_execution_id(order: &mut LimitOrder) -> Result<ExecutionId, GenerationError> {
    let mut context = ExecutionIdContext::resume(order.order_id, order.execution_count);
    let execution_id = context.generate()?;
    order.execution_count += 1;
    Ok(execution_id)
}

/// The matching engine of a single instrument.
#[derive(Debug)]
pub struct MatchingEngine<C, R> {
    instrument: Instrument,
    venue: VenueConfig,
    clock: C,
    replies: R,
    book: OrderBook,
    aggregator: MarketDataAggregator,
    order_ids: OrderIdContext,
    rejects: RejectNotifier,
    phase: PhaseTransition,
    last_trade_price: Option<Decimal>,
}

impl<C, R> MatchingEngine<C, R>
where
    C: EngineClock,
    R: ReplyChannel,
{
    pub fn new(instrument: Instrument, venue: VenueConfig, clock: C, replies: R) -> Self {
        let now = clock.time();
        let aggregator =
            MarketDataAggregator::new(SecurityLookup::by_symbol(instrument.symbol.clone()), now);
        Self {
            instrument,
            venue,
            clock,
            replies,
            book: OrderBook::new(),
            aggregator,
            order_ids: OrderIdContext::new_at(now),
            rejects: RejectNotifier::new_at(now),
            phase: PhaseTransition::default(),
            last_trade_price: None,
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn phase(&self) -> PhaseTransition {
        self.phase
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn aggregator(&self) -> &MarketDataAggregator {
        &self.aggregator
    }

    /// Initialise statistics from a reference-data price seed.
    pub fn apply_price_seed(&mut self, seed: &arara_refdata::PriceSeed) {
        self.aggregator.seed(seed);
    }

    /// Dispatch any routed trading request.
    pub fn handle(&mut self, request: TradingRequest) {
        let span = info_span!(
            "engine_request",
            instrument = %self.instrument.symbol,
            session = %request.session()
        );
        let _guard = span.enter();

        match request {
            TradingRequest::Place(request) => self.place(request),
            TradingRequest::Modify(request) => self.modify(request),
            TradingRequest::Cancel(request) => self.cancel(request),
            TradingRequest::MarketData(request) => self.market_data(request),
            TradingRequest::SecurityStatus(request) => self.security_status(request),
        }
    }

    /// Place a new order: validate, match, apply the time-in-force disposition.
    pub fn place(&mut self, request: OrderPlacementRequest) {
        let now = self.clock.time();

        if !self.phase.accepts_placements() {
            self.rejects.reject_placement(
                &self.replies,
                &request,
                "order placement is not allowed in the current trading phase",
                OrderStatus::Rejected,
                now,
            );
            return;
        }

        let attributes = OrderAttributes {
            side: request.side,
            order_type: request.order_type,
            order_price: request.order_price,
            order_quantity: request.order_quantity,
            time_in_force: request.time_in_force,
            expire_time: request.expire_time,
            expire_date: request.expire_date,
            short_sale_exempt_reason: request.short_sale_exempt_reason.as_deref(),
        };
        let validator = PlacementValidator::new(&self.instrument.config, &self.venue, now);
        if let Some(validation_error) = validator.validate(&attributes) {
            self.rejects.reject_placement(
                &self.replies,
                &request,
                &validation_error.to_string(),
                OrderStatus::Rejected,
                now,
            );
            return;
        }

        let (Some(side), Some(order_type), Some(total_quantity)) =
            (request.side, request.order_type, request.order_quantity)
        else {
            unreachable!("validated placement request must carry side, type and quantity");
        };

        let order_id = self.order_ids.generate_at(now);
        let mut order = LimitOrder {
            order_id,
            client_order_id: request.client_order_id.clone(),
            session: request.session.clone(),
            side,
            order_type,
            price: request.order_price,
            total_quantity,
            cum_executed_quantity: Decimal::ZERO,
            time_in_force: request.time_in_force.unwrap_or(TimeInForce::Day),
            expire_time: request.expire_time,
            expire_date: request.expire_date,
            short_sale_exempt_reason: request.short_sale_exempt_reason.clone(),
            parties: request.parties.clone(),
            status: OrderStatus::New,
            sequence: 0,
            execution_count: 0,
            created_at: now,
        };

        // Auction phases collect orders and defer matching to the uncross.
        if self.phase.phase.is_auction() {
            if order.order_type == OrderType::Market {
                self.rejects.reject_placement(
                    &self.replies,
                    &request,
                    "market orders are not accepted during an auction",
                    OrderStatus::Rejected,
                    now,
                );
                return;
            }
            // Immediate TIFs cannot wait for the uncross.
            if order.time_in_force.is_immediate() {
                self.rejects.reject_placement(
                    &self.replies,
                    &request,
                    "immediate orders are not accepted during an auction",
                    OrderStatus::Rejected,
                    now,
                );
                return;
            }
            if self.confirm_placement(&request, &mut order, OrderStatus::New, now) {
                self.rest(order);
                self.publish_market_data(now);
            }
            return;
        }

        // Fill-or-kill commits only when the full quantity is available, so
        // nothing ever has to roll back.
        if order.time_in_force == TimeInForce::FillOrKill {
            let available = self
                .book
                .side(order.side.opposite_book_side())
                .aggressable_quantity(order.price);
            if available < order.total_quantity {
                info!(order_id = %order.order_id, "fill-or-kill order failed the liquidity pre-check");
                self.rejects.reject_placement(
                    &self.replies,
                    &request,
                    "insufficient liquidity to fill the order in full",
                    OrderStatus::Cancelled,
                    now,
                );
                return;
            }
        }

        // A market order against an empty opposite book cannot be priced.
        if order.order_type == OrderType::Market
            && self.book.side(order.side.opposite_book_side()).is_empty()
        {
            if order.time_in_force.is_immediate() {
                self.confirm_placement(&request, &mut order, OrderStatus::Cancelled, now);
            } else {
                self.rejects.reject_placement(
                    &self.replies,
                    &request,
                    "no opposite liquidity to price a market order",
                    OrderStatus::Rejected,
                    now,
                );
            }
            return;
        }

        // The placement confirmation precedes any trade executions
        // generated by the same request.
        if !self.confirm_placement(&request, &mut order, OrderStatus::New, now) {
            return;
        }

        self.match_aggressor(&mut order, now);

        if !order.is_filled() {
            let cancel_remainder = order.time_in_force == TimeInForce::ImmediateOrCancel
                || order.order_type == OrderType::Market;
            if cancel_remainder {
                order.mark_cancelled();
                self.send_unsolicited_cancellation(&mut order, None, now);
            } else {
                self.rest(order);
            }
        }

        self.publish_market_data(now);
    }

    /// Cancel-replace: in place when priority is preserved, remove-and-replace
    /// (with rematching) when it is not.
    pub fn modify(&mut self, request: OrderModificationRequest) {
        let now = self.clock.time();

        if !self.phase.accepts_placements() {
            self.rejects.reject_modification_unknown_order(
                &self.replies,
                &request,
                "order modification is not allowed in the current trading phase",
            );
            return;
        }

        let Some((book_side, order_id)) = self.book.locate(
            request.venue_order_id,
            request.orig_client_order_id.as_ref(),
            &request.session,
        ) else {
            self.rejects.reject_modification_unknown_order(
                &self.replies,
                &request,
                "unknown order",
            );
            return;
        };

        let attributes = OrderAttributes {
            side: request.side,
            order_type: request.order_type,
            order_price: request.order_price,
            order_quantity: request.order_quantity,
            time_in_force: request.time_in_force,
            expire_time: request.expire_time,
            expire_date: request.expire_date,
            short_sale_exempt_reason: request.short_sale_exempt_reason.as_deref(),
        };
        let validator = PlacementValidator::new(&self.instrument.config, &self.venue, now);
        if let Some(validation_error) = validator.validate(&attributes) {
            self.rejects.reject_modification(
                &self.replies,
                &request,
                &validation_error.to_string(),
            );
            return;
        }

        let (Some(new_side), Some(new_quantity)) = (request.side, request.order_quantity) else {
            unreachable!("validated modification request must carry side and quantity");
        };

        let (priority_preserved, cum_executed) = {
            let Some(order) = self.book.side(book_side).get(order_id) else {
                unreachable!("located order must be present in the book");
            };
            let preserved = new_side == order.side
                && request.order_price == order.price
                && new_quantity <= order.total_quantity;
            (preserved, order.cum_executed_quantity)
        };

        if new_quantity <= cum_executed {
            self.rejects.reject_modification(
                &self.replies,
                &request,
                &ValidationError::CumExecutedQuantityOverflow.to_string(),
            );
            return;
        }

        if priority_preserved {
            let confirmation = {
                let Some(order) = self.book.side_mut(book_side).get_mut(order_id) else {
                    unreachable!("located order must be present in the book");
                };
                order.total_quantity = new_quantity;
                order.time_in_force = request.time_in_force.unwrap_or(order.time_in_force);
                order.expire_time = request.expire_time;
                order.expire_date = request.expire_date;
                if !request.parties.is_empty() {
                    order.parties = request.parties.clone();
                }
                order.client_order_id = request
                    .client_order_id
                    .clone()
                    .or(order.client_order_id.take());
                order.mark_modified();

                let Ok(execution_id) = next_execution_id(order) else {
                    error!(order_id = %order.order_id, "execution id generation failed");
                    return;
                };
                OrderModificationConfirmation {
                    session: order.session.clone(),
                    instrument: request.instrument.clone(),
                    venue_order_id: order.order_id,
                    execution_id,
                    client_order_id: order.client_order_id.clone(),
                    orig_client_order_id: request.orig_client_order_id.clone(),
                    parties: order.parties.clone(),
                    side: Some(order.side),
                    order_price: order.price,
                    order_quantity: Some(order.total_quantity),
                    cum_executed_quantity: order.cum_executed_quantity,
                    leaves_quantity: order.remaining_quantity(),
                    time_in_force: Some(order.time_in_force),
                    order_status: OrderStatus::Modified,
                    execution_type: ExecutionType::OrderModified,
                }
            };
            debug!(order_id = %order_id, "order modified in place");
            self.replies.send_reply(confirmation.into());
            self.publish_market_data(now);
            return;
        }

        // Priority-changing modification: the order loses its place in the
        // queue and a new venue order id, then goes through matching again.
        let Some(previous) = self.book.side_mut(book_side).remove(order_id) else {
            unreachable!("located order must be present in the book");
        };

        let new_order_id = self.order_ids.generate_at(now);
        let mut order = LimitOrder {
            order_id: new_order_id,
            client_order_id: request.client_order_id.clone(),
            session: previous.session.clone(),
            side: new_side,
            order_type: request.order_type.unwrap_or(previous.order_type),
            price: request.order_price,
            total_quantity: new_quantity,
            cum_executed_quantity: previous.cum_executed_quantity,
            time_in_force: request.time_in_force.unwrap_or(previous.time_in_force),
            expire_time: request.expire_time,
            expire_date: request.expire_date,
            short_sale_exempt_reason: request
                .short_sale_exempt_reason
                .clone()
                .or(previous.short_sale_exempt_reason.clone()),
            parties: if request.parties.is_empty() {
                previous.parties.clone()
            } else {
                request.parties.clone()
            },
            status: OrderStatus::Modified,
            sequence: 0,
            execution_count: previous.execution_count,
            created_at: previous.created_at,
        };

        let Ok(execution_id) = next_execution_id(&mut order) else {
            error!(order_id = %order.order_id, "execution id generation failed");
            self.book.side_mut(book_side).insert(previous);
            return;
        };
        let confirmation = OrderModificationConfirmation {
            session: order.session.clone(),
            instrument: request.instrument.clone(),
            venue_order_id: order.order_id,
            execution_id,
            client_order_id: order.client_order_id.clone(),
            orig_client_order_id: previous.client_order_id.clone(),
            parties: order.parties.clone(),
            side: Some(order.side),
            order_price: order.price,
            order_quantity: Some(order.total_quantity),
            cum_executed_quantity: order.cum_executed_quantity,
            leaves_quantity: order.remaining_quantity(),
            time_in_force: Some(order.time_in_force),
            order_status: OrderStatus::Modified,
            execution_type: ExecutionType::OrderModified,
        };
        info!(
            previous_order_id = %previous.order_id,
            order_id = %order.order_id,
            "order modification changed priority"
        );
        self.replies.send_reply(confirmation.into());

        self.match_aggressor(&mut order, now);

        if !order.is_filled() {
            if order.time_in_force == TimeInForce::ImmediateOrCancel {
                order.mark_cancelled();
                self.send_unsolicited_cancellation(&mut order, None, now);
            } else {
                self.rest(order);
            }
        }

        self.publish_market_data(now);
    }

    /// Cancel a resting order.
    pub fn cancel(&mut self, request: OrderCancellationRequest) {
        let now = self.clock.time();

        if !self.phase.accepts_cancellations() {
            self.rejects.reject_cancellation(
                &self.replies,
                &request,
                "order cancellation is not allowed in the current trading phase",
            );
            return;
        }

        let Some((book_side, order_id)) = self.book.locate(
            request.venue_order_id,
            request.orig_client_order_id.as_ref(),
            &request.session,
        ) else {
            self.rejects
                .reject_cancellation(&self.replies, &request, "unknown order");
            return;
        };

        let Some(mut order) = self.book.side_mut(book_side).remove(order_id) else {
            unreachable!("located order must be present in the book");
        };
        order.mark_cancelled();

        let Ok(execution_id) = next_execution_id(&mut order) else {
            error!(order_id = %order.order_id, "execution id generation failed");
            return;
        };
        let confirmation = OrderCancellationConfirmation {
            session: order.session.clone(),
            instrument: request.instrument.clone(),
            venue_order_id: order.order_id,
            execution_id,
            client_order_id: request.client_order_id.clone().or(order.client_order_id.clone()),
            orig_client_order_id: request.orig_client_order_id.clone(),
            parties: order.parties.clone(),
            side: Some(order.side),
            order_price: order.price,
            order_quantity: Some(order.total_quantity),
            cum_executed_quantity: order.cum_executed_quantity,
            leaves_quantity: Decimal::ZERO,
            order_status: OrderStatus::Cancelled,
            execution_type: ExecutionType::OrderCancelled,
            text: None,
        };
        debug!(order_id = %order.order_id, "order cancelled");
        self.replies.send_reply(confirmation.into());
        self.publish_market_data(now);
    }

    /// Market data request: delegate to the aggregator.
    pub fn market_data(&mut self, request: MarketDataRequest) {
        let now = self.clock.time();
        self.aggregator.handle_request(&self.replies, &request, now);
    }

    /// Answer a security-status request.
    pub fn security_status(&mut self, request: SecurityStatusRequest) {
        let reply = SecurityStatus {
            session: request.session.clone(),
            request_id: request.request_id.clone(),
            instrument: SecurityLookup::by_symbol(self.instrument.symbol.clone()),
            trading_phase: self.phase.phase,
            trading_status: self.phase.status,
        };
        self.replies.send_reply(reply.into());
    }

    /// Periodic tick: cancel expired Day/GTD orders. Expiry is best-effort; an
    /// order expires no later than the first tick after its deadline.
    pub fn tick(&mut self) {
        let now = self.clock.time();
        let mut expired = Vec::new();
        for book_side in [BookSide::Bid, BookSide::Offer] {
            expired.extend(
                self.book
                    .side_mut(book_side)
                    .drain_expired(now, &self.venue.timezone),
            );
        }
        if expired.is_empty() {
            return;
        }

        for mut order in expired {
            info!(order_id = %order.order_id, "order expired");
            order.mark_cancelled();
            self.send_unsolicited_cancellation(&mut order, Some("order expired".to_owned()), now);
        }
        self.publish_market_data(now);
    }

    /// Apply a trading-phase transition. Leaving an auction phase triggers the uncross.
    pub fn handle_phase(&mut self, transition: PhaseTransition) {
        let previous = self.phase;
        self.phase = transition;
        self.aggregator.set_phase(transition.phase);
        info!(
            phase = %transition.phase,
            status = %transition.status,
            "trading phase changed"
        );

        let now = self.clock.time();
        if previous.phase.is_auction() && !transition.phase.is_auction() {
            self.uncross(now);
        }
        self.publish_market_data(now);
    }

    /// A client session disconnected: drop its subscriptions and, when the
    /// venue runs cancel-on-disconnect, cancel all of its open orders.
    pub fn session_terminated(&mut self, session: &SessionId, cancel_orders: bool) {
        let now = self.clock.time();
        self.aggregator.drop_session(session);

        if !cancel_orders {
            return;
        }

        let mut removed = Vec::new();
        for book_side in [BookSide::Bid, BookSide::Offer] {
            removed.extend(self.book.side_mut(book_side).remove_session_orders(session));
        }
        if removed.is_empty() {
            return;
        }

        info!(%session, orders = removed.len(), "cancelling orders of a disconnected session");
        for mut order in removed {
            order.mark_cancelled();
            self.send_unsolicited_cancellation(
                &mut order,
                Some("session disconnected".to_owned()),
                now,
            );
        }
        self.publish_market_data(now);
    }

    fn rest(&mut self, mut order: LimitOrder) {
        order.sequence = self.book.next_sequence();
        self.book.side_mut(order.side.book_side()).insert(order);
    }

    /// Emit the placement confirmation. Returns false when identifier
    /// generation failed (the request was rejected instead).
    fn confirm_placement(
        &mut self,
        request: &OrderPlacementRequest,
        order: &mut LimitOrder,
        order_status: OrderStatus,
        now: DateTime<Utc>,
    ) -> bool {
        let Ok(execution_id) = next_execution_id(order) else {
            error!(order_id = %order.order_id, "execution id generation failed");
            self.rejects.reject_placement(
                &self.replies,
                request,
                "internal identifier generation failure",
                OrderStatus::Rejected,
                now,
            );
            return false;
        };

        let execution_type = if order_status == OrderStatus::Cancelled {
            ExecutionType::OrderCancelled
        } else {
            ExecutionType::OrderPlaced
        };
        let leaves_quantity = if order_status == OrderStatus::Cancelled {
            Decimal::ZERO
        } else {
            order.remaining_quantity()
        };
        let confirmation = OrderPlacementConfirmation {
            session: order.session.clone(),
            instrument: request.instrument.clone(),
            venue_order_id: order.order_id,
            execution_id,
            client_order_id: order.client_order_id.clone(),
            parties: order.parties.clone(),
            side: Some(order.side),
            order_type: Some(order.order_type),
            order_price: order.price,
            order_quantity: Some(order.total_quantity),
            leaves_quantity: Some(leaves_quantity),
            time_in_force: Some(order.time_in_force),
            expire_time: order.expire_time,
            expire_date: order.expire_date,
            order_status,
            execution_type,
        };
        self.replies.send_reply(confirmation.into());
        true
    }

    /// Continuous matching: walk the opposite side in priority order and
    /// trade at each resting order's price while it is aggressable.
    fn match_aggressor(&mut self, aggressor: &mut LimitOrder, now: DateTime<Utc>) {
        let opposite = aggressor.side.opposite_book_side();
        let instrument_echo = SecurityLookup::by_symbol(self.instrument.symbol.clone());

        loop {
            if aggressor.is_filled() {
                break;
            }

            let fill = {
                let Some(maker) = self.book.side_mut(opposite).best_mut() else {
                    break;
                };
                let Some(maker_price) = maker.price else {
                    unreachable!("resting orders are always priced");
                };
                let aggressable = match aggressor.price {
                    None => true,
                    Some(limit) => match opposite {
                        BookSide::Offer => maker_price <= limit,
                        BookSide::Bid => maker_price >= limit,
                    },
                };
                if !aggressable {
                    break;
                }

                let quantity = aggressor.remaining_quantity().min(maker.remaining_quantity());
                let (Ok(maker_execution_id), Ok(aggressor_execution_id)) =
                    (next_execution_id(maker), next_execution_id(aggressor))
                else {
                    error!("execution id generation failed, aborting the match");
                    break;
                };

                maker.execute(quantity);
                aggressor.execute(quantity);
                (maker.clone(), maker_execution_id, aggressor_execution_id, maker_price, quantity)
            };
            let (maker, maker_execution_id, aggressor_execution_id, trade_price, quantity) = fill;

            if maker.is_filled() {
                self.book.side_mut(opposite).pop_best();
            }

            let (buyer_order_id, seller_order_id) = match aggressor.side.book_side() {
                BookSide::Bid => (aggressor.order_id, maker.order_id),
                BookSide::Offer => (maker.order_id, aggressor.order_id),
            };
            debug!(
                %buyer_order_id,
                %seller_order_id,
                price = %trade_price,
                quantity = %quantity,
                "trade"
            );

            self.replies.send_reply(
                trade_report(
                    &maker,
                    maker_execution_id,
                    instrument_echo.clone(),
                    trade_price,
                    quantity,
                    Some(aggressor.side),
                    now,
                )
                .into(),
            );
            self.replies.send_reply(
                trade_report(
                    aggressor,
                    aggressor_execution_id,
                    instrument_echo.clone(),
                    trade_price,
                    quantity,
                    Some(aggressor.side),
                    now,
                )
                .into(),
            );

            let trade = Trade {
                price: trade_price,
                quantity,
                buyer_order_id,
                seller_order_id,
                aggressor_side: Some(aggressor.side),
                executed_at: now,
            };
            self.last_trade_price = Some(trade_price);
            self.aggregator.on_trade(&trade);
        }
    }

    /// Auction uncross: drain the crossed region of the book into trades at the
    /// single clearing price maximising executed volume.
    fn uncross(&mut self, now: DateTime<Utc>) {
        let Some((price, volume)) = clearing_price(&self.book, self.last_trade_price) else {
            return;
        };
        info!(price = %price, volume = %volume, "uncrossing auction");
        let instrument_echo = SecurityLookup::by_symbol(self.instrument.symbol.clone());

        let mut remaining_volume = volume;
        while remaining_volume > Decimal::ZERO {
            let bid_aggressable = self
                .book
                .side(BookSide::Bid)
                .best_price()
                .map(|best| best >= price)
                .unwrap_or(false);
            let offer_aggressable = self
                .book
                .side(BookSide::Offer)
                .best_price()
                .map(|best| best <= price)
                .unwrap_or(false);
            if !bid_aggressable || !offer_aggressable {
                break;
            }

            let Some(mut buy) = self.book.side_mut(BookSide::Bid).pop_best() else {
                break;
            };
            let Some(mut sell) = self.book.side_mut(BookSide::Offer).pop_best() else {
                self.book.side_mut(BookSide::Bid).insert(buy);
                break;
            };

            let quantity = buy
                .remaining_quantity()
                .min(sell.remaining_quantity())
                .min(remaining_volume);
            let (Ok(buy_execution_id), Ok(sell_execution_id)) =
                (next_execution_id(&mut buy), next_execution_id(&mut sell))
            else {
                error!("execution id generation failed, aborting the uncross");
                self.book.side_mut(BookSide::Bid).insert(buy);
                self.book.side_mut(BookSide::Offer).insert(sell);
                break;
            };
            buy.execute(quantity);
            sell.execute(quantity);
            remaining_volume -= quantity;

            self.replies.send_reply(
                trade_report(
                    &buy,
                    buy_execution_id,
                    instrument_echo.clone(),
                    price,
                    quantity,
                    None,
                    now,
                )
                .into(),
            );
            self.replies.send_reply(
                trade_report(
                    &sell,
                    sell_execution_id,
                    instrument_echo.clone(),
                    price,
                    quantity,
                    None,
                    now,
                )
                .into(),
            );

            let trade = Trade {
                price,
                quantity,
                buyer_order_id: buy.order_id,
                seller_order_id: sell.order_id,
                aggressor_side: None,
                executed_at: now,
            };
            self.last_trade_price = Some(price);
            self.aggregator.on_trade(&trade);

            if !buy.is_filled() {
                self.book.side_mut(BookSide::Bid).insert(buy);
            }
            if !sell.is_filled() {
                self.book.side_mut(BookSide::Offer).insert(sell);
            }
        }
    }

    /// Cancellation initiated by the venue itself (IOC remainder, expiry,
    /// disconnect).
    fn send_unsolicited_cancellation(
        &mut self,
        order: &mut LimitOrder,
        text: Option<String>,
        _now: DateTime<Utc>,
    ) {
        let Ok(execution_id) = next_execution_id(order) else {
            error!(order_id = %order.order_id, "execution id generation failed");
            return;
        };
        let confirmation = OrderCancellationConfirmation {
            session: order.session.clone(),
            instrument: SecurityLookup::by_symbol(self.instrument.symbol.clone()),
            venue_order_id: order.order_id,
            execution_id,
            client_order_id: order.client_order_id.clone(),
            orig_client_order_id: None,
            parties: order.parties.clone(),
            side: Some(order.side),
            order_price: order.price,
            order_quantity: Some(order.total_quantity),
            cum_executed_quantity: order.cum_executed_quantity,
            leaves_quantity: Decimal::ZERO,
            order_status: OrderStatus::Cancelled,
            execution_type: ExecutionType::OrderCancelled,
            text,
        };
        self.replies.send_reply(confirmation.into());
    }

    /// Capture the instrument's persisted state.
    pub fn snapshot_state(&self) -> crate::market_state::InstrumentState {
        let [bid, offer, low, mid, high] = self.aggregator.stats_cells();
        crate::market_state::InstrumentState {
            instrument_id: self.instrument.id,
            symbol: self.instrument.symbol.clone(),
            bid_orders: self.book.side(BookSide::Bid).orders().cloned().collect(),
            offer_orders: self.book.side(BookSide::Offer).orders().cloned().collect(),
            stats: crate::market_state::StatsState {
                bid: bid.clone(),
                offer: offer.clone(),
                low: low.clone(),
                mid: mid.clone(),
                high: high.clone(),
            },
            subscriptions: self.aggregator.subscriptions().cloned().collect(),
        }
    }

    /// Restore persisted state, re-validating every order and dropping the
    /// ones that no longer pass the resting checkers.
    pub fn restore_state(&mut self, state: crate::market_state::InstrumentState) {
        let now = self.clock.time();
        let mut highest_sequence = 0;

        for (book_side, orders) in [
            (BookSide::Bid, state.bid_orders),
            (BookSide::Offer, state.offer_orders),
        ] {
            for order in orders {
                let attributes = crate::validation::RestingOrderAttributes {
                    side: order.side,
                    book_side,
                    status: order.status,
                    time_in_force: order.time_in_force,
                    total_quantity: order.total_quantity,
                    cum_executed_quantity: order.cum_executed_quantity,
                    created_date: order
                        .created_at
                        .with_timezone(&self.venue.timezone)
                        .date_naive(),
                };
                let validator = crate::validation::RestingOrderValidator::new(
                    &self.instrument.config,
                    &self.venue,
                    now,
                );
                if let Some(validation_error) = validator.validate(&attributes) {
                    tracing::warn!(
                        order_id = %order.order_id,
                        error = %validation_error,
                        "dropping restored order that failed validation"
                    );
                    continue;
                }

                highest_sequence = highest_sequence.max(order.sequence);
                self.book.side_mut(book_side).insert(order);
            }
        }
        self.book.bump_sequence_past(highest_sequence);

        self.aggregator.restore_stats(
            state.stats.bid,
            state.stats.offer,
            state.stats.low,
            state.stats.mid,
            state.stats.high,
        );
        for subscription in state.subscriptions {
            self.aggregator.restore_subscription(subscription);
        }
    }

    /// Push top-of-book state into the aggregator and flush one coalesced
    /// update per subscriber.
    fn publish_market_data(&mut self, now: DateTime<Utc>) {
        let bid_top = self.book.side(BookSide::Bid).top_of_book();
        let offer_top = self.book.side(BookSide::Offer).top_of_book();
        self.aggregator.on_book(bid_top, offer_top);
        self.aggregator.publish(&self.replies, now);
    }
}

fn trade_report(
    order: &LimitOrder,
    execution_id: ExecutionId,
    instrument: SecurityLookup,
    trade_price: Decimal,
    traded_quantity: Decimal,
    aggressor_side: Option<Side>,
    now: DateTime<Utc>,
) -> ExecutionReport {
    ExecutionReport {
        session: order.session.clone(),
        instrument,
        venue_order_id: order.order_id,
        execution_id,
        client_order_id: order.client_order_id.clone(),
        parties: order.parties.clone(),
        side: Some(order.side),
        order_price: order.price,
        order_quantity: Some(order.total_quantity),
        trade_price,
        traded_quantity,
        cum_executed_quantity: order.cum_executed_quantity,
        leaves_quantity: order.remaining_quantity(),
        aggressor_side,
        order_status: order.status,
        execution_type: ExecutionType::OrderTraded,
        transact_time: now,
    }
}
