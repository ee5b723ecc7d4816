use arara_idgen::MarketEntryIdContext;
use arara_markets::{
    MdEntryAction, MdEntryType, MdRejectReason, MdRequestId, MdSubscriptionAction, MdUpdateType,
    SecurityLookup, SessionId, TradingPhase,
};
use arara_refdata::PriceSeed;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::VecDeque;
use tracing::debug;

use super::{cells::MarketEntryCell, Subscription, Trade};
use crate::protocol::{
    MarketDataEntry, MarketDataReject, MarketDataRequest, MarketDataSnapshot, MarketDataUpdate,
    ReplyChannel,
};

/// How many recent trades a snapshot replays.
const TRADE_TAPE_DEPTH: usize = 8;

/// Span wrapping update publication; the logging layers suppress events
/// inside it because it fires on every book mutation.
pub const MARKET_DATA_PUBLISH_SPAN_NAME: &str = "market_data_publish";

/// Per-instrument market-data aggregator.
///
/// Consumes the deltas every state-changing engine event produces and
/// translates them into subscriber-facing messages: trades are ephemeral
/// entries with fresh identifiers, top-of-book levels and the aggregated
/// low/mid/high statistics are persistent entries with stable identifiers.
///
/// All deltas recorded between two [`MarketDataAggregator::publish`] calls
/// coalesce into one outbound update per subscriber.
#[derive(Debug)]
pub struct MarketDataAggregator {
    instrument: SecurityLookup,
    subscriptions: IndexMap<(SessionId, MdRequestId), Subscription>,
    ids: MarketEntryIdContext,
    bid: MarketEntryCell,
    offer: MarketEntryCell,
    low: MarketEntryCell,
    mid: MarketEntryCell,
    high: MarketEntryCell,
    pending_trades: Vec<MarketDataEntry>,
    tape: VecDeque<MarketDataEntry>,
    phase: TradingPhase,
}

impl MarketDataAggregator {
    pub fn new(instrument: SecurityLookup, now: DateTime<Utc>) -> Self {
        Self {
            instrument,
            subscriptions: IndexMap::new(),
            ids: MarketEntryIdContext::new_at(now),
            bid: MarketEntryCell::level(MdEntryType::Bid),
            offer: MarketEntryCell::level(MdEntryType::Offer),
            low: MarketEntryCell::statistic(MdEntryType::LowPrice),
            mid: MarketEntryCell::statistic(MdEntryType::MidPrice),
            high: MarketEntryCell::statistic(MdEntryType::HighPrice),
            pending_trades: Vec::new(),
            tape: VecDeque::with_capacity(TRADE_TAPE_DEPTH),
            phase: TradingPhase::Open,
        }
    }

    pub fn set_phase(&mut self, phase: TradingPhase) {
        self.phase = phase;
    }

    pub fn subscriptions(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.values()
    }

    pub fn restore_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.insert(
            (subscription.session.clone(), subscription.request_id.clone()),
            subscription,
        );
    }

    /// Initialise the statistics cells from a price seed, so the venue
    /// publishes sane prices before its first trade.
    pub fn seed(&mut self, seed: &PriceSeed) {
        if let Some(price) = seed.bid_price {
            self.bid.update(price, None);
        }
        if let Some(price) = seed.offer_price {
            self.offer.update(price, None);
        }
        if let Some(price) = seed.mid_price {
            self.mid.update(price, None);
        }
        if let Some(price) = seed.last_price {
            self.low.update(price, None);
            self.high.update(price, None);
        }
    }

    /// Record a trade delta.
    pub fn on_trade(&mut self, trade: &Trade) {
        let entry = MarketDataEntry {
            entry_id: Some(self.ids.generate_at(trade.executed_at)),
            entry_type: MdEntryType::Trade,
            action: Some(MdEntryAction::New),
            price: Some(trade.price),
            quantity: Some(trade.quantity),
            buyer_id: Some(trade.buyer_order_id),
            seller_id: Some(trade.seller_order_id),
            aggressor_side: trade.aggressor_side,
            time: Some(trade.executed_at),
            phase: Some(self.phase),
        };

        if self.tape.len() == TRADE_TAPE_DEPTH {
            self.tape.pop_front();
        }
        let mut tape_entry = entry.clone();
        tape_entry.action = None;
        self.tape.push_back(tape_entry);
        self.pending_trades.push(entry);

        // Session low/high ratchet on every trade; the mid follows the
        // traded price until both book tops are available again.
        match self.low.price() {
            Some(low) if low <= trade.price => {}
            _ => {
                self.low.update(trade.price, None);
            }
        }
        match self.high.price() {
            Some(high) if high >= trade.price => {}
            _ => {
                self.high.update(trade.price, None);
            }
        }
        self.mid.update(trade.price, None);
    }

    /// Record a top-of-book delta for both sides.
    pub fn on_book(
        &mut self,
        bid_top: Option<(rust_decimal::Decimal, rust_decimal::Decimal)>,
        offer_top: Option<(rust_decimal::Decimal, rust_decimal::Decimal)>,
    ) {
        match bid_top {
            Some((price, quantity)) => {
                self.bid.update(price, Some(quantity));
            }
            None => self.bid.mark_deleted(),
        }
        match offer_top {
            Some((price, quantity)) => {
                self.offer.update(price, Some(quantity));
            }
            None => self.offer.mark_deleted(),
        }

        // The mid derives from the book only while both tops exist; with a
        // one-sided book it keeps tracking the last traded price.
        if let (Some((bid, _)), Some((offer, _))) = (bid_top, offer_top) {
            self.mid.update((bid + offer) / rust_decimal::Decimal::TWO, None);
        }
    }

    /// Handle a market-data request already routed to this instrument.
    pub fn handle_request<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &MarketDataRequest,
        now: DateTime<Utc>,
    ) {
        let Some(request_id) = request.request_id.clone() else {
            channel.send_reply(
                MarketDataReject {
                    session: request.session.clone(),
                    request_id: None,
                    reject_reason: None,
                    reject_text: Some("market data request id is missing".into()),
                }
                .into(),
            );
            return;
        };

        match request.action {
            Some(MdSubscriptionAction::Snapshot) => {
                channel.send_reply(
                    self.snapshot_message(
                        &request.session,
                        Some(&request_id),
                        &request.entry_types,
                        now,
                    )
                    .into(),
                );
            }
            Some(MdSubscriptionAction::Subscribe) => {
                let key = (request.session.clone(), request_id.clone());
                if self.subscriptions.contains_key(&key) {
                    channel.send_reply(
                        MarketDataReject {
                            session: request.session.clone(),
                            request_id: Some(request_id),
                            reject_reason: Some(MdRejectReason::DuplicateMdReqId),
                            reject_text: Some(
                                "market data request id is already in use".into(),
                            ),
                        }
                        .into(),
                    );
                    return;
                }

                let subscription = Subscription {
                    session: request.session.clone(),
                    request_id: request_id.clone(),
                    entry_types: request.entry_types.clone(),
                    market_depth: request.market_depth.unwrap_or(1),
                    update_type: request.update_type.unwrap_or(MdUpdateType::Incremental),
                };
                debug!(
                    session = %subscription.session,
                    request_id = %subscription.request_id,
                    "registered market data subscription"
                );

                channel.send_reply(
                    self.snapshot_message(
                        &request.session,
                        Some(&request_id),
                        &subscription.entry_types,
                        now,
                    )
                    .into(),
                );
                self.subscriptions.insert(key, subscription);
            }
            Some(MdSubscriptionAction::Unsubscribe) => {
                let key = (request.session.clone(), request_id);
                if self.subscriptions.shift_remove(&key).is_some() {
                    debug!(
                        session = %key.0,
                        request_id = %key.1,
                        "dropped market data subscription"
                    );
                }
                // No terminal message on unsubscribe.
            }
            None => {
                channel.send_reply(
                    MarketDataReject {
                        session: request.session.clone(),
                        request_id: Some(request_id),
                        reject_reason: None,
                        reject_text: Some("subscription request type is missing".into()),
                    }
                    .into(),
                );
            }
        }
    }

    /// Drop every subscription owned by a disconnected session.
    pub fn drop_session(&mut self, session: &SessionId) {
        self.subscriptions
            .retain(|(owner, _), _| owner != session);
    }

    /// Publish every delta recorded since the last call as one coalesced
    /// update per subscriber.
    pub fn publish<R: ReplyChannel>(&mut self, channel: &R, now: DateTime<Utc>) {
        let span = tracing::debug_span!("market_data_publish");
        let _guard = span.enter();

        let mut deltas: Vec<MarketDataEntry> = std::mem::take(&mut self.pending_trades);
        let phase = self.phase;
        for cell in [
            &mut self.bid,
            &mut self.offer,
            &mut self.low,
            &mut self.mid,
            &mut self.high,
        ] {
            if let Some(entry) = cell.take_delta(&mut self.ids, now, phase) {
                deltas.push(entry);
            }
        }

        if deltas.is_empty() {
            return;
        }

        // Trades were recorded first, then tops, then statistics; the
        // iteration above preserves that order.
        let mut snapshots = Vec::new();
        for subscription in self.subscriptions.values() {
            match subscription.update_type {
                MdUpdateType::Incremental => {
                    let entries: Vec<MarketDataEntry> = deltas
                        .iter()
                        .filter(|entry| subscription.wants(entry.entry_type))
                        .cloned()
                        .collect();
                    if entries.is_empty() {
                        continue;
                    }
                    channel.send_reply(
                        MarketDataUpdate {
                            session: subscription.session.clone(),
                            request_id: Some(subscription.request_id.clone()),
                            instrument: self.instrument.clone(),
                            entries,
                        }
                        .into(),
                    );
                }
                MdUpdateType::Snapshot => {
                    let relevant = deltas
                        .iter()
                        .any(|entry| subscription.wants(entry.entry_type));
                    if relevant {
                        snapshots.push((
                            subscription.session.clone(),
                            subscription.request_id.clone(),
                            subscription.entry_types.clone(),
                        ));
                    }
                }
            }
        }

        for (session, request_id, entry_types) in snapshots {
            let message = self.snapshot_message(&session, Some(&request_id), &entry_types, now);
            channel.send_reply(message.into());
        }
    }

    /// Assemble a full snapshot message for one receiver.
    pub fn snapshot_message(
        &self,
        session: &SessionId,
        request_id: Option<&MdRequestId>,
        entry_types: &[MdEntryType],
        now: DateTime<Utc>,
    ) -> MarketDataSnapshot {
        let wants = |entry_type: MdEntryType| {
            entry_types.is_empty() || entry_types.contains(&entry_type)
        };

        let mut entries = Vec::new();
        if wants(MdEntryType::Trade) {
            entries.extend(self.tape.iter().cloned());
        }
        for cell in [&self.bid, &self.offer, &self.low, &self.mid, &self.high] {
            if wants(cell.entry_type()) {
                if let Some(entry) = cell.snapshot_entry(now, self.phase) {
                    entries.push(entry);
                }
            }
        }

        MarketDataSnapshot {
            session: session.clone(),
            request_id: request_id.cloned(),
            instrument: self.instrument.clone(),
            entries,
        }
    }

    /// Current statistics cells, exposed for persisted snapshots.
    pub fn stats_cells(&self) -> [&MarketEntryCell; 5] {
        [&self.bid, &self.offer, &self.low, &self.mid, &self.high]
    }

    pub fn restore_stats(
        &mut self,
        bid: MarketEntryCell,
        offer: MarketEntryCell,
        low: MarketEntryCell,
        mid: MarketEntryCell,
        high: MarketEntryCell,
    ) {
        self.bid = bid;
        self.offer = offer;
        self.low = low;
        self.mid = mid;
        self.high = high;
    }
}
