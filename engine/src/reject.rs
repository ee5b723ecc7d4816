//! Uniform construction of outbound reject messages.
//!
//! Every reject path funnels through this component so rejects carry the
//! same correlating fields everywhere: the request's session, instrument,
//! parties and client order id are copied back, and placement rejects get a
//! freshly generated venue order id and execution id of their own.

use arara_idgen::{ExecutionIdContext, OrderIdContext};
use arara_markets::{
    BusinessRejectReason, ExecutionId, ExecutionType, MdRejectReason, OrderId, OrderStatus,
    RejectedMessageType,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::protocol::{
    BusinessMessageReject, CancelRejectResponseTo, MarketDataReject, MarketDataRequest,
    OrderCancellationReject, OrderCancellationRequest, OrderModificationReject,
    OrderModificationRequest, OrderPlacementReject, OrderPlacementRequest, ReplyChannel,
    SecurityStatusRequest,
};

/// Builds and dispatches reject replies.
#[derive(Debug)]
pub struct RejectNotifier {
    order_ids: OrderIdContext,
}

impl RejectNotifier {
    pub fn new() -> Self {
        Self {
            order_ids: OrderIdContext::new(),
        }
    }

    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            order_ids: OrderIdContext::new_at(now),
        }
    }

    fn generate_identifiers(&mut self, now: DateTime<Utc>) -> (OrderId, ExecutionId) {
        let order_id = self.order_ids.generate_at(now);
        let execution_id = ExecutionIdContext::new(order_id)
            .generate()
            .expect("a fresh execution id context cannot be exhausted");
        (order_id, execution_id)
    }

    pub fn reject_placement<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &OrderPlacementRequest,
        reason: &str,
        order_status: OrderStatus,
        now: DateTime<Utc>,
    ) {
        let (venue_order_id, execution_id) = self.generate_identifiers(now);
        let reject = OrderPlacementReject {
            session: request.session.clone(),
            instrument: request.instrument.clone(),
            venue_order_id,
            execution_id,
            client_order_id: request.client_order_id.clone(),
            parties: request.parties.clone(),
            side: request.side,
            order_price: request.order_price,
            order_quantity: request.order_quantity,
            time_in_force: request.time_in_force,
            expire_time: request.expire_time,
            expire_date: request.expire_date,
            order_status,
            execution_type: ExecutionType::Rejected,
            reject_text: reason.to_owned(),
        };

        debug!(session = %reject.session, reason, "rejecting order placement");
        channel.send_reply(reject.into());
    }

    pub fn reject_modification<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &OrderModificationRequest,
        reason: &str,
    ) {
        let reject = OrderModificationReject {
            session: request.session.clone(),
            client_order_id: request.client_order_id.clone(),
            orig_client_order_id: request.orig_client_order_id.clone(),
            venue_order_id: request.venue_order_id,
            order_status: OrderStatus::Rejected,
            reject_text: reason.to_owned(),
        };

        debug!(session = %reject.session, reason, "rejecting order modification");
        channel.send_reply(reject.into());
    }

    /// A modification that could not locate its order answers as an
    /// order-cancel reject referring to the cancel-replace request.
    pub fn reject_modification_unknown_order<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &OrderModificationRequest,
        reason: &str,
    ) {
        let reject = OrderCancellationReject {
            session: request.session.clone(),
            client_order_id: request.client_order_id.clone(),
            orig_client_order_id: request.orig_client_order_id.clone(),
            venue_order_id: request.venue_order_id,
            order_status: OrderStatus::Rejected,
            response_to: CancelRejectResponseTo::CancelReplace,
            reject_text: reason.to_owned(),
        };

        debug!(session = %reject.session, reason, "rejecting order modification");
        channel.send_reply(reject.into());
    }

    pub fn reject_cancellation<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &OrderCancellationRequest,
        reason: &str,
    ) {
        let reject = OrderCancellationReject {
            session: request.session.clone(),
            client_order_id: request.client_order_id.clone(),
            orig_client_order_id: request.orig_client_order_id.clone(),
            venue_order_id: request.venue_order_id,
            order_status: OrderStatus::Rejected,
            response_to: CancelRejectResponseTo::Cancel,
            reject_text: reason.to_owned(),
        };

        debug!(session = %reject.session, reason, "rejecting order cancellation");
        channel.send_reply(reject.into());
    }

    pub fn reject_market_data<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &MarketDataRequest,
        reason: Option<MdRejectReason>,
        text: &str,
    ) {
        let reject = MarketDataReject {
            session: request.session.clone(),
            request_id: request.request_id.clone(),
            reject_reason: reason,
            reject_text: Some(text.to_owned()),
        };

        debug!(session = %reject.session, text, "rejecting market data request");
        channel.send_reply(reject.into());
    }

    pub fn notify_no_instruments_requested<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &MarketDataRequest,
    ) {
        self.reject_market_data(channel, request, None, "no securities requested in the request");
    }

    pub fn notify_multiple_instruments_requested<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &MarketDataRequest,
    ) {
        self.reject_market_data(
            channel,
            request,
            None,
            "market data requests on multiple securities are not allowed",
        );
    }

    pub fn reject_security_status<R: ReplyChannel>(
        &mut self,
        channel: &R,
        request: &SecurityStatusRequest,
        reason: &str,
    ) {
        let reject = BusinessMessageReject {
            session: request.session.clone(),
            ref_seq_num: request.seq_num,
            ref_message_type: RejectedMessageType::SecurityStatusRequest,
            ref_id: request.request_id.clone(),
            business_reject_reason: BusinessRejectReason::UnknownSecurity,
            text: Some(reason.to_owned()),
        };

        debug!(session = %reject.session, reason, "rejecting security status request");
        channel.send_reply(reject.into());
    }
}

impl Default for RejectNotifier {
    fn default() -> Self {
        Self::new()
    }
}
