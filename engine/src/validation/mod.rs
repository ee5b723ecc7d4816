//! Request and order validation.
//!
//! Two checker families mirror the two moments an order's attributes are
//! inspected: placement/modification requests coming off the wire, and
//! resting orders reconstructed from a persisted snapshot. Each checker
//! returns `None` on success or the specific [`ValidationError`]; the
//! validators run their checkers in a fixed order and report the first
//! failure. The error's display text is what clients see as reject text.

use arara_markets::{OrderStatus, OrderType, Side, TimeInForce};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::venue::VenueConfig;
use arara_markets::MatchingConfig;

mod checks;

pub use checks::{
    field_respects_maximum, field_respects_minimum, field_respects_tick, field_specified,
};

/// `None` means the check passed.
pub type ValidationResult = Option<ValidationError>;

/// Stable per-field validation error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("side is missing")]
    SideMissing,
    #[error("side is not supported")]
    SideUnsupported,
    #[error("order type is missing")]
    OrderTypeMissing,
    #[error("order type is not supported")]
    OrderTypeUnsupported,
    #[error("order quantity is missing")]
    OrderQuantityMissing,
    #[error("order quantity violates the minimal quantity constraint")]
    OrderQuantityMinViolated,
    #[error("order quantity violates the maximal quantity constraint")]
    OrderQuantityMaxViolated,
    #[error("order quantity violates the quantity tick constraint")]
    OrderQuantityTickViolated,
    #[error("order price is missing")]
    OrderPriceMissing,
    #[error("order price is not allowed for a market order")]
    OrderPriceNotAllowed,
    #[error("order price violates the price tick constraint")]
    OrderPriceTickViolated,
    #[error("time in force is not supported")]
    TimeInForceUnsupported,
    #[error("expire time or expire date is required")]
    ExpireInfoMissing,
    #[error("expire time and expire date are mutually exclusive")]
    ExpireInfoAmbiguous,
    #[error("expire time or expire date is not allowed for the time in force")]
    ExpireInfoNotAllowed,
    #[error("order is already expired")]
    OrderAlreadyExpired,
    #[error("short sale exempt reason is required")]
    ShortSaleExemptReasonMissing,
    #[error("order status is not compatible with a resting order")]
    OrderStatusUnsupported,
    #[error("order side is not compatible with the order book side")]
    OrderSideUnsupported,
    #[error("total quantity violates the minimal quantity constraint")]
    TotalQuantityMinViolated,
    #[error("total quantity violates the maximal quantity constraint")]
    TotalQuantityMaxViolated,
    #[error("total quantity violates the quantity tick constraint")]
    TotalQuantityTickViolated,
    #[error("executed quantity is negative")]
    CumExecutedQuantityNegative,
    #[error("executed quantity violates the quantity tick constraint")]
    CumExecutedQuantityTickViolated,
    #[error("executed quantity is not less than the total quantity")]
    CumExecutedQuantityOverflow,
    #[error("day order was created on a previous trading day")]
    DayOrderExpired,
}

/// Borrowed view over the order attributes a placement or modification
/// request carries. Both request types validate identically.
#[derive(Debug, Clone, Copy)]
pub struct OrderAttributes<'a> {
    pub side: Option<Side>,
    pub order_type: Option<OrderType>,
    pub order_price: Option<Decimal>,
    pub order_quantity: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
    pub expire_time: Option<DateTime<Utc>>,
    pub expire_date: Option<NaiveDate>,
    pub short_sale_exempt_reason: Option<&'a str>,
}

/// Validates placement/modification attributes against the instrument's
/// matching configuration and the venue policy.
#[derive(Debug)]
pub struct PlacementValidator<'a> {
    config: &'a MatchingConfig,
    venue: &'a VenueConfig,
    now: DateTime<Utc>,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(config: &'a MatchingConfig, venue: &'a VenueConfig, now: DateTime<Utc>) -> Self {
        Self { config, venue, now }
    }

    /// Run every placement checker in order; the first failure wins.
    pub fn validate(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        self.check_side(attributes)
            .or_else(|| self.check_order_type(attributes))
            .or_else(|| self.check_quantity(attributes))
            .or_else(|| self.check_price(attributes))
            .or_else(|| self.check_time_in_force(attributes))
            .or_else(|| self.check_expire_info(attributes))
            .or_else(|| self.check_not_expired(attributes))
            .or_else(|| self.check_short_sale_exemption(attributes))
    }

    fn check_side(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        field_specified(attributes.side, ValidationError::SideMissing)
    }

    fn check_order_type(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        field_specified(attributes.order_type, ValidationError::OrderTypeMissing)
    }

    fn check_quantity(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        field_specified(
            attributes.order_quantity,
            ValidationError::OrderQuantityMissing,
        )
        .or_else(|| {
            field_respects_minimum(
                attributes.order_quantity,
                self.config.min_quantity,
                ValidationError::OrderQuantityMinViolated,
            )
        })
        .or_else(|| {
            field_respects_maximum(
                attributes.order_quantity,
                self.config.max_quantity,
                ValidationError::OrderQuantityMaxViolated,
            )
        })
        .or_else(|| {
            field_respects_tick(
                attributes.order_quantity,
                self.config.quantity_tick,
                ValidationError::OrderQuantityTickViolated,
            )
        })
    }

    fn check_price(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        match attributes.order_type {
            Some(OrderType::Limit) => {
                field_specified(attributes.order_price, ValidationError::OrderPriceMissing)
                    .or_else(|| {
                        field_respects_tick(
                            attributes.order_price,
                            self.config.price_tick,
                            ValidationError::OrderPriceTickViolated,
                        )
                    })
            }
            Some(OrderType::Market) => attributes
                .order_price
                .is_some()
                .then_some(ValidationError::OrderPriceNotAllowed),
            None => None,
        }
    }

    fn check_time_in_force(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        match attributes.time_in_force {
            Some(time_in_force) if !self.venue.tif_support.supports(time_in_force) => {
                Some(ValidationError::TimeInForceUnsupported)
            }
            _ => None,
        }
    }

    fn check_expire_info(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        let requires_expire_info = attributes
            .time_in_force
            .map(|tif| tif.requires_expire_info())
            .unwrap_or(false);

        match (
            requires_expire_info,
            attributes.expire_time.is_some(),
            attributes.expire_date.is_some(),
        ) {
            (true, false, false) => Some(ValidationError::ExpireInfoMissing),
            (true, true, true) => Some(ValidationError::ExpireInfoAmbiguous),
            (false, time, date) if time || date => Some(ValidationError::ExpireInfoNotAllowed),
            _ => None,
        }
    }

    fn check_not_expired(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        if let Some(expire_time) = attributes.expire_time {
            if expire_time <= self.now {
                return Some(ValidationError::OrderAlreadyExpired);
            }
        }
        if let Some(expire_date) = attributes.expire_date {
            if expire_date < self.venue.local_date(self.now) {
                return Some(ValidationError::OrderAlreadyExpired);
            }
        }
        None
    }

    fn check_short_sale_exemption(&self, attributes: &OrderAttributes<'_>) -> ValidationResult {
        match attributes.side {
            Some(Side::SellShortExempt) => field_specified(
                attributes.short_sale_exempt_reason,
                ValidationError::ShortSaleExemptReasonMissing,
            ),
            _ => None,
        }
    }
}

/// Attributes of a resting order reconstructed from a persisted snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RestingOrderAttributes {
    pub side: Side,
    pub book_side: arara_markets::BookSide,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    pub total_quantity: Decimal,
    pub cum_executed_quantity: Decimal,
    pub created_date: NaiveDate,
}

/// Validates orders restored from a snapshot before they re-enter a book.
#[derive(Debug)]
pub struct RestingOrderValidator<'a> {
    config: &'a MatchingConfig,
    venue: &'a VenueConfig,
    now: DateTime<Utc>,
}

impl<'a> RestingOrderValidator<'a> {
    pub fn new(config: &'a MatchingConfig, venue: &'a VenueConfig, now: DateTime<Utc>) -> Self {
        Self { config, venue, now }
    }

    pub fn validate(&self, order: &RestingOrderAttributes) -> ValidationResult {
        self.check_status(order)
            .or_else(|| self.check_book_side(order))
            .or_else(|| self.check_time_in_force(order))
            .or_else(|| self.check_total_quantity(order))
            .or_else(|| self.check_cum_executed_quantity(order))
            .or_else(|| self.check_day_order(order))
    }

    fn check_status(&self, order: &RestingOrderAttributes) -> ValidationResult {
        (!order.status.is_resting()).then_some(ValidationError::OrderStatusUnsupported)
    }

    fn check_book_side(&self, order: &RestingOrderAttributes) -> ValidationResult {
        (order.side.book_side() != order.book_side)
            .then_some(ValidationError::OrderSideUnsupported)
    }

    fn check_time_in_force(&self, order: &RestingOrderAttributes) -> ValidationResult {
        (!self.venue.tif_support.supports(order.time_in_force))
            .then_some(ValidationError::TimeInForceUnsupported)
    }

    fn check_total_quantity(&self, order: &RestingOrderAttributes) -> ValidationResult {
        field_respects_minimum(
            Some(order.total_quantity),
            self.config.min_quantity,
            ValidationError::TotalQuantityMinViolated,
        )
        .or_else(|| {
            field_respects_maximum(
                Some(order.total_quantity),
                self.config.max_quantity,
                ValidationError::TotalQuantityMaxViolated,
            )
        })
        .or_else(|| {
            field_respects_tick(
                Some(order.total_quantity),
                self.config.quantity_tick,
                ValidationError::TotalQuantityTickViolated,
            )
        })
    }

    fn check_cum_executed_quantity(&self, order: &RestingOrderAttributes) -> ValidationResult {
        if order.cum_executed_quantity < Decimal::ZERO {
            return Some(ValidationError::CumExecutedQuantityNegative);
        }
        if order.cum_executed_quantity > Decimal::ZERO {
            if let Some(error) = field_respects_tick(
                Some(order.cum_executed_quantity),
                self.config.quantity_tick,
                ValidationError::CumExecutedQuantityTickViolated,
            ) {
                return Some(error);
            }
        }
        (order.cum_executed_quantity >= order.total_quantity)
            .then_some(ValidationError::CumExecutedQuantityOverflow)
    }

    fn check_day_order(&self, order: &RestingOrderAttributes) -> ValidationResult {
        (order.time_in_force == TimeInForce::Day
            && order.created_date != self.venue.local_date(self.now))
        .then_some(ValidationError::DayOrderExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arara_markets::BookSide;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn config() -> MatchingConfig {
        MatchingConfig {
            price_tick: Some(dec!(0.01)),
            quantity_tick: Some(dec!(10)),
            min_quantity: Some(dec!(10)),
            max_quantity: Some(dec!(1000)),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap()
    }

    fn valid_limit<'a>() -> OrderAttributes<'a> {
        OrderAttributes {
            side: Some(Side::Buy),
            order_type: Some(OrderType::Limit),
            order_price: Some(dec!(10.00)),
            order_quantity: Some(dec!(100)),
            time_in_force: None,
            expire_time: None,
            expire_date: None,
            short_sale_exempt_reason: None,
        }
    }

    fn validate(attributes: &OrderAttributes<'_>) -> ValidationResult {
        let config = config();
        let venue = VenueConfig::default();
        PlacementValidator::new(&config, &venue, now()).validate(attributes)
    }

    #[test]
    fn valid_limit_order_passes() {
        assert_eq!(validate(&valid_limit()), None);
    }

    #[test]
    fn missing_side_is_the_first_failure() {
        let attributes = OrderAttributes {
            side: None,
            order_quantity: None,
            ..valid_limit()
        };
        assert_eq!(validate(&attributes), Some(ValidationError::SideMissing));
    }

    #[test]
    fn quantity_bounds_and_tick_are_enforced() {
        let too_small = OrderAttributes {
            order_quantity: Some(dec!(5)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&too_small),
            Some(ValidationError::OrderQuantityMinViolated)
        );

        let too_large = OrderAttributes {
            order_quantity: Some(dec!(2000)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&too_large),
            Some(ValidationError::OrderQuantityMaxViolated)
        );

        let off_tick = OrderAttributes {
            order_quantity: Some(dec!(105)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&off_tick),
            Some(ValidationError::OrderQuantityTickViolated)
        );
    }

    #[test]
    fn limit_orders_need_an_on_tick_price() {
        let missing = OrderAttributes {
            order_price: None,
            ..valid_limit()
        };
        assert_eq!(validate(&missing), Some(ValidationError::OrderPriceMissing));

        let off_tick = OrderAttributes {
            order_price: Some(dec!(10.005)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&off_tick),
            Some(ValidationError::OrderPriceTickViolated)
        );
    }

    #[test]
    fn market_orders_must_not_carry_a_price() {
        let attributes = OrderAttributes {
            order_type: Some(OrderType::Market),
            order_price: Some(dec!(10.00)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&attributes),
            Some(ValidationError::OrderPriceNotAllowed)
        );

        let ok = OrderAttributes {
            order_type: Some(OrderType::Market),
            order_price: None,
            ..valid_limit()
        };
        assert_eq!(validate(&ok), None);
    }

    #[test]
    fn gtd_requires_exactly_one_expire_field() {
        let neither = OrderAttributes {
            time_in_force: Some(TimeInForce::GoodTillDate),
            ..valid_limit()
        };
        assert_eq!(validate(&neither), Some(ValidationError::ExpireInfoMissing));

        let both = OrderAttributes {
            time_in_force: Some(TimeInForce::GoodTillDate),
            expire_time: Some(now() + chrono::Duration::hours(1)),
            expire_date: Some(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()),
            ..valid_limit()
        };
        assert_eq!(validate(&both), Some(ValidationError::ExpireInfoAmbiguous));

        let one = OrderAttributes {
            time_in_force: Some(TimeInForce::GoodTillDate),
            expire_time: Some(now() + chrono::Duration::hours(1)),
            ..valid_limit()
        };
        assert_eq!(validate(&one), None);
    }

    #[test]
    fn day_orders_must_not_carry_expire_info() {
        let attributes = OrderAttributes {
            time_in_force: Some(TimeInForce::Day),
            expire_time: Some(now() + chrono::Duration::hours(1)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&attributes),
            Some(ValidationError::ExpireInfoNotAllowed)
        );
    }

    #[test]
    fn expired_gtd_is_rejected_up_front() {
        let attributes = OrderAttributes {
            time_in_force: Some(TimeInForce::GoodTillDate),
            expire_time: Some(now() - chrono::Duration::seconds(1)),
            ..valid_limit()
        };
        assert_eq!(
            validate(&attributes),
            Some(ValidationError::OrderAlreadyExpired)
        );
    }

    #[test]
    fn sell_short_exempt_needs_a_reason() {
        let attributes = OrderAttributes {
            side: Some(Side::SellShortExempt),
            ..valid_limit()
        };
        assert_eq!(
            validate(&attributes),
            Some(ValidationError::ShortSaleExemptReasonMissing)
        );

        let ok = OrderAttributes {
            side: Some(Side::SellShortExempt),
            short_sale_exempt_reason: Some("exempt"),
            ..valid_limit()
        };
        assert_eq!(validate(&ok), None);
    }

    #[test]
    fn resting_validator_accepts_a_healthy_order() {
        let config = config();
        let venue = VenueConfig::default();
        let validator = RestingOrderValidator::new(&config, &venue, now());
        let order = RestingOrderAttributes {
            side: Side::Buy,
            book_side: BookSide::Bid,
            status: OrderStatus::PartiallyFilled,
            time_in_force: TimeInForce::GoodTillCancel,
            total_quantity: dec!(100),
            cum_executed_quantity: dec!(40),
            created_date: now().date_naive(),
        };
        assert_eq!(validator.validate(&order), None);
    }

    #[test]
    fn resting_validator_rejects_terminal_status_and_overflow() {
        let config = config();
        let venue = VenueConfig::default();
        let validator = RestingOrderValidator::new(&config, &venue, now());
        let order = RestingOrderAttributes {
            side: Side::Buy,
            book_side: BookSide::Bid,
            status: OrderStatus::Filled,
            time_in_force: TimeInForce::GoodTillCancel,
            total_quantity: dec!(100),
            cum_executed_quantity: dec!(100),
            created_date: now().date_naive(),
        };
        assert_eq!(
            validator.validate(&order),
            Some(ValidationError::OrderStatusUnsupported)
        );

        let overflown = RestingOrderAttributes {
            status: OrderStatus::PartiallyFilled,
            ..order
        };
        assert_eq!(
            validator.validate(&overflown),
            Some(ValidationError::CumExecutedQuantityOverflow)
        );
    }

    #[test]
    fn resting_validator_rejects_stale_day_orders() {
        let config = config();
        let venue = VenueConfig::default();
        let validator = RestingOrderValidator::new(&config, &venue, now());
        let order = RestingOrderAttributes {
            side: Side::Sell,
            book_side: BookSide::Offer,
            status: OrderStatus::New,
            time_in_force: TimeInForce::Day,
            total_quantity: dec!(100),
            cum_executed_quantity: dec!(0),
            created_date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        };
        assert_eq!(
            validator.validate(&order),
            Some(ValidationError::DayOrderExpired)
        );
    }
}
