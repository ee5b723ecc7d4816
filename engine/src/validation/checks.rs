//! Field-level checker utilities shared by the validator families.

use rust_decimal::Decimal;

/// Passes when the optional field carries a value.
pub fn field_specified<T, E>(field: Option<T>, error: E) -> Option<E> {
    match field {
        Some(_) => None,
        None => Some(error),
    }
}

/// Passes when the field is at least the configured minimum and strictly
/// positive. An absent field passes; an absent minimum defaults to zero.
pub fn field_respects_minimum<E>(
    field: Option<Decimal>,
    minimum: Option<Decimal>,
    error: E,
) -> Option<E> {
    let Some(value) = field else {
        return None;
    };

    let minimum = minimum.unwrap_or(Decimal::ZERO);
    if value >= minimum && value > Decimal::ZERO {
        None
    } else {
        Some(error)
    }
}

/// Passes when the field does not exceed the configured maximum. An absent
/// field or an absent maximum passes.
pub fn field_respects_maximum<E>(
    field: Option<Decimal>,
    maximum: Option<Decimal>,
    error: E,
) -> Option<E> {
    match (field, maximum) {
        (Some(value), Some(maximum)) if value > maximum => Some(error),
        _ => None,
    }
}

/// Passes when the field is a positive-tick multiple. An absent field or an
/// absent tick passes; a non-positive tick fails.
pub fn field_respects_tick<E>(
    field: Option<Decimal>,
    tick: Option<Decimal>,
    error: E,
) -> Option<E> {
    let (Some(value), Some(tick)) = (field, tick) else {
        return None;
    };

    if tick > Decimal::ZERO && (value % tick).is_zero() {
        None
    } else {
        Some(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, PartialEq)]
    struct Failed;

    #[test]
    fn specified_passes_on_value() {
        assert_eq!(field_specified(Some(1), Failed), None);
        assert_eq!(field_specified::<i32, _>(None, Failed), Some(Failed));
    }

    #[test]
    fn minimum_defaults_to_zero_but_requires_positive() {
        assert_eq!(field_respects_minimum(Some(dec!(1)), None, Failed), None);
        assert_eq!(
            field_respects_minimum(Some(dec!(0)), None, Failed),
            Some(Failed)
        );
        assert_eq!(
            field_respects_minimum(Some(dec!(-1)), None, Failed),
            Some(Failed)
        );
        assert_eq!(
            field_respects_minimum(Some(dec!(5)), Some(dec!(10)), Failed),
            Some(Failed)
        );
        assert_eq!(field_respects_minimum(None, Some(dec!(10)), Failed), None);
    }

    #[test]
    fn maximum_only_fails_on_excess() {
        assert_eq!(
            field_respects_maximum(Some(dec!(11)), Some(dec!(10)), Failed),
            Some(Failed)
        );
        assert_eq!(
            field_respects_maximum(Some(dec!(10)), Some(dec!(10)), Failed),
            None
        );
        assert_eq!(field_respects_maximum(Some(dec!(11)), None, Failed), None);
    }

    #[test]
    fn tick_requires_exact_multiples() {
        assert_eq!(
            field_respects_tick(Some(dec!(0.05)), Some(dec!(0.01)), Failed),
            None
        );
        assert_eq!(
            field_respects_tick(Some(dec!(0.055)), Some(dec!(0.01)), Failed),
            Some(Failed)
        );
        assert_eq!(
            field_respects_tick(Some(dec!(1)), Some(dec!(0)), Failed),
            Some(Failed)
        );
        assert_eq!(field_respects_tick(Some(dec!(1)), None, Failed), None);
    }
}
