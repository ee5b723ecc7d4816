use chrono::{DateTime, Datelike, Timelike, Utc};
use thiserror::Error;

/// Raised when a counter sequence is asked to step past the end of its
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence counter overflowed its range")]
    Overflow,
}

/// Counter over an inclusive `[first, last]` range.
///
/// `current()` is always a valid value of the range; `increment()` fails
/// with [`SequenceError::Overflow`] once the end is reached, leaving the
/// counter on its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericSequence {
    current: u64,
    first: u64,
    last: u64,
}

impl NumericSequence {
    pub fn new(first: u64, last: u64) -> Self {
        debug_assert!(first <= last);
        Self {
            current: first,
            first,
            last,
        }
    }

    /// Resume a sequence at an arbitrary in-range position.
    pub fn starting_at(current: u64, first: u64, last: u64) -> Self {
        debug_assert!(first <= current && current <= last);
        Self {
            current,
            first,
            last,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn increment(&mut self) -> Result<(), SequenceError> {
        if self.current >= self.last {
            return Err(SequenceError::Overflow);
        }
        self.current += 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = self.first;
    }
}

/// Compose a `YYMMDD` integer from a UTC timestamp.
pub fn compose_date_int(at: DateTime<Utc>) -> u64 {
    let year = at.year().rem_euclid(100) as u64;
    let month = u64::from(at.month());
    let day = u64::from(at.day());

    (year * 100 + month) * 100 + day
}

/// Compose a `YYMMDDhhmmss` integer from a UTC timestamp.
pub fn compose_timestamp_int(at: DateTime<Utc>) -> u64 {
    let mut composed = compose_date_int(at);

    composed *= 100;
    composed += u64::from(at.hour());

    composed *= 100;
    composed += u64::from(at.minute());

    composed *= 100;
    composed += u64::from(at.second());

    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn numeric_sequence_counts_through_its_range() {
        let mut sequence = NumericSequence::new(1, 3);
        assert_eq!(sequence.current(), 1);
        sequence.increment().unwrap();
        assert_eq!(sequence.current(), 2);
        sequence.increment().unwrap();
        assert_eq!(sequence.current(), 3);
        assert_eq!(sequence.increment(), Err(SequenceError::Overflow));
        assert_eq!(sequence.current(), 3);
    }

    #[test]
    fn numeric_sequence_resets_to_first() {
        let mut sequence = NumericSequence::new(5, 10);
        sequence.increment().unwrap();
        sequence.reset();
        assert_eq!(sequence.current(), 5);
    }

    #[test]
    fn date_int_composes_year_month_day() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap();
        assert_eq!(compose_date_int(at), 240307);
    }

    #[test]
    fn timestamp_int_composes_down_to_seconds() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 30, 5).unwrap();
        assert_eq!(compose_timestamp_int(at), 240307093005);
    }

    #[test]
    fn timestamp_int_pads_single_digit_components() {
        let at = Utc.with_ymd_and_hms(2001, 1, 1, 1, 1, 1).unwrap();
        assert_eq!(compose_timestamp_int(at), 10101010101);
    }
}
