use chrono::{DateTime, Utc};

/// Time source of a matching engine.
///
/// Production engines run on [`UtcClock`]; tests drive expiry and
/// identifier generation deterministically with [`ManualClock`].
pub trait EngineClock {
    fn time(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl EngineClock for UtcClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock advanced explicitly by the owner.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    now: DateTime<Utc>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn advance(&mut self, duration: chrono::Duration) {
        self.now += duration;
    }
}

impl EngineClock for ManualClock {
    fn time(&self) -> DateTime<Utc> {
        self.now
    }
}
