use crate::{error::StorageError, predicate::Model};
use chrono::NaiveTime;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One row of a venue's daily trading-phase schedule.
///
/// Times are venue-local wall-clock times. `end_time_range` widens the end
/// of the phase by up to the given number of minutes, which the simulator
/// uses to make auction ends less predictable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPhase {
    pub venue_id: SmolStr,
    pub phase: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub allow_cancels: bool,
    pub end_time_range: Option<i32>,
}

impl MarketPhase {
    pub fn create(patch: MarketPhasePatch) -> Result<Self, StorageError> {
        let (venue_id, phase, start_time, end_time) = match (
            patch.venue_id,
            patch.phase,
            patch.start_time,
            patch.end_time,
        ) {
            (Some(venue_id), Some(phase), Some(start_time), Some(end_time)) => {
                (venue_id, phase, start_time, end_time)
            }
            _ => {
                return Err(StorageError::DataIntegrityViolated(
                    "market phase record requires venue id, phase and both times".into(),
                ))
            }
        };

        Ok(Self {
            venue_id,
            phase,
            start_time,
            end_time,
            allow_cancels: patch.allow_cancels.unwrap_or(false),
            end_time_range: patch.end_time_range,
        })
    }

    /// Whether a venue-local wall-clock time falls inside this phase.
    pub fn contains(&self, at: NaiveTime) -> bool {
        self.start_time <= at && at < self.end_time
    }
}

/// Patch-style creation payload for [`MarketPhase`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPhasePatch {
    pub venue_id: Option<SmolStr>,
    pub phase: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub allow_cancels: Option<bool>,
    pub end_time_range: Option<i32>,
}

impl MarketPhasePatch {
    pub fn with_venue_id(mut self, venue_id: impl Into<SmolStr>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_allow_cancels(mut self, allow_cancels: bool) -> Self {
        self.allow_cancels = Some(allow_cancels);
        self
    }
}

/// Queryable fields of a [`MarketPhase`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum MarketPhaseField {
    VenueId,
    Phase,
    StartTime,
    EndTime,
    AllowCancels,
    EndTimeRange,
}

impl Model for MarketPhase {
    type Field = MarketPhaseField;
}
