//! Venue-level configuration and the daily phase schedule.

use arara_markets::{PhaseTransition, TimeInForce, TradingPhase, TradingStatus};
use arara_refdata::{MarketPhase, Venue};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::warn;

/// Which time-in-force values the venue accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TifSupport {
    pub day: bool,
    pub immediate_or_cancel: bool,
    pub fill_or_kill: bool,
    pub good_till_date: bool,
    pub good_till_cancel: bool,
}

impl TifSupport {
    pub fn all() -> Self {
        Self {
            day: true,
            immediate_or_cancel: true,
            fill_or_kill: true,
            good_till_date: true,
            good_till_cancel: true,
        }
    }

    pub fn supports(&self, time_in_force: TimeInForce) -> bool {
        match time_in_force {
            TimeInForce::Day => self.day,
            TimeInForce::ImmediateOrCancel => self.immediate_or_cancel,
            TimeInForce::FillOrKill => self.fill_or_kill,
            TimeInForce::GoodTillDate => self.good_till_date,
            TimeInForce::GoodTillCancel => self.good_till_cancel,
        }
    }
}

impl Default for TifSupport {
    fn default() -> Self {
        Self::all()
    }
}

/// Resolved venue configuration the engines run against.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueConfig {
    pub venue_id: SmolStr,
    pub name: Option<String>,
    /// Venue-local UTC offset, used for Day/GTD expiry and expire-date
    /// validation.
    pub timezone: FixedOffset,
    pub cancel_on_disconnect: bool,
    pub tif_support: TifSupport,
}

impl VenueConfig {
    pub fn from_record(record: &Venue) -> Self {
        let timezone = record
            .timezone_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());

        Self {
            venue_id: record.venue_id.clone(),
            name: record.name.clone(),
            timezone,
            cancel_on_disconnect: record.cancel_on_disconnect.unwrap_or(false),
            tif_support: TifSupport {
                day: record.support_tif_day.unwrap_or(true),
                immediate_or_cancel: record.support_tif_ioc.unwrap_or(true),
                fill_or_kill: record.support_tif_fok.unwrap_or(true),
                good_till_date: record.support_tif_gtd.unwrap_or(true),
                good_till_cancel: record.support_tif_gtc.unwrap_or(true),
            },
        }
    }

    /// Venue-local calendar date for a UTC instant.
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.timezone).date_naive()
    }

    /// Venue-local wall-clock time for a UTC instant.
    pub fn local_time(&self, at: DateTime<Utc>) -> NaiveTime {
        at.with_timezone(&self.timezone).time()
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            venue_id: SmolStr::new("ARARA"),
            name: None,
            timezone: FixedOffset::east_opt(0).unwrap(),
            cancel_on_disconnect: false,
            tif_support: TifSupport::all(),
        }
    }
}

/// One resolved row of the phase schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PhaseSlot {
    phase: TradingPhase,
    start_time: NaiveTime,
    end_time: NaiveTime,
    allow_cancels: bool,
}

/// A venue's daily trading-phase schedule, resolved from reference data.
///
/// Times outside every configured slot are `Closed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSchedule {
    slots: Vec<PhaseSlot>,
}

impl PhaseSchedule {
    /// Build a schedule from market-phase records, skipping rows whose
    /// phase name does not parse.
    pub fn from_records(records: &[MarketPhase]) -> Self {
        let slots = records
            .iter()
            .filter_map(|record| match TradingPhase::from_name(&record.phase) {
                Some(phase) => Some(PhaseSlot {
                    phase,
                    start_time: record.start_time,
                    end_time: record.end_time,
                    allow_cancels: record.allow_cancels,
                }),
                None => {
                    warn!(
                        venue_id = %record.venue_id,
                        phase = %record.phase,
                        "skipping market phase record with unknown phase name"
                    );
                    None
                }
            })
            .collect();

        Self { slots }
    }

    /// Phase in effect at a venue-local wall-clock time.
    pub fn phase_at(&self, at: NaiveTime) -> PhaseTransition {
        self.slots
            .iter()
            .find(|slot| slot.start_time <= at && at < slot.end_time)
            .map(|slot| PhaseTransition::new(slot.phase, TradingStatus::Resume, slot.allow_cancels))
            .unwrap_or_else(|| {
                PhaseTransition::new(TradingPhase::Closed, TradingStatus::Resume, false)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arara_refdata::MarketPhasePatch;
    use chrono::TimeZone;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn phase_record(phase: &str, start: NaiveTime, end: NaiveTime) -> MarketPhase {
        MarketPhase::create(
            MarketPhasePatch::default()
                .with_venue_id("XLON")
                .with_phase(phase)
                .with_start_time(start)
                .with_end_time(end)
                .with_allow_cancels(true),
        )
        .unwrap()
    }

    #[test]
    fn schedule_resolves_phases_by_local_time() {
        let schedule = PhaseSchedule::from_records(&[
            phase_record("OpeningAuction", time(7, 50), time(8, 0)),
            phase_record("Open", time(8, 0), time(16, 30)),
            phase_record("ClosingAuction", time(16, 30), time(16, 35)),
        ]);

        assert_eq!(
            schedule.phase_at(time(7, 55)).phase,
            TradingPhase::OpeningAuction
        );
        assert_eq!(schedule.phase_at(time(12, 0)).phase, TradingPhase::Open);
        assert_eq!(schedule.phase_at(time(20, 0)).phase, TradingPhase::Closed);
    }

    #[test]
    fn unknown_phase_names_are_skipped() {
        let schedule =
            PhaseSchedule::from_records(&[phase_record("Lunch", time(12, 0), time(13, 0))]);
        assert_eq!(schedule.phase_at(time(12, 30)).phase, TradingPhase::Closed);
    }

    #[test]
    fn venue_local_date_respects_the_offset() {
        let venue = VenueConfig {
            timezone: FixedOffset::east_opt(-5 * 3600).unwrap(),
            ..VenueConfig::default()
        };
        // 02:00 UTC is still the previous day at UTC-5.
        let at = Utc.with_ymd_and_hms(2024, 3, 8, 2, 0, 0).unwrap();
        assert_eq!(
            venue.local_date(at),
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
        );
    }
}
