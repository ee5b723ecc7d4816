use crate::{error::StorageError, predicate::Model};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A trading venue record.
///
/// Timezone is stored as a UTC offset in minutes; the trading system turns
/// it into the venue-local clock used for Day/GTD expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: SmolStr,
    pub name: Option<String>,
    pub timezone_offset_minutes: Option<i32>,
    pub cancel_on_disconnect: Option<bool>,
    pub support_tif_day: Option<bool>,
    pub support_tif_ioc: Option<bool>,
    pub support_tif_fok: Option<bool>,
    pub support_tif_gtd: Option<bool>,
    pub support_tif_gtc: Option<bool>,
    pub orders_on_startup: Option<u64>,
    pub persistence_enabled: Option<bool>,
    pub persistence_file_path: Option<String>,
}

impl Venue {
    /// Materialise a venue from a creation patch.
    pub fn create(patch: VenuePatch) -> Result<Self, StorageError> {
        let venue_id = patch.venue_id.ok_or_else(|| {
            StorageError::DataIntegrityViolated("venue record requires a venue id".into())
        })?;

        Ok(Self {
            venue_id,
            name: patch.name,
            timezone_offset_minutes: patch.timezone_offset_minutes,
            cancel_on_disconnect: patch.cancel_on_disconnect,
            support_tif_day: patch.support_tif_day,
            support_tif_ioc: patch.support_tif_ioc,
            support_tif_fok: patch.support_tif_fok,
            support_tif_gtd: patch.support_tif_gtd,
            support_tif_gtc: patch.support_tif_gtc,
            orders_on_startup: patch.orders_on_startup,
            persistence_enabled: patch.persistence_enabled,
            persistence_file_path: patch.persistence_file_path,
        })
    }

    /// Overlay the fields present in an update patch.
    pub fn update(&mut self, patch: VenuePatch) {
        if let Some(venue_id) = patch.venue_id {
            self.venue_id = venue_id;
        }
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.timezone_offset_minutes.is_some() {
            self.timezone_offset_minutes = patch.timezone_offset_minutes;
        }
        if patch.cancel_on_disconnect.is_some() {
            self.cancel_on_disconnect = patch.cancel_on_disconnect;
        }
        if patch.support_tif_day.is_some() {
            self.support_tif_day = patch.support_tif_day;
        }
        if patch.support_tif_ioc.is_some() {
            self.support_tif_ioc = patch.support_tif_ioc;
        }
        if patch.support_tif_fok.is_some() {
            self.support_tif_fok = patch.support_tif_fok;
        }
        if patch.support_tif_gtd.is_some() {
            self.support_tif_gtd = patch.support_tif_gtd;
        }
        if patch.support_tif_gtc.is_some() {
            self.support_tif_gtc = patch.support_tif_gtc;
        }
        if patch.orders_on_startup.is_some() {
            self.orders_on_startup = patch.orders_on_startup;
        }
        if patch.persistence_enabled.is_some() {
            self.persistence_enabled = patch.persistence_enabled;
        }
        if patch.persistence_file_path.is_some() {
            self.persistence_file_path = patch.persistence_file_path;
        }
    }
}

/// Patch-style creation/update payload for [`Venue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuePatch {
    pub venue_id: Option<SmolStr>,
    pub name: Option<String>,
    pub timezone_offset_minutes: Option<i32>,
    pub cancel_on_disconnect: Option<bool>,
    pub support_tif_day: Option<bool>,
    pub support_tif_ioc: Option<bool>,
    pub support_tif_fok: Option<bool>,
    pub support_tif_gtd: Option<bool>,
    pub support_tif_gtc: Option<bool>,
    pub orders_on_startup: Option<u64>,
    pub persistence_enabled: Option<bool>,
    pub persistence_file_path: Option<String>,
}

impl VenuePatch {
    pub fn with_venue_id(mut self, venue_id: impl Into<SmolStr>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_timezone_offset_minutes(mut self, minutes: i32) -> Self {
        self.timezone_offset_minutes = Some(minutes);
        self
    }

    pub fn with_cancel_on_disconnect(mut self, enabled: bool) -> Self {
        self.cancel_on_disconnect = Some(enabled);
        self
    }
}

/// Queryable fields of a [`Venue`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum VenueField {
    VenueId,
    Name,
    Timezone,
    CancelOnDisconnect,
    SupportTifDay,
    SupportTifIoc,
    SupportTifFok,
    SupportTifGtd,
    SupportTifGtc,
    OrdersOnStartup,
    PersistenceEnabled,
    PersistenceFilePath,
}

impl Model for Venue {
    type Field = VenueField;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_a_venue_id() {
        let err = Venue::create(VenuePatch::default()).unwrap_err();
        assert!(matches!(err, StorageError::DataIntegrityViolated(_)));
    }

    #[test]
    fn create_then_update_overlays_fields() {
        let mut venue = Venue::create(
            VenuePatch::default()
                .with_venue_id("XLON")
                .with_name("London")
                .with_cancel_on_disconnect(false),
        )
        .unwrap();
        assert_eq!(venue.venue_id, "XLON");
        assert_eq!(venue.cancel_on_disconnect, Some(false));

        venue.update(VenuePatch::default().with_cancel_on_disconnect(true));
        assert_eq!(venue.cancel_on_disconnect, Some(true));
        // Untouched fields survive the update.
        assert_eq!(venue.name.as_deref(), Some("London"));
    }
}
