use crate::{error::StorageError, predicate::Model};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A venue-level key/value setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: Option<String>,
}

impl Setting {
    pub fn create(patch: SettingPatch) -> Result<Self, StorageError> {
        let key = patch.key.ok_or_else(|| {
            StorageError::DataIntegrityViolated("setting record requires a key".into())
        })?;

        Ok(Self {
            key,
            value: patch.value,
        })
    }

    pub fn update(&mut self, patch: SettingPatch) {
        if let Some(key) = patch.key {
            self.key = key;
        }
        if patch.value.is_some() {
            self.value = patch.value;
        }
    }
}

/// Patch-style creation/update payload for [`Setting`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingPatch {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl SettingPatch {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Queryable fields of a [`Setting`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum SettingField {
    Key,
    Value,
}

impl Model for Setting {
    type Field = SettingField;
}
