use crate::{error::StorageError, predicate::Model};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Storage format of an external data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum DatasourceFormat {
    Csv,
    Postgres,
}

/// Maps a column of the external source onto an internal attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub column_from: String,
    pub column_to: String,
}

impl ColumnMapping {
    pub fn new(column_from: impl Into<String>, column_to: impl Into<String>) -> Self {
        Self {
            column_from: column_from.into(),
            column_to: column_to.into(),
        }
    }
}

/// An external market-data source a venue can replay historical depth from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasource {
    pub datasource_id: u64,
    pub venue_id: SmolStr,
    pub name: String,
    pub connection: String,
    pub format: Option<DatasourceFormat>,
    pub enabled: Option<bool>,
    pub repeat: Option<bool>,
    pub text_delimiter: Option<char>,
    pub text_header_row: Option<u64>,
    pub table_name: Option<String>,
    pub column_mappings: Vec<ColumnMapping>,
}

impl Datasource {
    pub fn create(datasource_id: u64, patch: DatasourcePatch) -> Result<Self, StorageError> {
        let (venue_id, name, connection) = match (patch.venue_id, patch.name, patch.connection) {
            (Some(venue_id), Some(name), Some(connection)) => (venue_id, name, connection),
            _ => {
                return Err(StorageError::DataIntegrityViolated(
                    "datasource record requires venue id, name and connection".into(),
                ))
            }
        };

        Ok(Self {
            datasource_id,
            venue_id,
            name,
            connection,
            format: patch.format,
            enabled: patch.enabled,
            repeat: patch.repeat,
            text_delimiter: patch.text_delimiter,
            text_header_row: patch.text_header_row,
            table_name: patch.table_name,
            column_mappings: patch.column_mappings.unwrap_or_default(),
        })
    }

    pub fn update(&mut self, patch: DatasourcePatch) {
        if let Some(venue_id) = patch.venue_id {
            self.venue_id = venue_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(connection) = patch.connection {
            self.connection = connection;
        }
        if patch.format.is_some() {
            self.format = patch.format;
        }
        if patch.enabled.is_some() {
            self.enabled = patch.enabled;
        }
        if patch.repeat.is_some() {
            self.repeat = patch.repeat;
        }
        if patch.text_delimiter.is_some() {
            self.text_delimiter = patch.text_delimiter;
        }
        if patch.text_header_row.is_some() {
            self.text_header_row = patch.text_header_row;
        }
        if patch.table_name.is_some() {
            self.table_name = patch.table_name;
        }
        if let Some(column_mappings) = patch.column_mappings {
            self.column_mappings = column_mappings;
        }
    }
}

/// Patch-style creation/update payload for [`Datasource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasourcePatch {
    pub venue_id: Option<SmolStr>,
    pub name: Option<String>,
    pub connection: Option<String>,
    pub format: Option<DatasourceFormat>,
    pub enabled: Option<bool>,
    pub repeat: Option<bool>,
    pub text_delimiter: Option<char>,
    pub text_header_row: Option<u64>,
    pub table_name: Option<String>,
    pub column_mappings: Option<Vec<ColumnMapping>>,
}

impl DatasourcePatch {
    pub fn with_venue_id(mut self, venue_id: impl Into<SmolStr>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub fn with_format(mut self, format: DatasourceFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_column_mappings(mut self, column_mappings: Vec<ColumnMapping>) -> Self {
        self.column_mappings = Some(column_mappings);
        self
    }
}

/// Queryable fields of a [`Datasource`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum DatasourceField {
    DatasourceId,
    VenueId,
    Name,
    Connection,
    Format,
    Enabled,
    Repeat,
    TextDelimiter,
    TextHeaderRow,
    TableName,
}

impl Model for Datasource {
    type Field = DatasourceField;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_identity_and_connection() {
        let err = Datasource::create(1, DatasourcePatch::default().with_name("feed"))
            .unwrap_err();
        assert!(matches!(err, StorageError::DataIntegrityViolated(_)));
    }

    #[test]
    fn column_mappings_default_to_empty() {
        let datasource = Datasource::create(
            1,
            DatasourcePatch::default()
                .with_venue_id("XLON")
                .with_name("depth-feed")
                .with_connection("/data/depth.csv")
                .with_format(DatasourceFormat::Csv),
        )
        .unwrap();
        assert!(datasource.column_mappings.is_empty());
    }
}
