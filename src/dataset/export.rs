use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::{Dataset, ServiceCatalog};

/// One interaction row in the scoring engine's bulk-import schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportRecord {
    #[serde(rename = "USER_ID")]
    pub user_id: String,
    #[serde(rename = "ITEM_ID")]
    pub item_id: String,
    #[serde(rename = "EVENT_TYPE")]
    pub event_type: String,
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: i64,
}

/// Transforms the dataset into engine-import records
///
/// Service names become catalog ids, interaction types are lowercased into
/// event types, and each row gets a strictly increasing timestamp starting at
/// `base` so the engine sees interactions in dataset order.
pub fn import_records(
    dataset: &Dataset,
    catalog: &ServiceCatalog,
    base: DateTime<Utc>,
) -> AppResult<Vec<ImportRecord>> {
    let start = base.timestamp();

    dataset
        .interactions()
        .iter()
        .enumerate()
        .map(|(idx, interaction)| {
            let item_id = catalog.id_for(&interaction.service).ok_or_else(|| {
                AppError::Dataset(format!("service {} missing from catalog", interaction.service))
            })?;

            Ok(ImportRecord {
                user_id: interaction.user_id.to_string(),
                item_id: item_id.to_string(),
                event_type: interaction.interaction_type.to_lowercase(),
                timestamp: start + idx as i64,
            })
        })
        .collect()
}

/// Writes import records as a JSON file at `path`
pub fn write_import_file(path: impl AsRef<Path>, records: &[ImportRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
