//! Import/export of the legacy browser payload.
//!
//! The legacy app kept a JSON array of `{name, date, ingredients}` objects
//! under one key-value entry. Ids did not exist there; import assigns fresh
//! ids in array order and export drops them.

use crate::model::dinner::DinnerRecord;
use crate::store::StoreResult;
use serde::{Deserialize, Serialize};

/// Key under which the legacy app stored its payload.
pub const LEGACY_STORAGE_KEY: &str = "dinners";

#[derive(Debug, Serialize, Deserialize)]
struct LegacyDinner {
    name: String,
    date: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

/// Parses a legacy payload into new records.
///
/// Blank input and JSON `null` both mean "no dinners yet".
///
/// # Errors
/// - `StoreError::Serialization` when the payload is not a valid dinner array.
pub fn import_legacy_json(payload: &str) -> StoreResult<Vec<DinnerRecord>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Option<Vec<LegacyDinner>> = serde_json::from_str(payload)?;
    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|dinner| DinnerRecord::new(dinner.name, dinner.date, dinner.ingredients))
        .collect())
}

/// Serializes records into the legacy payload shape.
pub fn export_legacy_json(records: &[DinnerRecord]) -> StoreResult<String> {
    let legacy = records
        .iter()
        .map(|record| LegacyDinner {
            name: record.name.clone(),
            date: record.date.clone(),
            ingredients: record.ingredients.clone(),
        })
        .collect::<Vec<_>>();
    Ok(serde_json::to_string(&legacy)?)
}
