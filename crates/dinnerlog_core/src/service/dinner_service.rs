//! Dinner log use-case service.
//!
//! # Responsibility
//! - Capture new dinners from raw form input.
//! - Edit one record by stable id.
//! - Compose query/ordering functions into the list views.
//!
//! # Invariants
//! - Every mutation is load, change one record, save once.
//! - Mutations never change the position of any record.
//! - The service never validates names or dates.

use crate::model::dinner::{parse_ingredient_list, DinnerId, DinnerRecord};
use crate::query::ingredient::{extract_ingredient_set, filter_by_ingredient};
use crate::query::ordering::{by_name_ascending, by_recency_descending};
use crate::query::range::filter_by_date_range;
use crate::store::legacy::{export_legacy_json, import_legacy_json};
use crate::store::{DinnerStore, StoreError};
use chrono::NaiveDateTime;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for dinner use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// No record has the requested id.
    DinnerNotFound(DinnerId),
    /// An edit carried no field to change.
    EmptyEdit,
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DinnerNotFound(id) => write!(f, "dinner not found: {id}"),
            Self::EmptyEdit => write!(f, "edit needs at least one of name, date, ingredients"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DinnerNotFound(_) | Self::EmptyEdit => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Dinner service facade over an injected record store.
pub struct DinnerService<S: DinnerStore> {
    store: S,
}

impl<S: DinnerStore> DinnerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Appends one dinner captured from form input.
    ///
    /// `ingredients_csv` is split on `,` and each piece trimmed. Name and
    /// date are stored as given.
    pub fn add_dinner(
        &mut self,
        name: impl Into<String>,
        date: impl Into<String>,
        ingredients_csv: &str,
    ) -> ServiceResult<DinnerRecord> {
        let record = DinnerRecord::new(name, date, parse_ingredient_list(ingredients_csv));
        let mut records = self.store.load_all()?;
        records.push(record.clone());
        self.store.save_all(&records)?;
        info!(
            "event=dinner_add module=service status=ok dinner_id={} ingredient_count={} total={}",
            record.id,
            record.ingredients.len(),
            records.len()
        );
        Ok(record)
    }

    /// Replaces the name of one dinner.
    pub fn rename(
        &mut self,
        id: DinnerId,
        name: impl Into<String>,
    ) -> ServiceResult<DinnerRecord> {
        let name = name.into();
        self.update_one(id, "rename", |record| record.name = name)
    }

    /// Replaces the date text of one dinner.
    pub fn reschedule(
        &mut self,
        id: DinnerId,
        date: impl Into<String>,
    ) -> ServiceResult<DinnerRecord> {
        let date = date.into();
        self.update_one(id, "reschedule", |record| record.date = date)
    }

    /// Replaces the full ingredient list of one dinner from form input.
    pub fn replace_ingredients(
        &mut self,
        id: DinnerId,
        ingredients_csv: &str,
    ) -> ServiceResult<DinnerRecord> {
        let ingredients = parse_ingredient_list(ingredients_csv);
        self.update_one(id, "replace_ingredients", |record| {
            record.ingredients = ingredients
        })
    }

    /// Applies every given field to one dinner in a single save.
    ///
    /// Fields left as `None` keep their value. `ingredients_csv` replaces
    /// the whole list, parsed like form input.
    pub fn edit(
        &mut self,
        id: DinnerId,
        name: Option<String>,
        date: Option<String>,
        ingredients_csv: Option<&str>,
    ) -> ServiceResult<DinnerRecord> {
        if name.is_none() && date.is_none() && ingredients_csv.is_none() {
            return Err(ServiceError::EmptyEdit);
        }
        let ingredients = ingredients_csv.map(parse_ingredient_list);
        self.update_one(id, "edit", |record| {
            if let Some(name) = name {
                record.name = name;
            }
            if let Some(date) = date {
                record.date = date;
            }
            if let Some(ingredients) = ingredients {
                record.ingredients = ingredients;
            }
        })
    }

    /// Gets one dinner by id.
    pub fn get(&self, id: DinnerId) -> ServiceResult<Option<DinnerRecord>> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .find(|record| record.id == id))
    }

    /// Dinners inside the trailing `range` window, most recent first.
    ///
    /// Unknown `range` values yield an empty list.
    pub fn recent(&self, range: &str, now: NaiveDateTime) -> ServiceResult<Vec<DinnerRecord>> {
        let records = self.store.load_all()?;
        Ok(owned(by_recency_descending(filter_by_date_range(
            &records, range, now,
        ))))
    }

    /// Dinners containing `ingredient`, in creation order.
    ///
    /// Surrounding whitespace in the query is trimmed; matching stays exact
    /// and case-sensitive.
    pub fn with_ingredient(&self, ingredient: &str) -> ServiceResult<Vec<DinnerRecord>> {
        let records = self.store.load_all()?;
        Ok(owned(filter_by_ingredient(&records, ingredient.trim())))
    }

    /// All dinners, alphabetical by name.
    pub fn all_by_name(&self) -> ServiceResult<Vec<DinnerRecord>> {
        let records = self.store.load_all()?;
        Ok(owned(by_name_ascending(&records)))
    }

    /// All dinners, most recent first.
    pub fn all_by_recency(&self) -> ServiceResult<Vec<DinnerRecord>> {
        let records = self.store.load_all()?;
        Ok(owned(by_recency_descending(&records)))
    }

    /// Distinct ingredients for suggestion lists, in plain string order.
    pub fn ingredient_suggestions(&self) -> ServiceResult<Vec<String>> {
        let records = self.store.load_all()?;
        let mut suggestions = extract_ingredient_set(&records)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        suggestions.sort_unstable();
        Ok(suggestions)
    }

    /// Appends every dinner from a legacy payload. Returns the imported count.
    pub fn import_legacy(&mut self, payload: &str) -> ServiceResult<usize> {
        let imported = import_legacy_json(payload)?;
        let count = imported.len();
        let mut records = self.store.load_all()?;
        records.extend(imported);
        self.store.save_all(&records)?;
        info!(
            "event=legacy_import module=service status=ok imported={} total={}",
            count,
            records.len()
        );
        Ok(count)
    }

    /// Serializes all dinners into the legacy payload shape.
    pub fn export_legacy(&self) -> ServiceResult<String> {
        let records = self.store.load_all()?;
        Ok(export_legacy_json(&records)?)
    }

    fn update_one(
        &mut self,
        id: DinnerId,
        op: &'static str,
        apply: impl FnOnce(&mut DinnerRecord),
    ) -> ServiceResult<DinnerRecord> {
        let mut records = self.store.load_all()?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            info!(
                "event=dinner_update module=service status=error op={op} error_code=not_found dinner_id={id}"
            );
            return Err(ServiceError::DinnerNotFound(id));
        };
        apply(record);
        let updated = record.clone();

        self.store.save_all(&records)?;
        info!("event=dinner_update module=service status=ok op={op} dinner_id={id}");
        Ok(updated)
    }
}

fn owned(records: Vec<&DinnerRecord>) -> Vec<DinnerRecord> {
    records.into_iter().cloned().collect()
}
