//! Dinner record domain model.
//!
//! # Responsibility
//! - Define the record shape for one logged meal.
//! - Provide parsing helpers for the raw date and ingredient inputs.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `date` keeps the raw text as entered; parsing never rewrites it.
//! - `ingredients` keep entry order, duplicates and letter case.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid iso date regex"));

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier assigned to a dinner record at creation.
pub type DinnerId = Uuid;

/// One logged dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinnerRecord {
    /// Stable ID used for lookups and edits. Independent of list position.
    pub id: DinnerId,
    /// Dinner name as entered.
    pub name: String,
    /// Calendar date text, expected as `YYYY-MM-DD`. May be malformed.
    pub date: String,
    /// Ingredient entries in entry order.
    pub ingredients: Vec<String>,
}

impl DinnerRecord {
    /// Creates a record with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, date, ingredients)
    }

    /// Creates a record with a caller-provided ID.
    ///
    /// Used by storage read paths where identity already exists.
    pub fn with_id(
        id: DinnerId,
        name: impl Into<String>,
        date: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            ingredients,
        }
    }

    /// Returns the parsed calendar date, or `None` when `date` is malformed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_dinner_date(&self.date)
    }

    /// Exact, case-sensitive membership test.
    pub fn contains_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|entry| entry == ingredient)
    }

    /// Ingredients in display order: plain string order, not locale-aware.
    ///
    /// The stored order is left untouched.
    pub fn display_ingredients(&self) -> Vec<&str> {
        let mut sorted = self
            .ingredients
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        sorted.sort_unstable();
        sorted
    }
}

/// Parses `YYYY-MM-DD` into a calendar date.
///
/// Returns `None` for anything else, including impossible days such as
/// `2023-02-30`. Never panics.
pub fn parse_dinner_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Splits comma-separated form input into trimmed ingredient entries.
///
/// Empty pieces are kept, so blank input yields a single empty entry.
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}
