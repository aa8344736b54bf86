//! Ingredient membership filter and ingredient set extraction.

use crate::model::dinner::DinnerRecord;
use std::collections::HashSet;

/// Filters records containing `ingredient` as an exact, case-sensitive entry.
///
/// The query is not trimmed here. An empty query matches only records that
/// hold an empty-string entry.
pub fn filter_by_ingredient<'a, I>(records: I, ingredient: &str) -> Vec<&'a DinnerRecord>
where
    I: IntoIterator<Item = &'a DinnerRecord>,
{
    records
        .into_iter()
        .filter(|record| record.contains_ingredient(ingredient))
        .collect()
}

/// Collects the distinct ingredient entries across all records.
///
/// Iteration order of the returned set is unspecified.
pub fn extract_ingredient_set<'a, I>(records: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = &'a DinnerRecord>,
{
    records
        .into_iter()
        .flat_map(|record| record.ingredients.iter().map(String::as_str))
        .collect()
}
