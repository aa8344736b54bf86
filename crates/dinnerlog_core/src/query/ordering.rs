//! Stable list orders: most recent first, and alphabetical by name.
//!
//! # Invariants
//! - Both orders are stable: records with equal keys keep input order.
//! - Malformed dates rank as the earliest possible date.
//! - Names compare with the CLDR root collation (Unicode Collation
//!   Algorithm), punctuation non-ignorable, no code-point tie-break.

use crate::model::dinner::DinnerRecord;
use chrono::NaiveDate;
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, false)
}

/// Compares two names with the collation used by [`by_name_ascending`].
pub fn compare_names(left: &str, right: &str) -> Ordering {
    name_collator().collate(left, right)
}

/// Returns records ordered by date, most recent first.
pub fn by_recency_descending<'a, I>(records: I) -> Vec<&'a DinnerRecord>
where
    I: IntoIterator<Item = &'a DinnerRecord>,
{
    let mut keyed = records
        .into_iter()
        .map(|record| (record.calendar_date(), record))
        .collect::<Vec<(Option<NaiveDate>, &DinnerRecord)>>();
    // `None < Some(_)`, so malformed dates land last.
    keyed.sort_by(|(left, _), (right, _)| right.cmp(left));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Returns records ordered by name, ascending.
pub fn by_name_ascending<'a, I>(records: I) -> Vec<&'a DinnerRecord>
where
    I: IntoIterator<Item = &'a DinnerRecord>,
{
    let mut collator = name_collator();
    let mut sorted = records.into_iter().collect::<Vec<_>>();
    sorted.sort_by(|left, right| collator.collate(left.name.as_str(), right.name.as_str()));
    sorted
}
