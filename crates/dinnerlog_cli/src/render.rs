//! Plain-text rows: `date | name | ingredients  [id]`.

use dinnerlog_core::DinnerRecord;

pub fn dinner_row(record: &DinnerRecord) -> String {
    format!(
        "{} | {} | {}  [{}]",
        record.date,
        record.name,
        record.display_ingredients().join(", "),
        record.id
    )
}

pub fn print_rows(records: &[DinnerRecord]) {
    if records.is_empty() {
        println!("No dinners.");
        return;
    }
    for record in records {
        println!("{}", dinner_row(record));
    }
}
