//! Core domain logic for the dinner log.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::dinner::{parse_dinner_date, parse_ingredient_list, DinnerId, DinnerRecord};
pub use query::ingredient::{extract_ingredient_set, filter_by_ingredient};
pub use query::ordering::{by_name_ascending, by_recency_descending, compare_names};
pub use query::range::{filter_by_date_range, filter_by_range, subtract_calendar_month, DateRange};
pub use service::dinner_service::{DinnerService, ServiceError, ServiceResult};
pub use store::legacy::{export_legacy_json, import_legacy_json, LEGACY_STORAGE_KEY};
pub use store::memory::InMemoryDinnerStore;
pub use store::sqlite::SqliteDinnerStore;
pub use store::{DinnerStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
