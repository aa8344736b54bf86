//! Dinner log domain model.
//!
//! # Responsibility
//! - Define the canonical record consumed by query, ordering and storage.
//! - Parse raw form input (date text, comma-separated ingredients).
//!
//! # Invariants
//! - Every record is identified by a stable `DinnerId`.
//! - Records are never deleted; they are appended and edited in place.

pub mod dinner;
