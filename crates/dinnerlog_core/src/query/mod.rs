//! Pure query and ordering functions over dinner records.
//!
//! # Responsibility
//! - Filter records by trailing date window and by ingredient membership.
//! - Derive the distinct ingredient set.
//! - Provide the two stable orders used by list views.
//!
//! # Invariants
//! - Every function borrows its input and never mutates or clones records.
//! - Filters preserve input order.
//! - No function fails for well-typed input; edge cases resolve to empty or
//!   ordered results.

pub mod ingredient;
pub mod ordering;
pub mod range;
