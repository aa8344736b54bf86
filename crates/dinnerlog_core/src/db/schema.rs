//! Single-version schema bootstrap.
//!
//! # Invariants
//! - A fresh database (`user_version = 0`) gets the full schema in one
//!   transaction.
//! - Any version other than `0` or [`SCHEMA_VERSION`] is rejected; there is
//!   no upgrade path.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the schema when missing and verifies the stored version.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    match current_user_version(conn)? {
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(SCHEMA_SQL)?;
            tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
            tx.commit()?;
            Ok(())
        }
        SCHEMA_VERSION => Ok(()),
        other => Err(DbError::UnsupportedSchemaVersion {
            db_version: other,
            supported: SCHEMA_VERSION,
        }),
    }
}

/// Reads `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
