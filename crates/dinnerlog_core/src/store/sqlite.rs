//! SQLite-backed record store.
//!
//! # Responsibility
//! - Persist the dinner sequence and per-record ingredient lists.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - `save_all` runs in one immediate transaction; readers never observe a
//!   partially written sequence.
//! - `load_all` orders dinners by `position` and ingredients by `ordinal`.
//! - Read paths reject invalid persisted ids instead of masking them.

use crate::db::schema::{current_user_version, SCHEMA_VERSION};
use crate::model::dinner::{DinnerId, DinnerRecord};
use crate::store::{DinnerStore, StoreError, StoreResult};
use log::debug;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use uuid::Uuid;

/// Record store over a schema-ready SQLite connection.
pub struct SqliteDinnerStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteDinnerStore<'conn> {
    /// Wraps a connection returned by `db::open_db` / `db::open_db_in_memory`.
    ///
    /// # Errors
    /// - `StoreError::UninitializedConnection` when the schema version does
    ///   not match.
    pub fn try_new(conn: &'conn mut Connection) -> StoreResult<Self> {
        let actual_version = current_user_version(conn)?;
        if actual_version != SCHEMA_VERSION {
            return Err(StoreError::UninitializedConnection {
                expected_version: SCHEMA_VERSION,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl DinnerStore for SqliteDinnerStore<'_> {
    fn load_all(&self) -> StoreResult<Vec<DinnerRecord>> {
        let mut ingredients = load_ingredients(self.conn)?;
        let mut stmt = self.conn.prepare(
            "SELECT
                uuid,
                name,
                date
             FROM dinners
             ORDER BY position ASC, uuid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("uuid")?;
            let id = parse_uuid(&uuid_text)?;
            records.push(DinnerRecord::with_id(
                id,
                row.get::<_, String>("name")?,
                row.get::<_, String>("date")?,
                ingredients.remove(&uuid_text).unwrap_or_default(),
            ));
        }

        Ok(records)
    }

    fn save_all(&mut self, records: &[DinnerRecord]) -> StoreResult<()> {
        let started_at = Instant::now();
        let incoming = records
            .iter()
            .map(|record| record.id.to_string())
            .collect::<HashSet<_>>();
        if incoming.len() != records.len() {
            return Err(StoreError::InvalidData(
                "save set contains duplicate dinner ids".to_string(),
            ));
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let removed = existing_ids(&tx)?
            .into_iter()
            .filter(|uuid| !incoming.contains(uuid))
            .collect::<Vec<_>>();
        for uuid in &removed {
            tx.execute("DELETE FROM dinners WHERE uuid = ?1;", [uuid.as_str()])?;
        }

        for (position, record) in records.iter().enumerate() {
            write_record(&tx, position, record)?;
        }

        tx.commit()?;
        debug!(
            "event=dinners_save module=store status=ok count={} removed={} duration_ms={}",
            records.len(),
            removed.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn write_record(tx: &Transaction<'_>, position: usize, record: &DinnerRecord) -> StoreResult<()> {
    let uuid = record.id.to_string();
    tx.execute(
        "INSERT INTO dinners (uuid, position, name, date)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(uuid) DO UPDATE SET
            position = excluded.position,
            name = excluded.name,
            date = excluded.date;",
        params![
            uuid.as_str(),
            to_db_index(position)?,
            record.name.as_str(),
            record.date.as_str(),
        ],
    )?;

    tx.execute(
        "DELETE FROM dinner_ingredients WHERE dinner_uuid = ?1;",
        [uuid.as_str()],
    )?;
    for (ordinal, ingredient) in record.ingredients.iter().enumerate() {
        tx.execute(
            "INSERT INTO dinner_ingredients (dinner_uuid, ordinal, ingredient)
             VALUES (?1, ?2, ?3);",
            params![uuid.as_str(), to_db_index(ordinal)?, ingredient.as_str()],
        )?;
    }

    Ok(())
}

fn load_ingredients(conn: &Connection) -> StoreResult<HashMap<String, Vec<String>>> {
    let mut stmt = conn.prepare(
        "SELECT dinner_uuid, ingredient
         FROM dinner_ingredients
         ORDER BY dinner_uuid ASC, ordinal ASC;",
    )?;
    let mut rows = stmt.query([])?;
    let mut by_dinner: HashMap<String, Vec<String>> = HashMap::new();
    while let Some(row) = rows.next()? {
        let uuid: String = row.get(0)?;
        let ingredient: String = row.get(1)?;
        by_dinner.entry(uuid).or_default().push(ingredient);
    }
    Ok(by_dinner)
}

fn existing_ids(tx: &Transaction<'_>) -> StoreResult<Vec<String>> {
    let mut stmt = tx.prepare("SELECT uuid FROM dinners;")?;
    let mut rows = stmt.query([])?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next()? {
        ids.push(row.get::<_, String>(0)?);
    }
    Ok(ids)
}

fn parse_uuid(value: &str) -> StoreResult<DinnerId> {
    Uuid::parse_str(value).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{value}` in dinners.uuid"))
    })
}

fn to_db_index(value: usize) -> StoreResult<i64> {
    i64::try_from(value)
        .map_err(|_| StoreError::InvalidData(format!("index {value} exceeds sqlite integer range")))
}
