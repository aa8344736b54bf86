//! `Vec`-backed store for tests and embedding.

use crate::model::dinner::DinnerRecord;
use crate::store::{DinnerStore, StoreResult};

/// In-memory record store. Holds a full copy of the last saved sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDinnerStore {
    records: Vec<DinnerRecord>,
}

impl InMemoryDinnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<DinnerRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DinnerStore for InMemoryDinnerStore {
    fn load_all(&self) -> StoreResult<Vec<DinnerRecord>> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[DinnerRecord]) -> StoreResult<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
