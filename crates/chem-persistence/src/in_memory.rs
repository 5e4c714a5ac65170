use crate::errors::{PersistenceError, Result};
use crate::record::SimulationRecord;
use crate::repository::{newest_first, HistoryRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Implementación en memoria para tests y desarrollo.
pub struct InMemoryHistoryRepository {
    records: Arc<Mutex<HashMap<Uuid, SimulationRecord>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self { records: Arc::new(Mutex::new(HashMap::new())) }
    }

    // Helper to map poisoned mutex errors into PersistenceError
    fn lock_map<'a, T>(&'a self, m: &'a Mutex<T>, name: &str) -> Result<std::sync::MutexGuard<'a, T>> {
        m.lock()
         .map_err(|e| PersistenceError::Storage(format!("Mutex '{}' poisoned: {}", name, e)))
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn save_record(&self, record: SimulationRecord) -> Result<Uuid> {
        let id = record.id;
        let mut records = self.lock_map(&self.records, "records")?;
        records.insert(id, record);
        log::info!("simulación {} guardada en memoria", id);
        Ok(id)
    }

    fn get_record(&self, id: &Uuid) -> Result<Option<SimulationRecord>> {
        let records = self.lock_map(&self.records, "records")?;
        Ok(records.get(id).cloned())
    }

    fn list_records(&self) -> Result<Vec<SimulationRecord>> {
        let records = self.lock_map(&self.records, "records")?;
        let mut out: Vec<SimulationRecord> = records.values().cloned().collect();
        newest_first(&mut out);
        Ok(out)
    }

    fn delete_record(&self, id: &Uuid) -> Result<()> {
        let mut records = self.lock_map(&self.records, "records")?;
        match records.remove(id) {
            Some(_) => {
                log::info!("simulación {} eliminada", id);
                Ok(())
            }
            None => Err(PersistenceError::NotFound(format!("simulación {}", id))),
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}
