// Archivo: file_store.rs
// Propósito: historial persistido en un único documento JSON en disco.
use crate::errors::{PersistenceError, Result};
use crate::record::SimulationRecord;
use crate::repository::{newest_first, HistoryRepository};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

/// Repositorio respaldado por un archivo JSON (`[SimulationRecord, ...]`).
///
/// Cada escritura reescribe el documento completo en un archivo temporal
/// y lo renombra sobre el original. El mutex serializa los accesos dentro
/// del proceso; no hay bloqueo entre procesos.
pub struct JsonFileHistoryRepository {
  path: PathBuf,
  guard: Mutex<()>,
}

impl JsonFileHistoryRepository {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), guard: Mutex::new(()) }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
    self.guard
        .lock()
        .map_err(|e| PersistenceError::Storage(format!("Mutex 'history_file' poisoned: {}", e)))
  }

  fn load(&self) -> Result<Vec<SimulationRecord>> {
    if !self.path.exists() {
      return Ok(Vec::new());
    }
    let text = fs::read_to_string(&self.path)?;
    if text.trim().is_empty() {
      return Ok(Vec::new());
    }
    let records: Vec<SimulationRecord> = serde_json::from_str(&text)?;
    for r in &records {
      if !r.verify_integrity()? {
        log::warn!("el registro {} de {} no supera la verificación de integridad", r.id, self.path.display());
      }
    }
    Ok(records)
  }

  fn store(&self, records: &[SimulationRecord]) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }
    let tmp = self.path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(records)?)?;
    fs::rename(&tmp, &self.path)?;
    log::debug!("historial escrito en {} ({} registros)", self.path.display(), records.len());
    Ok(())
  }
}

impl HistoryRepository for JsonFileHistoryRepository {
  fn save_record(&self, record: SimulationRecord) -> Result<Uuid> {
    let _g = self.lock()?;
    let id = record.id;
    let mut records = self.load()?;
    match records.iter_mut().find(|r| r.id == id) {
      Some(existing) => *existing = record,
      None => records.push(record),
    }
    self.store(&records)?;
    log::info!("simulación {} guardada en {}", id, self.path.display());
    Ok(id)
  }

  /// Un registro cuyo hash no coincide se devuelve como `Integrity`.
  fn get_record(&self, id: &Uuid) -> Result<Option<SimulationRecord>> {
    let _g = self.lock()?;
    match self.load()?.into_iter().find(|r| &r.id == id) {
      Some(r) if !r.verify_integrity()? => {
        Err(PersistenceError::Integrity(format!("simulación {} en {}", id, self.path.display())))
      }
      found => Ok(found),
    }
  }

  fn list_records(&self) -> Result<Vec<SimulationRecord>> {
    let _g = self.lock()?;
    let mut records = self.load()?;
    newest_first(&mut records);
    Ok(records)
  }

  fn delete_record(&self, id: &Uuid) -> Result<()> {
    let _g = self.lock()?;
    let mut records = self.load()?;
    let before = records.len();
    records.retain(|r| &r.id != id);
    if records.len() == before {
      return Err(PersistenceError::NotFound(format!("simulación {}", id)));
    }
    self.store(&records)?;
    log::info!("simulación {} eliminada de {}", id, self.path.display());
    Ok(())
  }
}
