//! Persistencia del historial de simulaciones.
//! Expone la proyección `SimulationRecord`, el contrato `HistoryRepository`
//! y dos implementaciones: en memoria y en un archivo JSON. La selección
//! por entorno está en `new_history_repo_from_env`.

mod errors;
mod file_store;
mod in_memory;
mod record;
mod repository;

pub use errors::{PersistenceError, Result};
pub use file_store::JsonFileHistoryRepository;
pub use in_memory::InMemoryHistoryRepository;
pub use record::{LeftoverReagent, SimulationRecord};
pub use repository::{HistoryRepository, HistorySummary};

use std::path::Path;
use std::sync::Arc;

/// Variable de entorno con la ruta del historial en disco.
pub const HISTORY_PATH_ENV: &str = "STOICHSIM_HISTORY_PATH";

/// Repositorio en archivo si hay ruta, en memoria si no.
pub fn new_history_repo(path: Option<&Path>) -> Arc<dyn HistoryRepository> {
  match path {
    Some(p) => {
      log::info!("historial en archivo: {}", p.display());
      Arc::new(JsonFileHistoryRepository::new(p))
    }
    None => {
      log::warn!("{} no definido; el historial se guarda sólo en memoria", HISTORY_PATH_ENV);
      Arc::new(InMemoryHistoryRepository::new())
    }
  }
}

/// Crear repo desde las variables de entorno (carga `.env` si existe).
pub fn new_history_repo_from_env() -> Result<Arc<dyn HistoryRepository>> {
  dotenvy::dotenv().ok();
  match std::env::var(HISTORY_PATH_ENV) {
    Ok(p) if p.trim().is_empty() => {
      Err(PersistenceError::Storage(format!("{} está definido pero vacío", HISTORY_PATH_ENV)))
    }
    Ok(p) => Ok(new_history_repo(Some(Path::new(p.trim())))),
    Err(_) => Ok(new_history_repo(None)),
  }
}
