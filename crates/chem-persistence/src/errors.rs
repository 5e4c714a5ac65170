// Archivo: errors.rs
// Propósito: errores del historial de simulaciones y alias Result<T>.
use thiserror::Error;

/// Errores al guardar o recuperar el historial.
///
/// Ninguno invalida un `SimulationResult` ya calculado: el llamador los
/// reporta y sigue adelante.
#[derive(Error, Debug)]
pub enum PersistenceError {
  /// Registro no encontrado.
  #[error("No encontrado: {0}")]
  NotFound(String),
  /// Error genérico de almacenamiento (mutex envenenado, ruta inválida...).
  #[error("Error de almacenamiento: {0}")]
  Storage(String),
  #[error("Error de E/S: {0}")]
  Io(#[from] std::io::Error),
  #[error("Error de serialización: {0}")]
  Serialization(#[from] serde_json::Error),
  /// El hash del registro no coincide con su contenido.
  #[error("Integridad comprometida: {0}")]
  Integrity(String),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, PersistenceError>;
