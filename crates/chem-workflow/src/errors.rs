use thiserror::Error;

// Errores comunes del simulador.
//
// Centraliza los fallos del lado del llamador: búsqueda en el catálogo,
// validación de entradas, configuración y persistencia del historial. El
// motor estequiométrico no produce errores propios.
#[derive(Error, Debug)]
pub enum WorkflowError {
  /// Errores originados por el dominio (catálogo, validaciones).
  #[error("Error de dominio: {0}")]
  Domain(#[from] chem_domain::DomainError),

  /// Errores al guardar o leer el historial. No invalidan un resultado ya
  /// calculado.
  #[error("Error de persistencia: {0}")]
  Persistence(#[from] chem_persistence::PersistenceError),

  /// El par de reactivos no existe en el catálogo.
  #[error("Reacción no encontrada: {first} + {second}")]
  ReactionNotFound { first: String, second: String },

  /// Cantidad no positiva o no numérica.
  #[error("Cantidad inválida: {0}")]
  InvalidQuantity(String),

  /// Unidad no reconocida y no permitida por la configuración.
  #[error("Unidad no soportada: {0}")]
  UnsupportedUnit(String),

  /// Errores de validación de la configuración.
  #[error("Error de validacion: {0}")]
  Validation(String),
}
