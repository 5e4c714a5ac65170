// Archivo: repository.rs
// Propósito: contrato del historial de simulaciones y estadísticas del
// tablero.
use crate::errors::Result;
use crate::record::SimulationRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Estadísticas agregadas del historial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_simulations: usize,
    /// Ecuaciones balanceadas distintas.
    pub unique_reactions: usize,
    /// Suma de los rendimientos teóricos, en gramos.
    pub total_yield: f64,
}

impl HistorySummary {
    pub fn from_records(records: &[SimulationRecord]) -> Self {
        let equations: HashSet<&str> = records.iter().map(|r| r.balanced_equation.as_str()).collect();
        Self { total_simulations: records.len(),
               unique_reactions: equations.len(),
               total_yield: records.iter().map(|r| r.theoretical_yield).sum() }
    }
}

/// Persistencia del historial. El motor nunca lee de aquí.
pub trait HistoryRepository: Send + Sync {
    /// Guarda (o reemplaza por id) un registro y devuelve su id.
    fn save_record(&self, record: SimulationRecord) -> Result<Uuid>;

    fn get_record(&self, id: &Uuid) -> Result<Option<SimulationRecord>>;

    /// Todos los registros, los más recientes primero.
    fn list_records(&self) -> Result<Vec<SimulationRecord>>;

    /// Elimina un registro; `NotFound` si no existe.
    fn delete_record(&self, id: &Uuid) -> Result<()>;

    fn summary(&self) -> Result<HistorySummary> {
        Ok(HistorySummary::from_records(&self.list_records()?))
    }
}

pub(crate) fn newest_first(records: &mut [SimulationRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
