// Archivo: simulator.rs
// Propósito: `SimulatorService`, la capa que invoca al motor: busca la
// reacción, valida entradas, las ordena como A/B, calcula y guarda el
// historial.
use crate::config::WorkflowConfig;
use crate::errors::WorkflowError;
use chem_domain::{QuantityInput, ReactantSelection, ReactionCatalog};
use chem_persistence::{HistoryRepository, HistorySummary, SimulationRecord};
use chem_playback::Playback;
use chem_stoichiometry::{calculate_stoichiometry, SimulationResult};
use rayon::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

/// Servicio de alto nivel del simulador.
///
/// Orquesta el catálogo, el motor y el historial. El motor se llama sólo con
/// entradas ya validadas y en orden canónico.
pub struct SimulatorService {
    catalog: Arc<dyn ReactionCatalog>,
    history: Arc<dyn HistoryRepository>,
    config: WorkflowConfig,
}

impl SimulatorService {
    pub fn new(catalog: Arc<dyn ReactionCatalog>, history: Arc<dyn HistoryRepository>, config: WorkflowConfig) -> Self {
        Self { catalog, history, config }
    }

    /// Crea el servicio con el historial que indique `config.history_path`.
    pub fn with_config(catalog: Arc<dyn ReactionCatalog>, config: WorkflowConfig) -> Self {
        let history = chem_persistence::new_history_repo(config.history_path.as_deref());
        Self::new(catalog, history, config)
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Todos los reactivos del catálogo, ordenados.
    pub fn available_reactants(&self) -> Result<Vec<String>, WorkflowError> {
        Ok(self.catalog.unique_reactants()?)
    }

    /// Reactivos que pueden combinarse con `name`.
    pub fn compatible_reactants(&self, name: &str) -> Result<Vec<String>, WorkflowError> {
        Ok(self.catalog.compatible_reactants(name)?)
    }

    /// Ejecuta una simulación completa para la selección del usuario.
    pub fn simulate(&self, selection: &ReactantSelection) -> Result<SimulationResult, WorkflowError> {
        let reaction = self.catalog
                           .find_by_reactants(&selection.first, &selection.second)?
                           .ok_or_else(|| WorkflowError::ReactionNotFound { first: selection.first.clone(),
                                                                             second: selection.second.clone() })?;
        self.check_input(&selection.first, &selection.first_input)?;
        self.check_input(&selection.second, &selection.second_input)?;

        let oriented = selection.orient(&reaction)?;
        if oriented.swapped {
            log::debug!("entradas invertidas al orden A/B de '{}'", reaction.balanced_equation);
        }
        let result = calculate_stoichiometry(&reaction, &oriented.input_a, &oriented.input_b);
        log::info!("simulación '{}': limitante {}, rendimiento {:.4} g",
                   reaction.balanced_equation,
                   result.limiting_reagent_name(),
                   result.theoretical_yield);
        Ok(result)
    }

    /// Simula varias selecciones independientes en paralelo. El resultado
    /// conserva el orden de entrada.
    pub fn simulate_batch(&self, selections: &[ReactantSelection]) -> Vec<Result<SimulationResult, WorkflowError>> {
        selections.par_iter().map(|s| self.simulate(s)).collect()
    }

    fn check_input(&self, name: &str, input: &QuantityInput) -> Result<(), WorkflowError> {
        input.validate()
             .map_err(|_| WorkflowError::InvalidQuantity(format!("{}: {}", name, input)))?;
        if !input.unit.is_recognized() && !self.config.allow_unrecognized_units {
            return Err(WorkflowError::UnsupportedUnit(format!("{} ({})", input.unit, name)));
        }
        Ok(())
    }

    /// Guarda el resultado en el historial. Un fallo aquí no afecta al
    /// resultado, que el llamador conserva.
    pub fn save(&self, result: &SimulationResult) -> Result<Uuid, WorkflowError> {
        let record = SimulationRecord::from_result(result)?;
        let id = self.history.save_record(record).map_err(|e| {
                                                     log::warn!("no se pudo guardar la simulación: {}", e);
                                                     e
                                                 })?;
        Ok(id)
    }

    pub fn history(&self) -> Result<Vec<SimulationRecord>, WorkflowError> {
        Ok(self.history.list_records()?)
    }

    pub fn history_entry(&self, id: &Uuid) -> Result<Option<SimulationRecord>, WorkflowError> {
        Ok(self.history.get_record(id)?)
    }

    pub fn delete_history(&self, id: &Uuid) -> Result<(), WorkflowError> {
        Ok(self.history.delete_record(id)?)
    }

    pub fn summary(&self) -> Result<HistorySummary, WorkflowError> {
        Ok(self.history.summary()?)
    }

    /// Reproducción del resultado con el calendario configurado.
    pub fn playback<'a>(&self, result: &'a SimulationResult) -> Playback<'a> {
        Playback::new(result, self.config.schedule)
    }
}
