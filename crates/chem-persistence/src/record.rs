// Archivo: record.rs
// Propósito: proyección aplanada de un `SimulationResult` para el historial.
use crate::errors::Result;
use chem_stoichiometry::{ProductFormed, SimulationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Reactivo sobrante tal como se guarda: sólo nombre y masa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeftoverReagent {
  pub name: String,
  pub mass: f64,
}

/// Entrada del historial de simulaciones.
///
/// `content_hash` es SHA-256 sobre el resto del registro serializado;
/// `verify_integrity` lo recalcula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
  pub id: Uuid,
  pub reaction_id: Option<Uuid>,
  pub reactant_a: String,
  pub reactant_b: String,
  pub reactant_a_quantity: f64,
  pub reactant_b_quantity: f64,
  pub reactant_a_unit: String,
  pub reactant_b_unit: String,
  pub balanced_equation: String,
  pub limiting_reagent: String,
  pub products_formed: Vec<ProductFormed>,
  pub leftover_reagent: Option<LeftoverReagent>,
  pub theoretical_yield: f64,
  pub reaction_type: String,
  pub observation: Option<String>,
  pub calculation_steps: Vec<String>,
  pub created_at: DateTime<Utc>,
  #[serde(default)]
  pub content_hash: String,
}

impl SimulationRecord {
  pub fn from_result(result: &SimulationResult) -> Result<Self> {
    let reaction = &result.reaction;
    let mut record = Self { id: Uuid::new_v4(),
                            reaction_id: Some(reaction.id),
                            reactant_a: reaction.reactant_a.name.clone(),
                            reactant_b: reaction.reactant_b.name.clone(),
                            reactant_a_quantity: result.input_a.quantity,
                            reactant_b_quantity: result.input_b.quantity,
                            reactant_a_unit: result.input_a.unit.tag().to_string(),
                            reactant_b_unit: result.input_b.unit.tag().to_string(),
                            balanced_equation: reaction.balanced_equation.clone(),
                            limiting_reagent: result.limiting_reagent_name().to_string(),
                            products_formed: result.products_formed.clone(),
                            leftover_reagent: Some(LeftoverReagent { name: result.excess_reagent.name.clone(),
                                                                     mass: result.excess_reagent.leftover_mass }),
                            theoretical_yield: result.theoretical_yield,
                            reaction_type: reaction.reaction_type.clone(),
                            observation: reaction.observation.clone(),
                            calculation_steps: result.calculation_steps.clone(),
                            created_at: Utc::now(),
                            content_hash: String::new() };
    record.content_hash = record.compute_hash()?;
    Ok(record)
  }

  fn compute_hash(&self) -> Result<String> {
    let mut unsigned = self.clone();
    unsigned.content_hash.clear();
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(&unsigned)?);
    Ok(format!("{:x}", hasher.finalize()))
  }

  pub fn verify_integrity(&self) -> Result<bool> {
    Ok(self.compute_hash()? == self.content_hash)
  }

  /// Recalcula `content_hash` tras editar el registro a propósito.
  pub fn reseal(&mut self) -> Result<()> {
    self.content_hash = self.compute_hash()?;
    Ok(())
  }
}
