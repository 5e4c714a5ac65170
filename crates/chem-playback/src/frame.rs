// Archivo: frame.rs
// Propósito: valores de presentación de una simulación en un porcentaje de
// progreso dado. Sólo lee el `SimulationResult`; nada vuelve al motor.
use crate::schedule::{ProgressSchedule, COMPLETE};
use chem_stoichiometry::SimulationResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const LIQUID_BASE: f64 = 30.0;
const LIQUID_RISE: f64 = 40.0;

/// Instantánea de la animación de la reacción.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionFrame {
  pub progress: f64,
  /// % restante del reactivo A.
  pub reactant_a_remaining: f64,
  /// % restante del reactivo B.
  pub reactant_b_remaining: f64,
  /// % formado de cada producto (todos avanzan juntos).
  pub product_formed: f64,
  /// Altura del líquido en el vaso, en % del alto.
  pub liquid_level: f64,
  pub reacting: bool,
  pub exothermic: bool,
}

impl ReactionFrame {
  pub fn at(result: &SimulationResult, progress: f64) -> Self {
    let progress = ProgressSchedule::clamp_requested(progress);
    let limiting_remaining = remaining(progress, 1.0);
    let excess_remaining = remaining(progress, consumed_fraction(result));
    let (reactant_a_remaining, reactant_b_remaining) = match result.limiting_reagent {
      chem_domain::ReagentSide::A => (limiting_remaining, excess_remaining),
      chem_domain::ReagentSide::B => (excess_remaining, limiting_remaining),
    };
    Self { progress,
           reactant_a_remaining,
           reactant_b_remaining,
           product_formed: progress,
           liquid_level: LIQUID_BASE + progress / COMPLETE * LIQUID_RISE,
           reacting: progress > 0.0 && progress < COMPLETE,
           exothermic: result.reaction.is_exothermic() }
  }
}

// Fracción del reactivo en exceso que se consume al 100 %.
fn consumed_fraction(result: &SimulationResult) -> f64 {
  let excess_ratio = result.extent_ratio(result.excess_side());
  let fraction = result.limiting_extent() / excess_ratio;
  if excess_ratio > 0.0 && fraction.is_finite() {
    fraction.clamp(0.0, 1.0)
  } else {
    1.0
  }
}

fn remaining(progress: f64, fraction: f64) -> f64 {
  (COMPLETE - progress * fraction).max(0.0)
}

/// Reproducción de un resultado ya calculado con un calendario dado.
#[derive(Debug, Clone, Copy)]
pub struct Playback<'a> {
  result: &'a SimulationResult,
  schedule: ProgressSchedule,
}

impl<'a> Playback<'a> {
  pub fn new(result: &'a SimulationResult, schedule: ProgressSchedule) -> Self {
    Self { result, schedule }
  }

  pub fn schedule(&self) -> &ProgressSchedule {
    &self.schedule
  }

  pub fn result(&self) -> &SimulationResult {
    self.result
  }

  pub fn frame_at(&self, elapsed: Duration) -> ReactionFrame {
    ReactionFrame::at(self.result, self.schedule.progress_at(elapsed))
  }

  /// Fotogramas en cada paso del calendario, de 0 a 100 %.
  pub fn frames(&self) -> impl Iterator<Item = ReactionFrame> + 'a {
    let result = self.result;
    self.schedule.percentages().map(move |p| ReactionFrame::at(result, p))
  }

  /// Los resultados detallados se muestran sólo al completar la reproducción.
  pub fn results_visible(&self, progress: f64) -> bool {
    ProgressSchedule::is_complete(progress)
  }
}
