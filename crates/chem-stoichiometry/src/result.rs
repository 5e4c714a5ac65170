// Archivo: result.rs
// Propósito: tipos del resultado de una simulación estequiométrica.
use chem_domain::{QuantityUnit, Reaction, ReagentSide};
use serde::{Deserialize, Serialize};

/// Entrada original de un reactivo junto con sus moles derivados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub quantity: f64,
    pub unit: QuantityUnit,
    pub moles: f64,
}

/// Lo que queda del reactivo en exceso al agotarse el limitante.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcessReagent {
    pub name: String,
    pub leftover_moles: f64,
    pub leftover_mass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFormed {
    pub name: String,
    pub formula: String,
    pub moles: f64,
    pub mass: f64,
    pub coefficient: u32,
}

/// Resultado completo de `calculate_stoichiometry`. Se construye de una
/// sola vez y no se modifica después.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub reaction: Reaction,
    pub input_a: InputRecord,
    pub input_b: InputRecord,
    pub limiting_reagent: ReagentSide,
    pub excess_reagent: ExcessReagent,
    pub products_formed: Vec<ProductFormed>,
    /// Suma de las masas de `products_formed`, en gramos.
    pub theoretical_yield: f64,
    pub calculation_steps: Vec<String>,
}

impl SimulationResult {
    pub fn input(&self, side: ReagentSide) -> &InputRecord {
        match side {
            ReagentSide::A => &self.input_a,
            ReagentSide::B => &self.input_b,
        }
    }

    pub fn excess_side(&self) -> ReagentSide {
        self.limiting_reagent.other()
    }

    pub fn limiting_reagent_name(&self) -> &str {
        &self.reaction.reactant(self.limiting_reagent).name
    }

    /// Moles del reactivo divididos por su coeficiente estequiométrico.
    pub fn extent_ratio(&self, side: ReagentSide) -> f64 {
        self.input(side).moles / f64::from(self.reaction.reactant(side).coefficient)
    }

    /// Avance limitante: la razón del reactivo limitante.
    pub fn limiting_extent(&self) -> f64 {
        self.extent_ratio(self.limiting_reagent)
    }
}
