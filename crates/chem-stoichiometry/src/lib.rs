//! Crate `chem-stoichiometry`: motor estequiométrico puro.
//!
//! Dada una reacción balanceada y dos cantidades de reactivo (en gramos,
//! moles o mL de disolución 1 mol/L) calcula:
//! - los moles de cada reactivo (`convert_to_moles`),
//! - el reactivo limitante por comparación de `moles / coeficiente`,
//! - moles y masa de cada producto y el rendimiento teórico,
//! - lo que sobra del reactivo en exceso,
//! - una traza textual de la derivación.
//!
//! El motor no valida, no hace I/O y no guarda estado: dos llamadas con las
//! mismas entradas devuelven resultados idénticos.
//!
//! Ejemplo rápido:
//! ```rust
//! use chem_domain::{Product, QuantityInput, Reactant, Reaction, ReagentSide};
//! use chem_stoichiometry::calculate_stoichiometry;
//! let reaction = Reaction::new(Reactant::new("Base", "NaOH", 40.0, 1),
//!                              Reactant::new("Acid", "HCl", 36.5, 1),
//!                              vec![Product::new("Salt", "NaCl", 58.5, 1, "aq")],
//!                              "NaOH + HCl → NaCl + H2O",
//!                              "Neutralization");
//! let result = calculate_stoichiometry(&reaction, &QuantityInput::grams(80.0), &QuantityInput::grams(36.5));
//! assert_eq!(result.limiting_reagent, ReagentSide::B);
//! ```
pub mod engine;
pub mod result;
mod trace;
pub mod units;

pub use engine::calculate_stoichiometry;
pub use result::{ExcessReagent, InputRecord, ProductFormed, SimulationResult};
pub use units::{convert_to_moles, ASSUMED_MOLARITY, ML_PER_LITER};
