//! Crate `chem-playback`: reproducción del progreso de una reacción ya
//! calculada.
//!
//! El cálculo estequiométrico termina por completo antes de que empiece la
//! reproducción; este crate sólo consume un `SimulationResult` y un
//! porcentaje (0–100) y devuelve los valores a dibujar. El porcentaje sale
//! de `ProgressSchedule`, una función pura del tiempo transcurrido.
pub mod frame;
pub mod schedule;

pub use frame::{Playback, ReactionFrame};
pub use schedule::ProgressSchedule;
