// Archivo: units.rs
// Propósito: normalizar una cantidad de entrada a moles.
use chem_domain::QuantityUnit;

/// Concentración fija asumida para entradas en volumen (mol/L).
pub const ASSUMED_MOLARITY: f64 = 1.0;

pub const ML_PER_LITER: f64 = 1000.0;

/// Convierte `quantity` expresada en `unit` a moles.
///
/// - gramos: `quantity / molar_mass`
/// - moles: sin cambios
/// - mL: `quantity / 1000` a 1 mol/L, sin depender de la masa molar
/// - etiqueta no reconocida: se toma como si ya estuviera en moles
///
/// No valida nada: una masa molar cero o negativa produce un valor no
/// finito que el llamador debe rechazar.
pub fn convert_to_moles(quantity: f64, unit: &QuantityUnit, molar_mass: f64) -> f64 {
    match unit {
        QuantityUnit::Grams => quantity / molar_mass,
        QuantityUnit::Moles => quantity,
        QuantityUnit::Milliliters => quantity / ML_PER_LITER * ASSUMED_MOLARITY,
        QuantityUnit::Unrecognized(tag) => {
            log::warn!("unidad no reconocida '{}': se interpreta como moles", tag);
            quantity
        }
    }
}
