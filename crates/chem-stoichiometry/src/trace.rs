// Archivo: trace.rs
// Propósito: construir la traza legible del cálculo. Es sólo presentación:
// ningún valor se relee desde aquí.
use chem_domain::{Product, QuantityUnit, Reactant};

/// Acumula las líneas de la derivación en el orden fijo del cálculo.
#[derive(Debug, Default)]
pub(crate) struct CalculationTrace {
    steps: Vec<String>,
}

impl CalculationTrace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: String) {
        self.steps.push(line);
    }

    pub(crate) fn section(&mut self, title: &str) {
        self.push(title.to_string());
    }

    pub(crate) fn conversion(&mut self, reactant: &Reactant, quantity: f64, unit: &QuantityUnit, moles: f64) {
        let line = match unit {
            QuantityUnit::Grams => {
                format!("{}: {} g ÷ {} g/mol = {:.4} mol", reactant.name, quantity, reactant.molar_mass, moles)
            }
            QuantityUnit::Moles => format!("{}: {} mol = {:.4} mol", reactant.name, quantity, moles),
            QuantityUnit::Milliliters => {
                format!("{}: {} mL × 1 mol/L ÷ 1000 = {:.4} mol", reactant.name, quantity, moles)
            }
            QuantityUnit::Unrecognized(tag) => {
                format!("{}: {} {} (unrecognized unit, taken as moles) = {:.4} mol", reactant.name, quantity, tag, moles)
            }
        };
        self.push(line);
    }

    pub(crate) fn ratio(&mut self, reactant: &Reactant, moles: f64, ratio: f64) {
        self.push(format!("{}: {:.4} mol ÷ {} = {:.4}", reactant.name, moles, reactant.coefficient, ratio));
    }

    pub(crate) fn limiting(&mut self, reactant: &Reactant, tie: bool) {
        if tie {
            self.push(format!("{} is the limiting reagent (equal ratios, first reactant taken)", reactant.name));
        } else {
            self.push(format!("{} is the limiting reagent (smaller ratio)", reactant.name));
        }
    }

    pub(crate) fn product(&mut self, product: &Product, extent: f64, moles: f64, mass: f64) {
        self.push(format!("Calculating {}:", product.name));
        self.push(format!("Moles = {:.4} × {} = {:.4} mol", extent, product.coefficient, moles));
        self.push(format!("Mass = {:.4} mol × {} g/mol = {:.4} g", moles, product.molar_mass, mass));
    }

    pub(crate) fn excess(&mut self, reactant: &Reactant, available: f64, consumed: f64, leftover_moles: f64, leftover_mass: f64) {
        self.push(format!("{} consumed: {:.4} mol of {:.4} mol", reactant.name, consumed, available));
        self.push(format!("{} leftover: {:.4} mol × {} g/mol = {:.4} g",
                          reactant.name, leftover_moles, reactant.molar_mass, leftover_mass));
    }

    pub(crate) fn total_yield(&mut self, theoretical_yield: f64) {
        self.push(format!("Total products mass: {:.4} g", theoretical_yield));
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.steps
    }
}
