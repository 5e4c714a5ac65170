use crate::catalog::{InMemoryReactionCatalog, ReactionCatalog};
use crate::{DomainError, Product, Reactant, Reaction};
use once_cell::sync::Lazy;

static SAMPLE_REACTIONS: Lazy<Vec<Reaction>> = Lazy::new(|| {
    vec![Reaction::new(Reactant::new("Sodium Hydroxide", "NaOH", 40.0, 1),
                       Reactant::new("Hydrochloric Acid", "HCl", 36.46, 1),
                       vec![Product::new("Sodium Chloride", "NaCl", 58.44, 1, "aq"),
                            Product::new("Water", "H2O", 18.015, 1, "l")],
                       "NaOH + HCl → NaCl + H2O",
                       "Neutralization").with_enthalpy(-57.3)
                                        .with_observation("La disolución se calienta ligeramente"),
         Reaction::new(Reactant::new("Hydrogen", "H2", 2.016, 2),
                       Reactant::new("Oxygen", "O2", 32.0, 1),
                       vec![Product::new("Water", "H2O", 18.015, 2, "l")],
                       "2H2 + O2 → 2H2O",
                       "Combustion").with_enthalpy(-571.6)
                                    .with_state_changes("g + g → l"),
         Reaction::new(Reactant::new("Methane", "CH4", 16.04, 1),
                       Reactant::new("Oxygen", "O2", 32.0, 2),
                       vec![Product::new("Carbon Dioxide", "CO2", 44.01, 1, "g"),
                            Product::new("Water", "H2O", 18.015, 2, "g")],
                       "CH4 + 2O2 → CO2 + 2H2O",
                       "Combustion").with_enthalpy(-890.3),
         Reaction::new(Reactant::new("Zinc", "Zn", 65.38, 1),
                       Reactant::new("Hydrochloric Acid", "HCl", 36.46, 2),
                       vec![Product::new("Zinc Chloride", "ZnCl2", 136.3, 1, "aq"),
                            Product::new("Hydrogen", "H2", 2.016, 1, "g")],
                       "Zn + 2HCl → ZnCl2 + H2",
                       "Single Displacement").with_enthalpy(-153.9)
                                             .with_observation("Burbujeo de hidrógeno"),
         Reaction::new(Reactant::new("Silver Nitrate", "AgNO3", 169.87, 1),
                       Reactant::new("Sodium Chloride", "NaCl", 58.44, 1),
                       vec![Product::new("Silver Chloride", "AgCl", 143.32, 1, "s"),
                            Product::new("Sodium Nitrate", "NaNO3", 84.99, 1, "aq")],
                       "AgNO3 + NaCl → AgCl + NaNO3",
                       "Precipitation").with_observation("Precipitado blanco de AgCl"),
         Reaction::new(Reactant::new("Calcium Carbonate", "CaCO3", 100.09, 1),
                       Reactant::new("Hydrochloric Acid", "HCl", 36.46, 2),
                       vec![Product::new("Calcium Chloride", "CaCl2", 110.98, 1, "aq"),
                            Product::new("Water", "H2O", 18.015, 1, "l"),
                            Product::new("Carbon Dioxide", "CO2", 44.01, 1, "g")],
                       "CaCO3 + 2HCl → CaCl2 + H2O + CO2",
                       "Acid-Carbonate").with_enthalpy(15.2)]
});

pub struct DomainStubs;

impl DomainStubs {
    /// Reacciones balanceadas de ejemplo.
    pub fn sample_reactions() -> Vec<Reaction> {
        SAMPLE_REACTIONS.clone()
    }

    /// Crea un catálogo en memoria pre-populado con las reacciones de
    /// ejemplo.
    pub fn sample_catalog() -> Result<InMemoryReactionCatalog, DomainError> {
        let catalog = InMemoryReactionCatalog::new();
        for reaction in Self::sample_reactions() {
            catalog.save_reaction(reaction)?;
        }
        Ok(catalog)
    }
}
