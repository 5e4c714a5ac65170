// selection.rs
use crate::{DomainError, QuantityInput, Reaction};
use serde::{Deserialize, Serialize};

/// Reactivos tal como los elige el usuario: el orden puede no coincidir con
/// el orden A/B de la reacción en el catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactantSelection {
  pub first: String,
  pub first_input: QuantityInput,
  pub second: String,
  pub second_input: QuantityInput,
}

/// Entradas ya reordenadas al orden canónico A/B de la reacción.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedInputs {
  pub input_a: QuantityInput,
  pub input_b: QuantityInput,
  /// `true` cuando el usuario eligió los reactivos en orden inverso.
  pub swapped: bool,
}

impl ReactantSelection {
  pub fn new(first: impl Into<String>,
             first_input: QuantityInput,
             second: impl Into<String>,
             second_input: QuantityInput)
             -> Self {
    Self { first: first.into(), first_input, second: second.into(), second_input }
  }

  /// Reordena las entradas según la reacción. Falla con `NotFound` si la
  /// reacción no corresponde a este par de reactivos.
  pub fn orient(&self, reaction: &Reaction) -> Result<OrientedInputs, DomainError> {
    let a = &reaction.reactant_a.name;
    let b = &reaction.reactant_b.name;
    if *a == self.first && *b == self.second {
      Ok(OrientedInputs { input_a: self.first_input.clone(), input_b: self.second_input.clone(), swapped: false })
    } else if *a == self.second && *b == self.first {
      Ok(OrientedInputs { input_a: self.second_input.clone(), input_b: self.first_input.clone(), swapped: true })
    } else {
      Err(DomainError::NotFound(format!("reaction not found: {} + {}", self.first, self.second)))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Product, Reactant};

  fn reaction() -> Reaction {
    Reaction::new(Reactant::new("Zinc", "Zn", 65.38, 1),
                  Reactant::new("Hydrochloric Acid", "HCl", 36.46, 2),
                  vec![Product::new("Zinc Chloride", "ZnCl2", 136.3, 1, "aq"),
                       Product::new("Hydrogen", "H2", 2.016, 1, "g")],
                  "Zn + 2HCl → ZnCl2 + H2",
                  "Single Displacement")
  }

  #[test]
  fn canonical_order_is_kept() -> Result<(), DomainError> {
    let sel = ReactantSelection::new("Zinc", QuantityInput::grams(6.5), "Hydrochloric Acid", QuantityInput::moles(0.5));
    let oriented = sel.orient(&reaction())?;
    assert!(!oriented.swapped);
    assert_eq!(oriented.input_a, QuantityInput::grams(6.5));
    assert_eq!(oriented.input_b, QuantityInput::moles(0.5));
    Ok(())
  }

  #[test]
  fn reversed_order_is_swapped() -> Result<(), DomainError> {
    let sel = ReactantSelection::new("Hydrochloric Acid", QuantityInput::moles(0.5), "Zinc", QuantityInput::grams(6.5));
    let oriented = sel.orient(&reaction())?;
    assert!(oriented.swapped);
    assert_eq!(oriented.input_a, QuantityInput::grams(6.5));
    assert_eq!(oriented.input_b, QuantityInput::moles(0.5));
    Ok(())
  }

  #[test]
  fn unrelated_pair_is_not_found() {
    let sel = ReactantSelection::new("Zinc", QuantityInput::grams(1.0), "Oxygen", QuantityInput::grams(1.0));
    assert!(matches!(sel.orient(&reaction()), Err(DomainError::NotFound(_))));
  }
}
