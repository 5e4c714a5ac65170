// reaction.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifica a uno de los dos reactivos de una reacción en su orden
/// canónico del catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReagentSide {
  A,
  B,
}

impl ReagentSide {
  pub fn other(self) -> Self {
    match self {
      Self::A => Self::B,
      Self::B => Self::A,
    }
  }
}

impl fmt::Display for ReagentSide {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::A => f.write_str("A"),
      Self::B => f.write_str("B"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reactant {
  pub name: String,
  pub formula: String,
  /// g/mol
  pub molar_mass: f64,
  pub coefficient: u32,
}

impl Reactant {
  pub fn new(name: impl Into<String>, formula: impl Into<String>, molar_mass: f64, coefficient: u32) -> Self {
    Self { name: name.into(), formula: formula.into(), molar_mass, coefficient }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub name: String,
  pub formula: String,
  /// g/mol
  pub molar_mass: f64,
  pub coefficient: u32,
  /// Estado físico ("aq", "l", "g", "s"). Sólo para presentación.
  #[serde(default)]
  pub state: String,
}

impl Product {
  pub fn new(name: impl Into<String>,
             formula: impl Into<String>,
             molar_mass: f64,
             coefficient: u32,
             state: impl Into<String>)
             -> Self {
    Self { name: name.into(), formula: formula.into(), molar_mass, coefficient, state: state.into() }
  }
}

/// Reacción ya balanceada tal como la entrega el catálogo.
///
/// Los campos son públicos porque el registro es un DTO inmutable que llega
/// de fuera; `validate` existe para el catálogo, el motor estequiométrico
/// nunca lo invoca.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
  pub id: Uuid,
  pub reactant_a: Reactant,
  pub reactant_b: Reactant,
  pub products: Vec<Product>,
  pub balanced_equation: String,
  pub reaction_type: String,
  /// kJ/mol; negativo = exotérmica.
  pub enthalpy_kj: Option<f64>,
  pub observation: Option<String>,
  pub state_changes: Option<String>,
}

impl Reaction {
  pub fn new(reactant_a: Reactant,
             reactant_b: Reactant,
             products: Vec<Product>,
             balanced_equation: impl Into<String>,
             reaction_type: impl Into<String>)
             -> Self {
    Self { id: Uuid::new_v4(),
           reactant_a,
           reactant_b,
           products,
           balanced_equation: balanced_equation.into(),
           reaction_type: reaction_type.into(),
           enthalpy_kj: None,
           observation: None,
           state_changes: None }
  }

  pub fn with_enthalpy(mut self, enthalpy_kj: f64) -> Self {
    self.enthalpy_kj = Some(enthalpy_kj);
    self
  }

  pub fn with_observation(mut self, observation: impl Into<String>) -> Self {
    self.observation = Some(observation.into());
    self
  }

  pub fn with_state_changes(mut self, state_changes: impl Into<String>) -> Self {
    self.state_changes = Some(state_changes.into());
    self
  }

  pub fn reactant(&self, side: ReagentSide) -> &Reactant {
    match side {
      ReagentSide::A => &self.reactant_a,
      ReagentSide::B => &self.reactant_b,
    }
  }

  pub fn is_exothermic(&self) -> bool {
    self.enthalpy_kj.is_some_and(|h| h < 0.0)
  }

  pub fn involves(&self, name: &str) -> bool {
    self.reactant_a.name == name || self.reactant_b.name == name
  }

  /// `true` si el par de nombres corresponde a los reactivos, en cualquier
  /// orden.
  pub fn matches_pair(&self, first: &str, second: &str) -> bool {
    (self.reactant_a.name == first && self.reactant_b.name == second)
    || (self.reactant_a.name == second && self.reactant_b.name == first)
  }

  pub fn validate(&self) -> Result<(), DomainError> {
    for (label, r) in [("A", &self.reactant_a), ("B", &self.reactant_b)] {
      if r.name.trim().is_empty() {
        return Err(DomainError::ValidationError(format!("El reactivo {} no tiene nombre", label)));
      }
      check_molar_mass(&r.name, r.molar_mass)?;
      if r.coefficient == 0 {
        return Err(DomainError::ValidationError(format!("El coeficiente de {} debe ser positivo", r.name)));
      }
    }
    if self.reactant_a.name == self.reactant_b.name {
      return Err(DomainError::ValidationError(format!("Los dos reactivos no pueden ser el mismo: {}",
                                                      self.reactant_a.name)));
    }
    if self.products.is_empty() {
      return Err(DomainError::ValidationError("Una reacción debe tener al menos un producto".to_string()));
    }
    for p in &self.products {
      if p.name.trim().is_empty() {
        return Err(DomainError::ValidationError("Producto sin nombre".to_string()));
      }
      check_molar_mass(&p.name, p.molar_mass)?;
      if p.coefficient == 0 {
        return Err(DomainError::ValidationError(format!("El coeficiente de {} debe ser positivo", p.name)));
      }
    }
    Ok(())
  }
}

fn check_molar_mass(name: &str, molar_mass: f64) -> Result<(), DomainError> {
  if !molar_mass.is_finite() || molar_mass <= 0.0 {
    return Err(DomainError::ValidationError(format!("Masa molar inválida para {}: {}", name, molar_mass)));
  }
  Ok(())
}

impl fmt::Display for Reaction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} [{}]", self.balanced_equation, self.reaction_type)
  }
}
