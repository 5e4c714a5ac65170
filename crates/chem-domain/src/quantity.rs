// quantity.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Unidad en la que el usuario expresa la cantidad de un reactivo.
///
/// Se serializa como su etiqueta de texto (`"grams"`, `"moles"`, `"mL"`).
/// Una etiqueta desconocida se conserva en `Unrecognized` en lugar de
/// fallar: la decisión de aceptarla o rechazarla pertenece al llamador.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuantityUnit {
  /// Masa en gramos.
  Grams,
  /// Cantidad de sustancia en moles.
  Moles,
  /// Volumen en mililitros de una disolución 1 mol/L.
  Milliliters,
  /// Cualquier otra etiqueta.
  Unrecognized(String),
}

impl QuantityUnit {
  pub fn parse(tag: &str) -> Self {
    let trimmed = tag.trim();
    match trimmed.to_lowercase().as_str() {
      "grams" | "gram" | "g" => Self::Grams,
      "moles" | "mole" | "mol" => Self::Moles,
      "ml" | "milliliters" | "millilitres" => Self::Milliliters,
      _ => Self::Unrecognized(trimmed.to_string()),
    }
  }

  /// Etiqueta canónica, la misma que se persiste.
  pub fn tag(&self) -> &str {
    match self {
      Self::Grams => "grams",
      Self::Moles => "moles",
      Self::Milliliters => "mL",
      Self::Unrecognized(tag) => tag,
    }
  }

  /// Símbolo corto usado en las trazas de cálculo.
  pub fn symbol(&self) -> &str {
    match self {
      Self::Grams => "g",
      Self::Moles => "mol",
      Self::Milliliters => "mL",
      Self::Unrecognized(tag) => tag,
    }
  }

  pub fn is_recognized(&self) -> bool {
    !matches!(self, Self::Unrecognized(_))
  }
}

impl FromStr for QuantityUnit {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::parse(s))
  }
}

impl From<String> for QuantityUnit {
  fn from(tag: String) -> Self {
    Self::parse(&tag)
  }
}

impl From<QuantityUnit> for String {
  fn from(unit: QuantityUnit) -> Self {
    unit.tag().to_string()
  }
}

impl fmt::Display for QuantityUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}

/// Par (cantidad, unidad) introducido para un reactivo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityInput {
  pub quantity: f64,
  pub unit: QuantityUnit,
}

impl QuantityInput {
  pub fn new(quantity: f64, unit: QuantityUnit) -> Self {
    Self { quantity, unit }
  }

  pub fn grams(quantity: f64) -> Self {
    Self::new(quantity, QuantityUnit::Grams)
  }

  pub fn moles(quantity: f64) -> Self {
    Self::new(quantity, QuantityUnit::Moles)
  }

  pub fn milliliters(quantity: f64) -> Self {
    Self::new(quantity, QuantityUnit::Milliliters)
  }

  /// La cantidad debe ser un número finito y estrictamente positivo.
  pub fn validate(&self) -> Result<(), DomainError> {
    if !self.quantity.is_finite() || self.quantity <= 0.0 {
      return Err(DomainError::ValidationError(format!("Cantidad inválida: {} {} (debe ser un número positivo)",
                                                      self.quantity, self.unit)));
    }
    Ok(())
  }
}

impl fmt::Display for QuantityInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.quantity, self.unit)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!(QuantityUnit::parse("g"), QuantityUnit::Grams);
    assert_eq!(QuantityUnit::parse(" Grams "), QuantityUnit::Grams);
    assert_eq!(QuantityUnit::parse("mol"), QuantityUnit::Moles);
    assert_eq!(QuantityUnit::parse("mL"), QuantityUnit::Milliliters);
    assert_eq!(QuantityUnit::parse("ml"), QuantityUnit::Milliliters);
  }

  #[test]
  fn unknown_tag_is_kept_verbatim() {
    let unit = QuantityUnit::parse("ounces");
    assert_eq!(unit, QuantityUnit::Unrecognized("ounces".into()));
    assert!(!unit.is_recognized());
    assert_eq!(unit.tag(), "ounces");
  }

  #[test]
  fn serializes_as_tag() -> Result<(), DomainError> {
    let json = serde_json::to_string(&QuantityInput::milliliters(50.0))?;
    assert_eq!(json, r#"{"quantity":50.0,"unit":"mL"}"#);
    let back: QuantityInput = serde_json::from_str(r#"{"quantity":2.0,"unit":"moles"}"#)?;
    assert_eq!(back, QuantityInput::moles(2.0));
    Ok(())
  }

  #[test]
  fn validate_rejects_non_positive_and_nan() {
    assert!(QuantityInput::grams(10.0).validate().is_ok());
    assert!(QuantityInput::grams(0.0).validate().is_err());
    assert!(QuantityInput::grams(-1.0).validate().is_err());
    assert!(QuantityInput::grams(f64::NAN).validate().is_err());
    assert!(QuantityInput::grams(f64::INFINITY).validate().is_err());
  }
}
