use crate::errors::WorkflowError;
use chem_persistence::HISTORY_PATH_ENV;
use chem_playback::ProgressSchedule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const ALLOW_UNRECOGNIZED_UNITS_ENV: &str = "STOICHSIM_ALLOW_UNRECOGNIZED_UNITS";
pub const TICK_MS_ENV: &str = "STOICHSIM_TICK_MS";
pub const STEP_PERCENT_ENV: &str = "STOICHSIM_STEP_PERCENT";

/// Configuracion del simulador.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
  /// Si es `false`, una unidad no reconocida se rechaza antes de llamar al
  /// motor en lugar de tomarse como moles.
  pub allow_unrecognized_units: bool,
  pub schedule: ProgressSchedule,
  /// Ruta del historial en disco; `None` = en memoria.
  pub history_path: Option<PathBuf>,
}

impl Default for WorkflowConfig {
  fn default() -> Self {
    WorkflowConfig { allow_unrecognized_units: false, schedule: ProgressSchedule::default(), history_path: None }
  }
}

impl WorkflowConfig {
  /// Carga `.env` (si existe) y lee la configuracion del entorno.
  pub fn from_env() -> Result<Self, WorkflowError> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Construye la configuracion a partir de una funcion de busqueda de
  /// variables; las ausentes toman el valor por defecto.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, WorkflowError>
    where F: Fn(&str) -> Option<String>
  {
    let defaults = Self::default();
    let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let allow_unrecognized_units = match read(ALLOW_UNRECOGNIZED_UNITS_ENV) {
      Some(v) => parse_bool(ALLOW_UNRECOGNIZED_UNITS_ENV, &v)?,
      None => defaults.allow_unrecognized_units,
    };
    let tick = match read(TICK_MS_ENV) {
      Some(v) => Duration::from_millis(v.parse::<u64>().map_err(|e| invalid(TICK_MS_ENV, &v, e))?),
      None => defaults.schedule.tick(),
    };
    let step_percent = match read(STEP_PERCENT_ENV) {
      Some(v) => v.parse::<f64>().map_err(|e| invalid(STEP_PERCENT_ENV, &v, e))?,
      None => defaults.schedule.step_percent(),
    };
    let schedule = ProgressSchedule::new(tick, step_percent).ok_or_else(|| {
                     WorkflowError::Validation(format!("calendario inválido: {}={} ms, {}={} (paso positivo y duración total representable)",
                                                       TICK_MS_ENV,
                                                       tick.as_millis(),
                                                       STEP_PERCENT_ENV,
                                                       step_percent))
                   })?;
    let history_path = read(HISTORY_PATH_ENV).map(PathBuf::from);

    Ok(Self { allow_unrecognized_units, schedule, history_path })
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, WorkflowError> {
  match value.to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(WorkflowError::Validation(format!("{}: valor booleano invalido '{}'", key, value))),
  }
}

fn invalid(key: &str, value: &str, e: impl std::fmt::Display) -> WorkflowError {
  WorkflowError::Validation(format!("{}: valor invalido '{}' ({})", key, value, e))
}
