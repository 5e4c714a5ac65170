// Archivo: schedule.rs
// Propósito: calendario de reproducción del progreso (0 → 100 %) como
// función pura del tiempo transcurrido.
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const COMPLETE: f64 = 100.0;

/// Avance de `step_percent` cada `tick`, hasta llegar a 100 %.
///
/// No guarda estado: el porcentaje mostrado se recalcula a partir del
/// tiempo transcurrido, por lo que reiniciar la reproducción es volver a
/// preguntar con `elapsed = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleFields")]
pub struct ProgressSchedule {
  tick: Duration,
  step_percent: f64,
}

// Forma deserializada antes de pasar por `ProgressSchedule::new`.
#[derive(Deserialize)]
struct ScheduleFields {
  tick: Duration,
  step_percent: f64,
}

impl TryFrom<ScheduleFields> for ProgressSchedule {
  type Error = String;

  fn try_from(fields: ScheduleFields) -> Result<Self, Self::Error> {
    Self::new(fields.tick, fields.step_percent).ok_or_else(|| {
                                                  format!("calendario inválido: tick {:?}, paso {}",
                                                          fields.tick, fields.step_percent)
                                                })
  }
}

impl Default for ProgressSchedule {
  fn default() -> Self {
    Self { tick: Duration::from_millis(50), step_percent: 2.0 }
  }
}

impl ProgressSchedule {
  /// Devuelve `None` si `step_percent` no es un número positivo finito, si
  /// el número de pasos no cabe en `u32` o si la duración total desborda
  /// `Duration`.
  pub fn new(tick: Duration, step_percent: f64) -> Option<Self> {
    if !step_percent.is_finite() || step_percent <= 0.0 {
      return None;
    }
    let ticks = (COMPLETE / step_percent).ceil();
    if ticks > f64::from(u32::MAX) {
      return None;
    }
    tick.checked_mul(ticks as u32)?;
    Some(Self { tick, step_percent })
  }

  pub fn tick(&self) -> Duration {
    self.tick
  }

  pub fn step_percent(&self) -> f64 {
    self.step_percent
  }

  /// Porcentaje a mostrar tras `elapsed`. Un `tick` nulo completa al
  /// instante.
  pub fn progress_at(&self, elapsed: Duration) -> f64 {
    if self.tick.is_zero() {
      return COMPLETE;
    }
    let ticks = (elapsed.as_nanos() / self.tick.as_nanos()) as f64;
    (ticks * self.step_percent).min(COMPLETE)
  }

  /// Porcentaje pedido manualmente (control deslizante), acotado a [0, 100].
  pub fn clamp_requested(percent: f64) -> f64 {
    if percent.is_nan() {
      return 0.0;
    }
    percent.clamp(0.0, COMPLETE)
  }

  pub fn total_ticks(&self) -> u32 {
    (COMPLETE / self.step_percent).ceil() as u32
  }

  pub fn duration(&self) -> Duration {
    self.tick * self.total_ticks()
  }

  pub fn is_complete(percent: f64) -> bool {
    percent >= COMPLETE
  }

  /// Secuencia 0, step, 2·step, …, 100. Cada llamada empieza desde cero.
  pub fn percentages(&self) -> impl Iterator<Item = f64> {
    let step = self.step_percent;
    (0..=self.total_ticks()).map(move |i| (f64::from(i) * step).min(COMPLETE))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_two_percent_every_fifty_ms() {
    let s = ProgressSchedule::default();
    assert_eq!(s.progress_at(Duration::ZERO), 0.0);
    assert_eq!(s.progress_at(Duration::from_millis(49)), 0.0);
    assert_eq!(s.progress_at(Duration::from_millis(50)), 2.0);
    assert_eq!(s.progress_at(Duration::from_millis(1250)), 50.0);
    assert_eq!(s.progress_at(Duration::from_millis(2500)), 100.0);
    assert_eq!(s.progress_at(Duration::from_secs(60)), 100.0);
    assert_eq!(s.total_ticks(), 50);
    assert_eq!(s.duration(), Duration::from_millis(2500));
  }

  #[test]
  fn progress_is_monotonic() {
    let s = ProgressSchedule::new(Duration::from_millis(30), 3.0).expect("valid schedule");
    let mut last = 0.0;
    for ms in (0..5000).step_by(7) {
      let p = s.progress_at(Duration::from_millis(ms));
      assert!(p >= last);
      assert!(p <= COMPLETE);
      last = p;
    }
    assert_eq!(last, COMPLETE);
  }

  #[test]
  fn percentages_end_exactly_at_complete() {
    let s = ProgressSchedule::new(Duration::from_millis(10), 30.0).expect("valid schedule");
    let seq: Vec<f64> = s.percentages().collect();
    assert_eq!(seq, vec![0.0, 30.0, 60.0, 90.0, 100.0]);
    // restartable
    assert_eq!(s.percentages().count(), seq.len());
  }

  #[test]
  fn invalid_step_is_rejected() {
    assert!(ProgressSchedule::new(Duration::from_millis(50), 0.0).is_none());
    assert!(ProgressSchedule::new(Duration::from_millis(50), -2.0).is_none());
    assert!(ProgressSchedule::new(Duration::from_millis(50), f64::NAN).is_none());
  }

  #[test]
  fn overflowing_schedules_are_rejected() {
    assert!(ProgressSchedule::new(Duration::from_millis(u64::MAX), 0.01).is_none());
    assert!(ProgressSchedule::new(Duration::MAX, 50.0).is_none());
    // more steps than fit in u32
    assert!(ProgressSchedule::new(Duration::from_millis(1), 1e-9).is_none());
    assert!(ProgressSchedule::new(Duration::from_millis(1), f64::MIN_POSITIVE).is_none());

    let s = ProgressSchedule::new(Duration::from_secs(u64::MAX / 200), 1.0).expect("fits in Duration");
    assert_eq!(s.total_ticks(), 100);
    assert_eq!(s.duration(), Duration::from_secs(u64::MAX / 200) * 100);
  }

  #[test]
  fn deserialization_goes_through_validation() -> Result<(), serde_json::Error> {
    let s = ProgressSchedule::new(Duration::from_millis(20), 4.0).expect("valid schedule");
    let back: ProgressSchedule = serde_json::from_str(&serde_json::to_string(&s)?)?;
    assert_eq!(back, s);

    let bad = r#"{"tick":{"secs":18446744073709551615,"nanos":0},"step_percent":0.01}"#;
    assert!(serde_json::from_str::<ProgressSchedule>(bad).is_err());
    assert!(serde_json::from_str::<ProgressSchedule>(r#"{"tick":{"secs":0,"nanos":50000000},"step_percent":-1.0}"#).is_err());
    Ok(())
  }

  #[test]
  fn zero_tick_completes_immediately() {
    let s = ProgressSchedule::new(Duration::ZERO, 2.0).expect("valid schedule");
    assert_eq!(s.progress_at(Duration::ZERO), COMPLETE);
  }

  #[test]
  fn requested_percent_is_clamped() {
    assert_eq!(ProgressSchedule::clamp_requested(-5.0), 0.0);
    assert_eq!(ProgressSchedule::clamp_requested(42.0), 42.0);
    assert_eq!(ProgressSchedule::clamp_requested(150.0), 100.0);
    assert_eq!(ProgressSchedule::clamp_requested(f64::NAN), 0.0);
    assert!(ProgressSchedule::is_complete(100.0));
    assert!(!ProgressSchedule::is_complete(99.9));
  }
}
