use approx::assert_relative_eq;
use chem_domain::{Product, QuantityInput, Reactant, Reaction};
use chem_playback::{Playback, ProgressSchedule, ReactionFrame};
use chem_stoichiometry::calculate_stoichiometry;
use std::time::Duration;

fn acid_base() -> Reaction {
  Reaction::new(Reactant::new("Base", "NaOH", 40.0, 1),
                Reactant::new("Acid", "HCl", 36.5, 1),
                vec![Product::new("Salt", "NaCl", 58.5, 1, "aq"),
                     Product::new("Water", "H2O", 18.0, 1, "l")],
                "NaOH + HCl → NaCl + H2O",
                "Neutralization").with_enthalpy(-57.3)
}

#[test]
fn limiting_reactant_depletes_fully() {
  // B limits: 2 mol A vs 1 mol B
  let result = calculate_stoichiometry(&acid_base(), &QuantityInput::grams(80.0), &QuantityInput::grams(36.5));
  let start = ReactionFrame::at(&result, 0.0);
  assert_eq!(start.reactant_a_remaining, 100.0);
  assert_eq!(start.reactant_b_remaining, 100.0);
  assert!(!start.reacting);

  let mid = ReactionFrame::at(&result, 50.0);
  assert_relative_eq!(mid.reactant_b_remaining, 50.0);
  assert_relative_eq!(mid.reactant_a_remaining, 75.0);
  assert_relative_eq!(mid.product_formed, 50.0);
  assert!(mid.reacting);

  let end = ReactionFrame::at(&result, 100.0);
  assert_eq!(end.reactant_b_remaining, 0.0);
  // half of A is left over
  assert_relative_eq!(end.reactant_a_remaining, 50.0);
  assert_relative_eq!(end.liquid_level, 70.0);
  assert!(!end.reacting);
  assert!(end.exothermic);
}

#[test]
fn excess_at_completion_matches_leftover_share() {
  let result = calculate_stoichiometry(&acid_base(), &QuantityInput::grams(40.0), &QuantityInput::grams(91.25));
  let end = ReactionFrame::at(&result, 100.0);
  let leftover_pct = result.excess_reagent.leftover_moles / result.input_b.moles * 100.0;
  assert_relative_eq!(end.reactant_b_remaining, leftover_pct, max_relative = 1e-9);
  assert_eq!(end.reactant_a_remaining, 0.0);
}

#[test]
fn equal_ratios_deplete_both() {
  let result = calculate_stoichiometry(&acid_base(), &QuantityInput::grams(40.0), &QuantityInput::grams(36.5));
  let end = ReactionFrame::at(&result, 100.0);
  assert_eq!(end.reactant_a_remaining, 0.0);
  assert_eq!(end.reactant_b_remaining, 0.0);
}

#[test]
fn out_of_range_progress_is_clamped() {
  let result = calculate_stoichiometry(&acid_base(), &QuantityInput::grams(40.0), &QuantityInput::grams(36.5));
  assert_eq!(ReactionFrame::at(&result, 140.0).progress, 100.0);
  assert_eq!(ReactionFrame::at(&result, -3.0).progress, 0.0);
}

#[test]
fn playback_frames_follow_schedule() {
  let result = calculate_stoichiometry(&acid_base(), &QuantityInput::grams(80.0), &QuantityInput::grams(36.5));
  let schedule = ProgressSchedule::new(Duration::from_millis(100), 25.0).expect("valid schedule");
  let playback = Playback::new(&result, schedule);
  let progress: Vec<f64> = playback.frames().map(|f| f.progress).collect();
  assert_eq!(progress, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
  assert_eq!(playback.frame_at(Duration::from_millis(250)).progress, 50.0);
  assert!(!playback.results_visible(75.0));
  assert!(playback.results_visible(100.0));
  // the result itself is untouched by playback
  assert_eq!(playback.result(), &result);
}
