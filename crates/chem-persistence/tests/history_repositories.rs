use chem_domain::{DomainStubs, QuantityInput, ReactionCatalog};
use chem_persistence::{HistoryRepository, InMemoryHistoryRepository, JsonFileHistoryRepository, PersistenceError,
                       SimulationRecord};
use chem_stoichiometry::calculate_stoichiometry;
use chrono::{Duration, Utc};

fn records(n: usize) -> Vec<SimulationRecord> {
  let reactions = DomainStubs::sample_reactions();
  let base = Utc::now();
  (0..n).map(|i| {
          let reaction = &reactions[i % reactions.len()];
          let result = calculate_stoichiometry(reaction,
                                               &QuantityInput::grams(10.0 + i as f64),
                                               &QuantityInput::moles(0.5));
          let mut rec = SimulationRecord::from_result(&result).expect("record");
          rec.created_at = base + Duration::seconds(i as i64);
          rec.reseal().expect("reseal");
          rec
        })
        .collect()
}

fn exercise_repository(repo: &dyn HistoryRepository) -> Result<(), PersistenceError> {
  assert!(repo.list_records()?.is_empty());
  let recs = records(3);
  for r in &recs {
    repo.save_record(r.clone())?;
  }

  // newest first
  let listed = repo.list_records()?;
  let ids: Vec<_> = listed.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![recs[2].id, recs[1].id, recs[0].id]);

  let loaded = repo.get_record(&recs[1].id)?.expect("record present");
  assert_eq!(loaded, recs[1]);
  assert!(listed.iter().all(|r| r.verify_integrity().unwrap_or(false)));

  let summary = repo.summary()?;
  assert_eq!(summary.total_simulations, 3);
  assert_eq!(summary.unique_reactions, 3);
  let expected_yield: f64 = recs.iter().map(|r| r.theoretical_yield).sum();
  assert!((summary.total_yield - expected_yield).abs() < 1e-9);

  repo.delete_record(&recs[0].id)?;
  assert!(repo.get_record(&recs[0].id)?.is_none());
  assert_eq!(repo.list_records()?.len(), 2);

  match repo.delete_record(&recs[0].id) {
    Err(PersistenceError::NotFound(_)) => {}
    other => panic!("expected NotFound, got {:?}", other),
  }
  Ok(())
}

#[test]
fn in_memory_repository_contract() -> Result<(), PersistenceError> {
  exercise_repository(&InMemoryHistoryRepository::new())
}

#[test]
fn json_file_repository_contract() -> Result<(), PersistenceError> {
  let dir = tempfile::tempdir()?;
  exercise_repository(&JsonFileHistoryRepository::new(dir.path().join("history.json")))
}

#[test]
fn json_file_repository_survives_reopen() -> Result<(), PersistenceError> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("nested").join("history.json");
  let recs = records(2);
  {
    let repo = JsonFileHistoryRepository::new(&path);
    for r in &recs {
      repo.save_record(r.clone())?;
    }
  }
  let reopened = JsonFileHistoryRepository::new(&path);
  let listed = reopened.list_records()?;
  assert_eq!(listed.len(), 2);
  for r in &listed {
    assert!(r.verify_integrity()?);
  }
  assert_eq!(reopened.get_record(&recs[0].id)?, Some(recs[0].clone()));
  Ok(())
}

#[test]
fn saving_same_id_replaces_record() -> Result<(), PersistenceError> {
  let dir = tempfile::tempdir()?;
  let repo = JsonFileHistoryRepository::new(dir.path().join("history.json"));
  let mut rec = records(1).remove(0);
  repo.save_record(rec.clone())?;
  rec.observation = Some("editado".into());
  rec.reseal()?;
  repo.save_record(rec.clone())?;
  let listed = repo.list_records()?;
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].observation.as_deref(), Some("editado"));
  assert_eq!(repo.get_record(&rec.id)?, Some(rec));
  Ok(())
}

#[test]
fn tampered_record_is_an_integrity_error() -> Result<(), Box<dyn std::error::Error>> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("history.json");
  let recs = records(2);
  let repo = JsonFileHistoryRepository::new(&path);
  for r in &recs {
    repo.save_record(r.clone())?;
  }

  // edit the yield of the first record directly on disk
  let mut doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
  let entries = doc.as_array_mut().expect("history is a JSON array");
  let target = entries.iter_mut()
                      .find(|e| e["id"] == serde_json::json!(recs[0].id))
                      .expect("record on disk");
  target["theoretical_yield"] = serde_json::json!(999.0);
  std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)?;

  match repo.get_record(&recs[0].id) {
    Err(PersistenceError::Integrity(_)) => {}
    other => panic!("expected Integrity, got {:?}", other),
  }
  // untouched records are still served
  assert_eq!(repo.get_record(&recs[1].id)?, Some(recs[1].clone()));
  assert_eq!(repo.list_records()?.len(), 2);
  Ok(())
}

#[test]
fn corrupt_file_is_a_serialization_error() -> Result<(), PersistenceError> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("history.json");
  std::fs::write(&path, "{ not json")?;
  let repo = JsonFileHistoryRepository::new(&path);
  assert!(matches!(repo.list_records(), Err(PersistenceError::Serialization(_))));
  Ok(())
}

#[test]
fn catalog_reactions_project_into_records() -> Result<(), Box<dyn std::error::Error>> {
  let catalog = DomainStubs::sample_catalog()?;
  let reaction = catalog.find_by_reactants("Methane", "Oxygen")?.expect("sample reaction");
  let result = calculate_stoichiometry(&reaction, &QuantityInput::grams(16.04), &QuantityInput::grams(32.0));
  let rec = SimulationRecord::from_result(&result)?;
  assert_eq!(rec.limiting_reagent, "Oxygen");
  assert_eq!(rec.products_formed.len(), 2);
  assert!(rec.verify_integrity()?);
  Ok(())
}
