// Clean example: uses in-memory catalog and history to run locally
use chem_domain::{DomainStubs, QuantityInput, ReactantSelection};
use chem_persistence::InMemoryHistoryRepository;
use chem_workflow::{SimulatorService, WorkflowConfig};
use std::sync::Arc;

fn main() {
    let cfg = WorkflowConfig::default();
    // use in-memory repos for the example so it runs without external files
    let catalog = Arc::new(DomainStubs::sample_catalog().expect("sample catalog"));
    let svc = SimulatorService::new(catalog, Arc::new(InMemoryHistoryRepository::new()), cfg);

    // reactants picked in reverse catalog order on purpose
    let selection = ReactantSelection::new("Oxygen", QuantityInput::grams(50.0), "Methane", QuantityInput::grams(10.0));
    let result = svc.simulate(&selection).expect("simulate");
    for line in &result.calculation_steps {
        println!("{}", line);
    }

    for frame in svc.playback(&result).frames().step_by(10) {
        println!("{:>5.1}%  A {:>5.1}%  B {:>5.1}%",
                 frame.progress, frame.reactant_a_remaining, frame.reactant_b_remaining);
    }

    let id = svc.save(&result).expect("save");
    println!("Saved simulation {} (total yield so far: {:.2} g)",
             id,
             svc.summary().expect("summary").total_yield);
}
