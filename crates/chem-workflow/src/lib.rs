//! chem-workflow: simulador estequiométrico
//!
//! Capa que llama al motor `chem_stoichiometry` en nombre de una interfaz:
//! busca la reacción en el catálogo (`chem_domain::ReactionCatalog`), valida
//! cantidades y unidades, reordena las entradas al orden A/B, calcula, guarda
//! el historial (`chem_persistence::HistoryRepository`) y prepara la
//! reproducción (`chem_playback::Playback`).

pub mod config;
pub mod errors;
pub mod simulator;

pub use config::WorkflowConfig;
pub use errors::WorkflowError;
pub use simulator::SimulatorService;
