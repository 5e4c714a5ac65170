mod catalog;
mod domain_stubs;
mod errors;
mod quantity;
mod reaction;
mod selection;

pub use catalog::{InMemoryReactionCatalog, ReactionCatalog};
pub use domain_stubs::DomainStubs;
pub use errors::DomainError;
pub use quantity::{QuantityInput, QuantityUnit};
pub use reaction::{Product, Reactant, Reaction, ReagentSide};
pub use selection::{OrientedInputs, ReactantSelection};
