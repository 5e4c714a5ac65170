use crate::{DomainError, Reaction};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Trait que define el acceso al catálogo de reacciones balanceadas.
pub trait ReactionCatalog: Send + Sync {
    /// Valida y guarda una reacción, devolviendo su `Uuid`.
    fn save_reaction(&self, reaction: Reaction) -> Result<Uuid, DomainError>;

    /// Recupera una reacción por su `Uuid`.
    fn get_reaction(&self, id: &Uuid) -> Result<Option<Reaction>, DomainError>;

    /// Lista todas las reacciones en orden de inserción.
    fn list_reactions(&self) -> Result<Vec<Reaction>, DomainError>;

    /// Elimina una reacción. Eliminar un id inexistente no es un error.
    fn delete_reaction(&self, id: &Uuid) -> Result<(), DomainError>;

    /// Busca la reacción entre dos reactivos, en cualquier orden.
    fn find_by_reactants(&self, first: &str, second: &str) -> Result<Option<Reaction>, DomainError> {
        Ok(self.list_reactions()?.into_iter().find(|r| r.matches_pair(first, second)))
    }

    /// Nombres de todos los reactivos del catálogo, ordenados y sin duplicados.
    fn unique_reactants(&self) -> Result<Vec<String>, DomainError> {
        let names: BTreeSet<String> = self.list_reactions()?
                                          .into_iter()
                                          .flat_map(|r| [r.reactant_a.name, r.reactant_b.name])
                                          .collect();
        Ok(names.into_iter().collect())
    }

    /// Reactivos que aparecen frente a `name` en alguna reacción.
    fn compatible_reactants(&self, name: &str) -> Result<Vec<String>, DomainError> {
        let names: BTreeSet<String> = self.list_reactions()?
                                          .into_iter()
                                          .filter(|r| r.involves(name))
                                          .flat_map(|r| [r.reactant_a.name, r.reactant_b.name])
                                          .filter(|n| n != name)
                                          .collect();
        Ok(names.into_iter().collect())
    }
}

/// Implementación en memoria para tests y desarrollo.
pub struct InMemoryReactionCatalog {
    reactions: Arc<Mutex<IndexMap<Uuid, Reaction>>>,
}

impl InMemoryReactionCatalog {
    pub fn new() -> Self {
        Self { reactions: Arc::new(Mutex::new(IndexMap::new())) }
    }

    // Helper to map poisoned mutex errors into DomainError
    fn lock_map<'a, T>(&'a self, m: &'a Mutex<T>, name: &str) -> Result<std::sync::MutexGuard<'a, T>, DomainError> {
        m.lock()
         .map_err(|e| DomainError::ExternalError(format!("Mutex '{}' poisoned: {}", name, e)))
    }
}

impl ReactionCatalog for InMemoryReactionCatalog {
    fn save_reaction(&self, reaction: Reaction) -> Result<Uuid, DomainError> {
        reaction.validate()?;
        let id = reaction.id;
        let mut reactions = self.lock_map(&self.reactions, "reactions")?;
        reactions.insert(id, reaction);
        Ok(id)
    }

    fn get_reaction(&self, id: &Uuid) -> Result<Option<Reaction>, DomainError> {
        let reactions = self.lock_map(&self.reactions, "reactions")?;
        Ok(reactions.get(id).cloned())
    }

    fn list_reactions(&self) -> Result<Vec<Reaction>, DomainError> {
        let reactions = self.lock_map(&self.reactions, "reactions")?;
        Ok(reactions.values().cloned().collect())
    }

    fn delete_reaction(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut reactions = self.lock_map(&self.reactions, "reactions")?;
        reactions.shift_remove(id);
        Ok(())
    }
}

impl Default for InMemoryReactionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
