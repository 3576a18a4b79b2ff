//! In-memory actor store.

use async_trait::async_trait;
use dashmap::DashMap;
use esser_domain::{Actor, ActorId, ActorPatch};

use crate::infrastructure::ports::{ActorStore, RepoError};

/// Actor records keyed by id. Patches merge field by field.
#[derive(Default)]
pub struct InMemoryActorStore {
    actors: DashMap<ActorId, Actor>,
}

impl InMemoryActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record.
    pub fn insert(&self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.actors.insert(id, actor);
        id
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

#[async_trait]
impl ActorStore for InMemoryActorStore {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError> {
        Ok(self.actors.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: ActorId, patch: &ActorPatch) -> Result<(), RepoError> {
        let mut entry = self
            .actors
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("Actor", id))?;
        entry.apply_patch(patch);
        tracing::debug!(actor_id = %id, "Applied actor patch");
        Ok(())
    }
}
