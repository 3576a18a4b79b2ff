//! Actor store port.

use async_trait::async_trait;
use esser_domain::{Actor, ActorId, ActorPatch};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError>;
    /// Merge `patch` into the stored record. Absent fields are left alone.
    async fn update(&self, id: ActorId, patch: &ActorPatch) -> Result<(), RepoError>;
}
