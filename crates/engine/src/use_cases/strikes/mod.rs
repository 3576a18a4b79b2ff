//! Strike bookkeeping.

use std::sync::Arc;

use esser_domain::{ActorId, ActorPatch};

use crate::infrastructure::ports::{ActorStore, Notification, NotificationSink, RepoError};

/// Result of a strike adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrikeChange {
    pub actor_id: ActorId,
    pub before: i32,
    pub after: i32,
    pub max: i32,
    pub is_out: bool,
}

/// Add or remove strikes on an actor.
///
/// Read-modify-write on the stored record. Callers serialize per actor.
pub struct AdjustStrikes {
    actors: Arc<dyn ActorStore>,
    notifications: Arc<dyn NotificationSink>,
}

impl AdjustStrikes {
    pub fn new(actors: Arc<dyn ActorStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            actors,
            notifications,
        }
    }

    pub async fn execute(
        &self,
        actor_id: ActorId,
        delta: i32,
    ) -> Result<StrikeChange, StrikeError> {
        let actor = self
            .actors
            .get(actor_id)
            .await?
            .ok_or(StrikeError::ActorNotFound(actor_id))?;

        let before = actor.strike_track();
        let after = before.adjust(delta);

        self.actors
            .update(actor_id, &ActorPatch::strikes(after.current()))
            .await?;

        tracing::info!(
            actor_id = %actor_id,
            actor = %actor.name,
            before = before.current(),
            after = after.current(),
            max = after.max(),
            "Strikes adjusted"
        );

        if after.is_out() {
            self.notifications.notify(Notification::warning(format!(
                "{} is OUT ({} Strikes).",
                actor.name,
                after.max()
            )));
        }

        Ok(StrikeChange {
            actor_id,
            before: before.current(),
            after: after.current(),
            max: after.max(),
            is_out: after.is_out(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StrikeError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use esser_domain::{Actor, CharacterSheet, NpcSheet};

    use crate::infrastructure::ports::{MockActorStore, MockNotificationSink, NotificationLevel};

    fn store_with(actor: Actor, expected_strikes: i32) -> MockActorStore {
        let mut actors = MockActorStore::new();
        let id = actor.id;
        actors
            .expect_get()
            .withf(move |got| *got == id)
            .returning(move |_| Ok(Some(actor.clone())));
        actors
            .expect_update()
            .withf(move |got, patch| *got == id && *patch == ActorPatch::strikes(expected_strikes))
            .times(1)
            .returning(|_, _| Ok(()));
        actors
    }

    #[tokio::test]
    async fn increments_without_warning_below_max() {
        let actor = Actor::npc("Bandit", NpcSheet::default().with_strikes(0, Some(3)));
        let id = actor.id;
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().never();

        let change = AdjustStrikes::new(Arc::new(store_with(actor, 1)), Arc::new(notifications))
            .execute(id, 1)
            .await
            .expect("adjust succeeds");

        assert_eq!(change.before, 0);
        assert_eq!(change.after, 1);
        assert!(!change.is_out);
    }

    #[tokio::test]
    async fn reaching_max_warns_out() {
        let actor = Actor::character("Ana", CharacterSheet::default().with_strikes(2, None));
        let id = actor.id;
        let mut notifications = MockNotificationSink::new();
        notifications
            .expect_notify()
            .withf(|n| n.level == NotificationLevel::Warning && n.text == "Ana is OUT (3 Strikes).")
            .times(1)
            .return_const(());

        let change = AdjustStrikes::new(Arc::new(store_with(actor, 3)), Arc::new(notifications))
            .execute(id, 1)
            .await
            .expect("adjust succeeds");

        assert_eq!(change.after, 3);
        assert_eq!(change.max, 3);
        assert!(change.is_out);
    }

    #[tokio::test]
    async fn clamps_at_max_and_zero() {
        let at_max = Actor::npc("Grak", NpcSheet::default().with_strikes(4, Some(4)));
        let id = at_max.id;
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().times(1).return_const(());
        let change = AdjustStrikes::new(Arc::new(store_with(at_max, 4)), Arc::new(notifications))
            .execute(id, 1)
            .await
            .expect("adjust succeeds");
        assert_eq!(change.after, 4);

        let at_zero = Actor::npc("Rat", NpcSheet::default());
        let id = at_zero.id;
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().never();
        let change = AdjustStrikes::new(Arc::new(store_with(at_zero, 0)), Arc::new(notifications))
            .execute(id, -1)
            .await
            .expect("adjust succeeds");
        assert_eq!(change.after, 0);
    }

    #[tokio::test]
    async fn zero_max_never_raises_strikes() {
        let actor = Actor::npc("Minion", NpcSheet::default().with_strikes(0, Some(0)));
        let id = actor.id;
        let mut notifications = MockNotificationSink::new();
        notifications
            .expect_notify()
            .withf(|n| n.text == "Minion is OUT (0 Strikes).")
            .times(1)
            .return_const(());

        let change = AdjustStrikes::new(Arc::new(store_with(actor, 0)), Arc::new(notifications))
            .execute(id, 1)
            .await
            .expect("adjust succeeds");

        assert_eq!(change.after, 0);
        assert_eq!(change.max, 0);
        assert!(change.is_out);
    }

    #[tokio::test]
    async fn missing_actor_is_an_error() {
        let mut actors = MockActorStore::new();
        actors.expect_get().returning(|_| Ok(None));
        actors.expect_update().never();

        let err = AdjustStrikes::new(Arc::new(actors), Arc::new(MockNotificationSink::new()))
            .execute(ActorId::new(), 1)
            .await
            .expect_err("missing actor");
        assert!(matches!(err, StrikeError::ActorNotFound(_)));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let actor = Actor::npc("Bandit", NpcSheet::default());
        let id = actor.id;
        let mut actors = MockActorStore::new();
        actors
            .expect_get()
            .returning(move |_| Ok(Some(actor.clone())));
        actors
            .expect_update()
            .returning(|_, _| Err(RepoError::database("update", "disk full")));
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().never();

        let err = AdjustStrikes::new(Arc::new(actors), Arc::new(notifications))
            .execute(id, 1)
            .await
            .expect_err("store failure");
        assert!(matches!(err, StrikeError::Repo(_)));
    }
}
