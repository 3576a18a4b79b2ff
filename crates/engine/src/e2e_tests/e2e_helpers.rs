//! E2E test helpers for constructing the full application stack.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use esser_domain::{
    Actor, ActorId, AttributeKey, CharacterSheet, EsserRules, NpcSheet, StoredBonus,
};

use crate::app::{App, Ports};
use crate::infrastructure::clock::{FixedClock, ScriptedRandom};
use crate::infrastructure::dice::RandomDiceDevice;
use crate::infrastructure::localization::StaticLocalizer;
use crate::infrastructure::memory_store::InMemoryActorStore;
use crate::infrastructure::messages::InMemoryMessageLog;
use crate::infrastructure::notifications::TracingNotificationSink;
use crate::infrastructure::ports::ActorStore;

/// Fully wired app plus handles on the in-memory adapters.
pub struct E2ETestContext {
    pub app: App,
    pub store: Arc<InMemoryActorStore>,
    pub messages: Arc<InMemoryMessageLog>,
    pub notifications: Arc<TracingNotificationSink>,
}

impl E2ETestContext {
    /// Build an app whose d20 rolls replay `faces` in order.
    pub fn with_rolls(faces: impl IntoIterator<Item = i32>) -> Self {
        let rules = EsserRules::standard();
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        ));
        let store = Arc::new(InMemoryActorStore::new());
        let messages = Arc::new(InMemoryMessageLog::new(clock));
        let notifications = Arc::new(TracingNotificationSink::new());

        let app = App::new(
            Ports {
                actors: store.clone(),
                dice: Arc::new(RandomDiceDevice::new(Arc::new(ScriptedRandom::new(faces)))),
                messages: messages.clone(),
                notifications: notifications.clone(),
                localization: Arc::new(StaticLocalizer::english(&rules)),
            },
            rules,
        );

        Self {
            app,
            store,
            messages,
            notifications,
        }
    }

    pub async fn actor(&self, id: ActorId) -> Actor {
        self.store
            .get(id)
            .await
            .expect("store read")
            .expect("actor exists")
    }
}

/// Body +2, melee expert (+4).
pub fn create_test_fighter(name: &str) -> Actor {
    Actor::character(
        name,
        CharacterSheet::default()
            .with_attribute(AttributeKey::Body, 2)
            .with_skill("melee", StoredBonus::text("expert")),
    )
}

pub fn create_test_npc(name: &str, bonus: i32) -> Actor {
    Actor::npc(
        name,
        NpcSheet::default().with_bonus(bonus).with_tier("Tier 1"),
    )
}
