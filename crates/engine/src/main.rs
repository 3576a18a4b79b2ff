//! ESSER Engine - demo entry point.
//!
//! Reads an NPC stat block from stdin, imports it, pits the NPC against a
//! sample character in an opposed test and prints the chat log.

use std::sync::Arc;

use anyhow::Context;
use esser_domain::{Actor, AttributeKey, CharacterSheet, EsserRules, NpcSheet, StoredBonus};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use esser_engine::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    dice::RandomDiceDevice,
    localization::StaticLocalizer,
    memory_store::InMemoryActorStore,
    messages::InMemoryMessageLog,
    notifications::TracingNotificationSink,
    ports::RandomPort,
    settings::EngineSettings,
};
use esser_engine::use_cases::ImportOutcome;
use esser_engine::{App, Ports};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esser_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = EngineSettings::from_env();
    tracing::info!(
        dice_seed = ?settings.dice_seed,
        opposed_skill = %settings.opposed_skill,
        "Starting ESSER Engine"
    );

    let random: Arc<dyn RandomPort> = match settings.dice_seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(SystemRandom::new()),
    };
    let rules = EsserRules::standard();
    let store = Arc::new(InMemoryActorStore::new());
    let messages = Arc::new(InMemoryMessageLog::new(Arc::new(SystemClock::new())));
    let notifications = Arc::new(TracingNotificationSink::new());

    let app = App::new(
        Ports {
            actors: store.clone(),
            dice: Arc::new(RandomDiceDevice::new(random)),
            messages: messages.clone(),
            notifications: notifications.clone(),
            localization: Arc::new(StaticLocalizer::english(&rules)),
        },
        rules,
    );

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("reading stat block from stdin")?;

    let npc = store.insert(Actor::npc("Imported NPC", NpcSheet::default()));
    let hero = store.insert(Actor::character(
        "Sample Hero",
        CharacterSheet::default()
            .with_attribute(AttributeKey::Body, 2)
            .with_attribute(AttributeKey::Agility, 1)
            .with_skill("melee", StoredBonus::text("skilled")),
    ));

    match app.use_cases.npc.import_stat_block.execute(npc, &text).await? {
        ImportOutcome::Imported { parsed, .. } => {
            tracing::info!(?parsed, "Stat block imported");
        }
        ImportOutcome::Unrecognized { warned } => {
            for notification in notifications.history() {
                eprintln!("{}", notification.text);
            }
            anyhow::bail!("stat block not recognized (warned: {})", warned);
        }
    }

    let run = app
        .use_cases
        .run_opposed
        .execute(&[npc, hero], &settings.opposed_skill)
        .await?;
    tracing::info!(diff = run.result.diff, tier = run.result.tier.as_str(), "Opposed test done");

    for entry in messages.entries() {
        let speaker = entry.message.speaker.as_deref().unwrap_or("Table");
        println!("[{}] {}: {}", entry.at.format("%H:%M:%S"), speaker, entry.message.content);
    }
    for notification in notifications.history() {
        println!("({:?}) {}", notification.level, notification.text);
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
