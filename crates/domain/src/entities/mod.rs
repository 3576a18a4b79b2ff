//! Domain entities

mod actor;

pub use actor::{Actor, ActorKind, ActorPatch, CharacterSheet, NpcFocus, NpcSheet};
