//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod dice;
pub mod localization;
pub mod memory_store;
pub mod messages;
pub mod notifications;
pub mod ports;
pub mod settings;
