//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Actor storage (the host's document store)
//! - Dice (host dice roller or a local RNG)
//! - Chat output and user notifications
//! - Localization lookups
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::ActorStore;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, DiceDevice, LocalizationPort, MessageSink, Notification, NotificationLevel,
    NotificationSink,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{
    MockDiceDevice, MockLocalizationPort, MockMessageSink, MockNotificationSink,
};
#[cfg(test)]
pub use repos::MockActorStore;
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{DiceError, MessageError, RepoError};
