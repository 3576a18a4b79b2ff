//! External service port traits (dice, chat, notifications, localization).

use async_trait::async_trait;
use esser_domain::{DiceFormula, DiceRollResult};
use serde::{Deserialize, Serialize};

use super::error::{DiceError, MessageError};

// =============================================================================
// Dice
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiceDevice: Send + Sync {
    async fn roll(&self, formula: &DiceFormula) -> Result<DiceRollResult, DiceError>;
}

// =============================================================================
// Chat Messages
// =============================================================================

/// A published result message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Actor the message is attributed to. `None` for table-wide results.
    pub speaker: Option<String>,
    pub flavor: String,
    pub content: String,
    pub roll: Option<DiceRollResult>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            speaker: None,
            flavor: String::new(),
            content: content.into(),
            roll: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    pub fn with_roll(mut self, roll: DiceRollResult) -> Self {
        self.roll = Some(roll);
        self
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn publish(&self, message: ChatMessage) -> Result<(), MessageError>;
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// User-facing toast text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

/// Fire-and-forget. Delivery failures are the sink's problem.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

// =============================================================================
// Localization
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait LocalizationPort: Send + Sync {
    /// Display string for `key`, or `key` itself when unmapped.
    fn localize(&self, key: &str) -> String;
}
