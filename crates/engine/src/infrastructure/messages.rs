//! In-memory chat log.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::infrastructure::ports::{ChatMessage, ClockPort, MessageError, MessageSink};

/// A published message with the time it was received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedMessage {
    pub at: DateTime<Utc>,
    pub message: ChatMessage,
}

pub struct InMemoryMessageLog {
    clock: Arc<dyn ClockPort>,
    entries: Mutex<Vec<LoggedMessage>>,
}

impl InMemoryMessageLog {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything published so far, oldest first.
    pub fn entries(&self) -> Vec<LoggedMessage> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.entries().into_iter().map(|entry| entry.message).collect()
    }
}

#[async_trait]
impl MessageSink for InMemoryMessageLog {
    async fn publish(&self, message: ChatMessage) -> Result<(), MessageError> {
        let entry = LoggedMessage {
            at: self.clock.now(),
            message,
        };
        self.entries
            .lock()
            .map_err(|e| MessageError::Rejected(e.to_string()))?
            .push(entry);
        Ok(())
    }
}
