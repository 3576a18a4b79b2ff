//! Notification sink that forwards to tracing and keeps a history.

use std::sync::Mutex;

use crate::infrastructure::ports::{Notification, NotificationLevel, NotificationSink};

#[derive(Default)]
pub struct TracingNotificationSink {
    history: Mutex<Vec<Notification>>,
}

impl TracingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Notification> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => tracing::info!(text = %notification.text, "Notification"),
            NotificationLevel::Warning => {
                tracing::warn!(text = %notification.text, "Notification")
            }
            NotificationLevel::Error => tracing::error!(text = %notification.text, "Notification"),
        }
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}
