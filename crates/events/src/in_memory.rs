//! In-memory notification sink for tests/dev.

use std::sync::Mutex;

use crate::notification::{Notification, NotificationLevel, NotificationSink};

/// Records every notification in arrival order.
///
/// - No IO
/// - Never fails; a poisoned lock drops the message
#[derive(Debug, Default)]
pub struct InMemoryNotifications {
    received: Mutex<Vec<Notification>>,
}

impl InMemoryNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub fn all(&self) -> Vec<Notification> {
        self.received.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().ok().and_then(|v| v.last().cloned())
    }

    pub fn levels(&self) -> Vec<NotificationLevel> {
        self.all().into_iter().map(|n| n.level).collect()
    }

    pub fn len(&self) -> usize {
        self.received.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut v) = self.received.lock() {
            v.clear();
        }
    }
}

impl NotificationSink for InMemoryNotifications {
    fn notify(&self, level: NotificationLevel, message: &str) {
        if let Ok(mut v) = self.received.lock() {
            v.push(Notification::new(level, message));
        }
    }
}
