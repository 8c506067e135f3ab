use crate::notification::{NotificationLevel, NotificationSink};

/// Routes notifications into `tracing` at a matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifications;

impl NotificationSink for TracingNotifications {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(target: "storefront::notify", kind = %level, "{message}")
            }
            NotificationLevel::Warning => {
                tracing::warn!(target: "storefront::notify", kind = %level, "{message}")
            }
            NotificationLevel::Error => {
                tracing::error!(target: "storefront::notify", kind = %level, "{message}")
            }
        }
    }
}
