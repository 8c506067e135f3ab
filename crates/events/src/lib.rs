//! User-facing notifications.
//!
//! Every user action ends with exactly one leveled message describing its
//! outcome. Sinks are fire-and-forget: nothing they do feeds back into state.

pub mod in_memory;
pub mod notification;
pub mod tracing_sink;

pub use in_memory::InMemoryNotifications;
pub use notification::{Notification, NotificationLevel, NotificationSink};
pub use tracing_sink::TracingNotifications;
