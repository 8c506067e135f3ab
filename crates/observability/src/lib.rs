//! Tracing/logging setup shared by binaries.

pub mod logging;

pub use logging::LogFormat;

/// Initialize process-wide logging with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    logging::init(LogFormat::Json);
}
