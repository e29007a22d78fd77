//! Tracing/logging setup shared by binaries and tests that host the domain
//! crates.
//!
//! The domain crates only emit `tracing` events; installing a subscriber is
//! left to the host through [`init`].

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}
