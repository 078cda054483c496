//! Shared test utilities

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test-writer tracing subscriber once per process
///
/// Lets `--nocapture` runs show the kernel's debug events without double
/// initialization panics across test threads.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().init();
    });
}
