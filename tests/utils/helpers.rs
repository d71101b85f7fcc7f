/// Shared test helpers

/// Initialize logging for test runs; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
