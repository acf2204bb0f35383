/// Initializes the logger with the `env_logger` crate.
///
/// Must be called once at process start, before any other logging calls.
pub fn init_logger() {
    env_logger::init();
}
