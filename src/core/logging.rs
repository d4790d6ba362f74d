//! Logging initialization and utilities

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable. Calling this more than
/// once is harmless; later calls are ignored.
///
/// # Example
/// ```
/// treebrush::core::logging::init();
/// log::info!("Brush ready");
/// ```
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
