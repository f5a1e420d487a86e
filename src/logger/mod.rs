use env_logger::Env;

/// Installs the global logger. `RUST_LOG` wins over the configured level.
/// Calling this twice is harmless.
pub fn init(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .try_init();
}
