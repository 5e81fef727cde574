use log::LevelFilter;

/// Initialize the logger: rayshade logs at `level`, dependencies only warn.
///
/// `RUST_LOG` directives are applied first, so module-specific filters set
/// there still take effect.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Warn.min(level))
        .filter_module("rayshade", level)
        .format_target(false)
        .format_timestamp_millis()
        .init();
}
