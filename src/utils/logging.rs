use log::LevelFilter;

use crate::models::Config;

/// Install the `env_logger` backend.
///
/// Debug mode lowers the default level to `debug`; `RUST_LOG` still takes
/// precedence when set. Calling this more than once is harmless.
pub fn init_logging(config: &Config) {
    let default_level = if config.debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
