// regexpr/src/logger.rs
//! Logger setup for the regexpr binary.
//! License: MIT OR APACHE 2.0

use log::LevelFilter;

/// Installs `env_logger`. `RUST_LOG` is honoured unless `level` overrides it;
/// without either, only warnings and errors are shown.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).try_init().ok();
}
