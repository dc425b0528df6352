use log::LevelFilter;

/// Environment variable holding the log filter, e.g. `FLATMAT_LOG=flatmat=debug`.
pub const LOG_ENV: &str = "FLATMAT_LOG";

/// Install an `env_logger` logger, falling back to `default_filter` when
/// `FLATMAT_LOG` is unset. Calling it again is a no-op.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .is_test(cfg!(test))
        .try_init();
}
