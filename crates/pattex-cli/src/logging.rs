//! Logger setup for the `pattex` binary.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize `env_logger` once.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug`
/// with `-v`. Calls after the first are ignored.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if verbose {
            builder.filter_level(log::LevelFilter::Debug);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(env_logger::WriteStyle::Auto);
        builder.init();

        log::debug!("logging initialized");
    });
}
