//! Logger setup.  `RUST_LOG` controls the filter as usual.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;

/// Initialise `env_logger`.  With a log file the output is piped there and
/// defaults to `info`; without one it goes to stderr at the env_logger
/// default level, since stderr shares the screen with the game.
pub fn init(log_file: Option<&Path>) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .filter_level(LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Error);
        }
    }
    // RUST_LOG overrides the defaults above.
    builder.parse_default_env();
    // Ignore a second init (e.g. from tests sharing the process).
    let _ = builder.try_init();
    Ok(())
}
