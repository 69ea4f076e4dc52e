//! Set up of the `tracing` subscriber used by the command line programs.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::Error;

/// Install the global logger.
///
/// Logs are written to stderr so they do not mix with command output. The
/// level starts at `warn` and is raised by one level for each `verbosity`
/// step; the `RUST_LOG` environment variable overrides it. When `log_file` is
/// given, debug level logs are also appended to that file.
///
/// # Errors
/// Returns [Error::IoError] if the log file cannot be opened, or
/// [Error::LoggingSetup] if a global logger has already been installed.
pub fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<(), Error> {
    let default_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        );

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_log)
        .with(debug_log)
        .try_init()
        .map_err(|error| Error::LoggingSetup(error.to_string()))
}
