use std::{io, sync::Once};

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";
static INIT_LOGGER: Once = Once::new();

/// Initializes tracing once. Output goes to stderr; stdout carries the program output.
///
/// `RUST_LOG` wins over `configured`, which wins over the `warn` default.
pub fn init_tracing(configured: Option<&str>) {
    INIT_LOGGER.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = configured.unwrap_or(DEFAULT_LOG_FILTER);
            EnvFilter::try_new(directive).unwrap_or_else(|err| {
                eprintln!("sample-target: invalid log filter {directive:?}: {err}");
                EnvFilter::new(DEFAULT_LOG_FILTER)
            })
        });
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init()
        {
            eprintln!("sample-target: tracing initialization failed: {err}");
        }
    });
}
