use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::logging;
use crate::runner::{self, ThreadSleeper};
use crate::settings;

#[derive(Parser, Debug)]
#[command(name = "sample-target")]
#[command(
    about = "Prints a few typed values, blocks for three seconds, then prints Done",
    version
)]
pub struct Cli {
    #[arg(long, help = "YAML settings file (log filter).")]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let settings = settings::load_settings(self.config.as_deref())?;
        logging::init_tracing(settings.log.filter.as_deref());

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = runner::run_sequence(&mut out, &mut ThreadSleeper)?;
        info!(
            lines = report.lines_written,
            elapsed = ?report.elapsed_delay,
            "sequence complete"
        );
        Ok(())
    }
}
