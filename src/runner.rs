use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::debug;

use crate::values::SampleValues;

pub const DELAY_SECS: u64 = 3;
pub const DELAY: Duration = Duration::from_secs(DELAY_SECS);
pub const DONE_LINE: &str = "Done";

/// Blocks the calling thread for the run delay.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RunReport {
    pub lines_written: usize,
    pub elapsed_delay: Duration,
}

pub fn waiting_line() -> String {
    format!("Waiting for {DELAY_SECS} seconds")
}

/// Print the values, block for the fixed delay, then print the completion line.
pub fn run_sequence<W, S>(out: &mut W, sleeper: &mut S) -> anyhow::Result<RunReport>
where
    W: Write,
    S: Sleeper,
{
    let values = SampleValues::default();
    let mut lines_written = 0;

    for line in values.lines() {
        emit(out, &line)?;
        lines_written += 1;
    }
    debug!(values = ?values, "sample values printed");

    emit(out, &waiting_line())?;
    lines_written += 1;

    debug!(delay = ?DELAY, "blocking thread");
    let started = Instant::now();
    sleeper.sleep(DELAY);
    let elapsed_delay = started.elapsed();
    debug!(elapsed = ?elapsed_delay, "delay finished");

    emit(out, DONE_LINE)?;
    lines_written += 1;

    Ok(RunReport {
        lines_written,
        elapsed_delay,
    })
}

fn emit<W: Write>(out: &mut W, line: &str) -> anyhow::Result<()> {
    writeln!(out, "{line}").context("failed to write to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
