// src/log.rs
//
// Console + file logging. Timestamps are elapsed time since start,
// `HH:MM:SS.mmm`, on both sinks.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::consts::LOG_FILE;
use crate::error::{Result, ScrapeError};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Elapsed;

impl FormatTime for Elapsed {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", fmt_elapsed(start().elapsed().as_millis()))
    }
}

/// Keep alive for the whole run; dropping it flushes the file sink.
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Install the global subscriber: stderr at `info` (or `debug` when
/// `verbose`), `logs/parser.log` at `debug`. `RUST_LOG` overrides the console level.
pub fn init(log_dir: &Path, verbose: bool) -> Result<LogGuard> {
    start();
    std::fs::create_dir_all(log_dir).map_err(|e| ScrapeError::io(log_dir, e))?;

    let (file_writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, LOG_FILE));

    let console_level = if verbose { "debug" } else { "info" };
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level));

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(Elapsed)
        .with_target(false)
        .with_filter(console_filter);

    let file = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_timer(Elapsed)
        .with_ansi(false)
        .with_filter(EnvFilter::new("debug"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry().with(console).with(file).try_init();

    Ok(LogGuard { _file: guard })
}
