// src/cli.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{error, info};

use crate::{
    config::Config,
    core::{Fetch, Session},
    log,
    progress::TermProgress,
    render::{render, OutputKind},
    runner::{self, Mode},
};

#[derive(Debug, Parser)]
#[command(name = "docs_scrape", version, about = "Парсер документации Python")]
pub struct Args {
    /// Режим работы парсера
    #[arg(value_enum)]
    pub mode: Mode,

    /// Очистить кеш HTTP-ответов перед запуском
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Способ вывода: pretty (таблица) или file (CSV); без флага построчно
    #[arg(short, long, value_parser = ["pretty", "file"])]
    pub output: Option<String>,

    /// Каталог для logs/, results/, downloads/ и кеша
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Подробный вывод в консоль
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run controller. Every fault past argument parsing is logged once and
/// turned into a non-zero exit code; no backtrace reaches the user.
pub fn run() -> ExitCode {
    let _ = color_eyre::install();
    let args = Args::parse();

    let config = match Config::new() {
        Ok(c) => c.with_base_dir(&args.base_dir),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let _log = match log::init(&config.log_dir(), args.verbose) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Парсер запущен!");
    info!("Аргументы командной строки: {args:?}");

    let outcome = Session::new(&config)
        .wrap_err("не удалось открыть HTTP-сессию")
        .and_then(|session| {
            if args.clear_cache {
                session.clear_cache().wrap_err("не удалось очистить кеш")?;
            }
            execute(&args, &session, &config)
        });
    ExitCode::from(conclude(outcome))
}

/// Build the report for `args.mode` and render it. Nothing is rendered
/// unless the whole report was built.
fn execute(args: &Args, session: &dyn Fetch, config: &Config) -> Result<()> {
    let mut progress = TermProgress::new();
    let table = runner::run(args.mode, session, config, &mut progress)
        .wrap_err_with(|| format!("режим {}", args.mode))?;

    // Download mode writes its own file and has nothing to render.
    let Some(table) = table else { return Ok(()) };

    let kind = OutputKind::from_name(args.output.as_deref());
    render(&table, kind, args.mode.name(), config)?;
    Ok(())
}

/// Log the outcome once and pick the process exit status.
fn conclude(outcome: Result<()>) -> u8 {
    match outcome {
        Ok(()) => {
            info!("Парсер успешно завершил свою работу");
            0
        }
        Err(report) => {
            error!("Произошла ошибка в процессе выполнения парсера: {report:#}");
            1
        }
    }
}
