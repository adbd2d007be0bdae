// src/render.rs
//
// Output strategies for a finished report: plain lines, a boxed table,
// or a timestamped CSV file under `results/`.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local};
use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use tracing::info;

use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::file::write_table_csv;
use crate::table::ReportTable;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputKind {
    #[default]
    Plain,
    Pretty,
    File,
}

impl OutputKind {
    /// Unknown or absent names fall back to `Plain`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("pretty") => OutputKind::Pretty,
            Some("file") => OutputKind::File,
            _ => OutputKind::Plain,
        }
    }
}

/// What a render produced, for callers that care.
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered {
    Console,
    Saved(PathBuf),
}

/// Render to stdout, or to `results/` for `OutputKind::File`.
pub fn render(table: &ReportTable, kind: OutputKind, report_name: &str, config: &Config) -> Result<Rendered> {
    match kind {
        OutputKind::Plain | OutputKind::Pretty => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            render_console(table, kind, &mut lock).map_err(|e| ScrapeError::io("<stdout>", e))?;
            Ok(Rendered::Console)
        }
        OutputKind::File => {
            let path = save_csv(table, report_name, config, Local::now())?;
            Ok(Rendered::Saved(path))
        }
    }
}

/// Plain or pretty text into any writer. `File` is treated as plain.
pub fn render_console<W: Write>(table: &ReportTable, kind: OutputKind, w: &mut W) -> io::Result<()> {
    match kind {
        OutputKind::Pretty => writeln!(w, "{}", pretty_table(table)),
        OutputKind::Plain | OutputKind::File => {
            for record in table.records() {
                writeln!(w, "{}", record.join(" "))?;
            }
            Ok(())
        }
    }
}

pub fn pretty_table(table: &ReportTable) -> Table {
    let mut out = Table::new();
    out.load_preset(presets::ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(table.header());
    for r in table.rows() {
        out.add_row(r);
    }
    for col in out.column_iter_mut() {
        col.set_cell_alignment(CellAlignment::Left);
    }
    out
}

/// `{report_name}_{timestamp}.csv`
pub fn csv_file_name(report_name: &str, at: &DateTime<Local>, datetime_format: &str) -> String {
    format!("{report_name}_{}.csv", at.format(datetime_format))
}

pub fn save_csv(table: &ReportTable, report_name: &str, config: &Config, at: DateTime<Local>) -> Result<PathBuf> {
    let name = csv_file_name(report_name, &at, &config.datetime_format);
    let path = write_table_csv(table, &config.results_dir(), &name)?;
    info!("Файл с результатами был сохранён: {}", path.display());
    Ok(path)
}
