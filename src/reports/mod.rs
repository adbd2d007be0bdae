// src/reports/mod.rs
//! # Report builders
//!
//! Each submodule knows how to read one family of pages and shape what it
//! finds into a [`ReportTable`](crate::table::ReportTable):
//!
//! - `whats_new` – changelog index → one row per "What's New" article.
//! - `latest_versions` – documentation sidebar → version / status rows.
//! - `download` – download page → saves the documentation archive (no table).
//! - `pep` – PEP numerical index vs. each PEP page → status counts.
//!
//! ## Conventions
//! - Pages come in through [`fetch`](crate::core::fetch) and are queried only
//!   with [`locate`](crate::core::locate) / [`locate_all`](crate::core::locate_all).
//! - The first page of a report is foundational: if it cannot be fetched the
//!   builder fails. Per-item pages are not: a fetch failure there is collected,
//!   logged once as a batch, and the item is skipped.
//! - A missing tag or attribute is always fatal for the builder.
//!
//! Builders don't render and don't decide where output goes; `runner` does.
use tracing::error;

use crate::error::NotFound;

pub mod download;
pub mod latest_versions;
pub mod pep;
pub mod whats_new;

/// Batch-log per-item fetch failures at error level.
pub(crate) fn log_connection_errors(errors: &[NotFound]) {
    if errors.is_empty() {
        return;
    }
    let lines: Vec<String> = errors
        .iter()
        .map(|e| format!("Невозможно подключиться: {e}"))
        .collect();
    error!("{}", lines.join("\n"));
}
