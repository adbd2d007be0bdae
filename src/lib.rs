// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod reports;

pub mod csv;
pub mod file;
pub mod log;
pub mod progress;
pub mod render;
pub mod runner;
pub mod store;
pub mod table;
pub mod tally;

pub use error::{NotFound, ScrapeError, TagNotFound};
pub use table::ReportTable;
