// src/runner.rs
use std::fmt;

use crate::{
    config::Config,
    core::Fetch,
    error::Result,
    progress::Progress,
    reports,
    table::ReportTable,
};

/// Which report to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    /// Name used on the command line and in result file names.
    pub fn name(self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level dispatch: build the report for `mode` with one shared session.
/// `Download` writes a file and yields no table.
pub fn run(
    mode: Mode,
    session: &dyn Fetch,
    config: &Config,
    progress: &mut dyn Progress,
) -> Result<Option<ReportTable>> {
    match mode {
        Mode::WhatsNew => reports::whats_new::build(session, config, progress).map(Some),
        Mode::LatestVersions => reports::latest_versions::build(session, config).map(Some),
        Mode::Download => reports::download::run(session, config).map(|_| None),
        Mode::Pep => reports::pep::build(session, config, progress).map(Some),
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn names_match_command_line_values() {
        for m in Mode::value_variants() {
            let value = m.to_possible_value().unwrap();
            assert_eq!(value.get_name(), m.name());
            assert_eq!(m.to_string(), m.name());
        }
    }
}
