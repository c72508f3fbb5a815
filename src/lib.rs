//! Assignment semantics, checked.
//!
//! Each check in [`check::CHECKS`] exercises one way of writing into a
//! place: by name, through a reference passed to a helper, or into a
//! temporary. [`report::Report`] runs a selection and renders the outcome.

pub mod check;
pub mod diagnostics;
pub mod manifest;
pub mod report;

pub mod adt;
pub mod assign;

use std::path::Path;

use check::Check;
use diagnostics::CheckError;
use manifest::RunSettings;
use report::{Format, Report};

/// Options for one `run`, already merged from the command line and manifest.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub names: Vec<String>,
    pub filter: Option<String>,
    pub skip: Vec<String>,
    pub format: Option<Format>,
    pub fail_fast: bool,
}

impl RunOptions {
    /// Fill anything the command line left unset from the manifest.
    pub fn merge(mut self, settings: RunSettings) -> Self {
        if self.filter.is_none() {
            self.filter = settings.filter;
        }
        if self.format.is_none() {
            self.format = settings.format;
        }
        self.fail_fast |= settings.fail_fast;
        self.skip.extend(settings.skip);
        self
    }

    pub fn format(&self) -> Format {
        self.format.unwrap_or(Format::Text)
    }
}

pub fn selected_checks(options: &RunOptions) -> Result<Vec<&'static Check>, CheckError> {
    check::resolve(&options.names, options.filter.as_deref(), &options.skip)
}

/// Run the selected checks and render the report in the requested format.
pub fn run_checks(options: &RunOptions) -> Result<(Report, String), CheckError> {
    let checks = selected_checks(options)?;
    let report = Report::run(&checks, options.fail_fast);
    let rendered = report.render(options.format())?;
    Ok((report, rendered))
}

/// Write a rendered report to `path`.
pub fn write_report(rendered: &str, path: &Path) -> Result<(), CheckError> {
    std::fs::write(path, rendered).map_err(|e| {
        CheckError::io(format!("failed to write report: {e}"), path.to_path_buf())
    })
}
