use std::fmt::Write as _;

use serde::Serialize;

use crate::check::{Category, Check};
use crate::diagnostics::CheckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Result<Format, String> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{}'; expected 'text' or 'json'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub name: &'static str,
    pub category: Category,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn from_result(check: &Check, result: Result<(), CheckError>) -> Self {
        Self {
            name: check.name,
            category: check.category,
            passed: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Run `checks` in order. With `fail_fast`, stop after the first failure.
    pub fn run(checks: &[&Check], fail_fast: bool) -> Self {
        let mut outcomes = Vec::with_capacity(checks.len());
        for check in checks {
            let outcome = Outcome::from_result(check, check.run());
            let failed = !outcome.passed;
            outcomes.push(outcome);
            if failed && fail_fast {
                break;
            }
        }
        Self { outcomes }
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for o in &self.outcomes {
            let status = if o.passed { "PASS" } else { "FAIL" };
            let _ = write!(out, "{status} {} [{}]", o.name, o.category.as_str());
            if let Some(err) = &o.error {
                let _ = write!(out, ": {err}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "{} passed, {} failed", self.passed(), self.failed());
        out
    }

    pub fn render_json(&self) -> Result<String, CheckError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckError::render(format!("failed to serialize report: {e}")))
    }

    pub fn render(&self, format: Format) -> Result<String, CheckError> {
        match format {
            Format::Text => Ok(self.render_text()),
            Format::Json => self.render_json().map(|mut json| {
                json.push('\n');
                json
            }),
        }
    }
}
