use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("check '{check}' failed at `{location}`: expected {expected}, got {actual}")]
    Mismatch {
        check: &'static str,
        location: &'static str,
        expected: String,
        actual: String,
    },

    #[error("unknown check '{name}'")]
    UnknownCheck { name: String },

    #[error("Render error: {msg}")]
    Render { msg: String },

    #[error("I/O error: {msg}")]
    Io { msg: String, path: PathBuf },

    #[error("Manifest error: {msg}")]
    Manifest { msg: String, path: PathBuf },
}

impl CheckError {
    pub fn mismatch(
        check: &'static str,
        location: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Mismatch {
            check,
            location,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn unknown_check(name: impl Into<String>) -> Self {
        Self::UnknownCheck { name: name.into() }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render { msg: msg.into() }
    }

    pub fn io(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Io { msg: msg.into(), path }
    }

    pub fn manifest(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Manifest { msg: msg.into(), path }
    }
}

/// Print a CheckError to stderr in the CLI's `error: ...` style.
pub fn render_error(err: &CheckError) {
    match err {
        CheckError::Io { msg, path } | CheckError::Manifest { msg, path } => {
            eprintln!("error: {msg}");
            eprintln!("  --> {}", path.display());
        }
        other => eprintln!("error: {other}"),
    }
}
