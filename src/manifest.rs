use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::check;
use crate::diagnostics::CheckError;
use crate::report::Format;

pub const MANIFEST_NAME: &str = "lang-cmp.toml";

/// Defaults for `run`, read from the `[run]` table of lang-cmp.toml.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub format: Option<Format>,
    pub fail_fast: bool,
    pub filter: Option<String>,
    pub skip: Vec<String>,
}

// ---- TOML deserialization types ----

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    #[serde(default)]
    run: TomlRun,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlRun {
    format: Option<String>,
    #[serde(default)]
    fail_fast: bool,
    filter: Option<String>,
    #[serde(default)]
    skip: Vec<String>,
}

// ---- Manifest discovery ----

/// Walk from start_dir up to .git or FS root, looking for lang-cmp.toml.
pub fn find_manifest_walk(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        // .git may be a file (worktrees) or a directory
        if dir.join(".git").exists() {
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}

// ---- Parsing & validation ----

pub fn parse_manifest(content: &str, manifest_path: &Path) -> Result<RunSettings, CheckError> {
    let manifest: TomlManifest = toml::from_str(content).map_err(|e| {
        CheckError::manifest(
            format!("{MANIFEST_NAME}: invalid syntax: {e}"),
            manifest_path.to_path_buf(),
        )
    })?;
    let run = manifest.run;

    let format = run
        .format
        .as_deref()
        .map(Format::parse)
        .transpose()
        .map_err(|msg| {
            CheckError::manifest(format!("{MANIFEST_NAME}: [run] {msg}"), manifest_path.to_path_buf())
        })?;

    for name in &run.skip {
        if check::find(name).is_err() {
            return Err(CheckError::manifest(
                format!("{MANIFEST_NAME}: [run] skip: unknown check '{name}'"),
                manifest_path.to_path_buf(),
            ));
        }
    }

    Ok(RunSettings {
        format,
        fail_fast: run.fail_fast,
        filter: run.filter,
        skip: run.skip,
    })
}

pub fn load(manifest_path: &Path) -> Result<RunSettings, CheckError> {
    let content = std::fs::read_to_string(manifest_path).map_err(|e| {
        CheckError::manifest(
            format!("{MANIFEST_NAME}: could not read file: {e}"),
            manifest_path.to_path_buf(),
        )
    })?;
    parse_manifest(&content, manifest_path)
}

/// Load the nearest lang-cmp.toml above start_dir, or defaults if none exists.
pub fn discover(start_dir: &Path) -> Result<RunSettings, CheckError> {
    match find_manifest_walk(start_dir) {
        Some(path) => load(&path),
        None => Ok(RunSettings::default()),
    }
}
