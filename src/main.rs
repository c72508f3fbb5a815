use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lang_cmp::diagnostics::{CheckError, render_error};
use lang_cmp::manifest;
use lang_cmp::report::Format;
use lang_cmp::{RunOptions, check};

#[derive(Parser)]
#[command(name = "lang-cmp", version, about = "Assignment semantics checks")]
struct Cli {
    /// Path to a lang-cmp.toml (defaults to the nearest one above the current dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available check
    List,
    /// Run checks and report pass/fail
    Run {
        /// Exact check names to run (defaults to all)
        names: Vec<String>,
        /// Only run checks whose name contains this substring
        #[arg(long)]
        filter: Option<String>,
        /// Output format: "text" (default) or "json"
        #[arg(long)]
        format: Option<String>,
        /// Stop at the first failing check
        #[arg(long)]
        fail_fast: bool,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_settings(config: Option<&PathBuf>) -> Result<manifest::RunSettings, CheckError> {
    match config {
        Some(path) => manifest::load(path),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| CheckError::io(format!("cannot read current dir: {e}"), PathBuf::from(".")))?;
            manifest::discover(&cwd)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for c in check::CHECKS {
                println!("{:<28} {}", c.name, c.category.as_str());
            }
        }
        Commands::Run { names, filter, format, fail_fast, output } => {
            let format = match format.as_deref().map(Format::parse).transpose() {
                Ok(f) => f,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };

            let settings = match load_settings(cli.config.as_ref()) {
                Ok(s) => s,
                Err(err) => {
                    render_error(&err);
                    std::process::exit(1);
                }
            };

            let options = RunOptions { names, filter, skip: Vec::new(), format, fail_fast }
                .merge(settings);

            let (report, rendered) = match lang_cmp::run_checks(&options) {
                Ok(r) => r,
                Err(err) => {
                    render_error(&err);
                    std::process::exit(1);
                }
            };

            match output {
                Some(path) => {
                    if let Err(err) = lang_cmp::write_report(&rendered, &path) {
                        render_error(&err);
                        std::process::exit(1);
                    }
                    eprintln!("report written to {}", path.display());
                }
                None => print!("{rendered}"),
            }

            if !report.is_success() {
                eprintln!("{} check(s) failed", report.failed());
                std::process::exit(1);
            }
        }
    }
}
