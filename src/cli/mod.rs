//! Command-line argument definitions

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ScanError;
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "skillscan")]
#[command(about = "Extract known skill keywords from a text file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text file to scan (UTF-8)
    pub file_path: PathBuf,

    /// TOML file with a `skills = [...]` list that replaces the built-in vocabulary
    #[arg(long, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Job description to compare against; reports matched and missing skills
    #[arg(long, value_name = "FILE")]
    pub job: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of argument parsing
#[derive(Debug)]
pub enum Invocation {
    /// Scan a file
    Scan(Cli),
    /// `--help` or `--version` was requested; print the text and exit successfully
    Info(String),
}

/// Usage line, e.g. `Usage: skillscan [OPTIONS] <FILE_PATH>`
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Parse process arguments (including the program name).
///
/// Any parse failure other than help or version collapses into
/// [`ScanError::Usage`].
pub fn parse<I, T>(args: I) -> Result<Invocation, ScanError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Scan(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Invocation::Info(err.to_string()))
            }
            _ => Err(ScanError::Usage {
                usage: format!("{}\n\nFor more information, try '--help'.", usage()),
            }),
        },
    }
}
