use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use thiserror::Error;

pub const QUERY_USAGE: &str =
    "Usage: bin/search_client query --field=FIELD --value=VALUE --file=FILE";
pub const DUPLICATES_USAGE: &str =
    "Usage: bin/search_client find_duplicates --field=FIELD --file=FILE";

/// Top-level usage, shown when no command is given.
pub const USAGE: &str = "Usage: bin/search_client query --field=FIELD --value=VALUE --file=FILE\n       bin/search_client find_duplicates --field=FIELD --file=FILE";

/// CLI application that searches client records loaded from a JSON file
#[derive(Parser, Debug)]
#[command(name = "search_client", author, version, about, long_about = None)]
pub struct CmdArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print clients whose field contains the given value
    Query {
        /// Field to match against, e.g. name or email
        #[arg(long)]
        field: Option<String>,

        /// Substring the field value must contain
        #[arg(long)]
        value: Option<String>,

        /// JSON file to load instead of the bundled dataset
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print groups of clients sharing the same value for a field
    #[command(name = "find_duplicates")]
    FindDuplicates {
        /// Field to group by, e.g. name or email
        #[arg(long)]
        field: Option<String>,

        /// JSON file to load instead of the bundled dataset
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// A command with all required options present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Query {
        field: String,
        value: String,
        file: Option<PathBuf>,
    },
    FindDuplicates {
        field: String,
        file: Option<PathBuf>,
    },
}

impl Request {
    pub fn file(&self) -> Option<&Path> {
        match self {
            Request::Query { file, .. } | Request::FindDuplicates { file, .. } => file.as_deref(),
        }
    }
}

#[derive(Debug)]
pub enum ParseOutcome {
    /// A runnable request.
    Ready(Request),
    /// Usage reminder or help text; printed as-is, exit 0.
    Usage(String),
}

/// Option-syntax failures. These exit with code 1, unlike the
/// missing-required-option case which is only a usage reminder.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("{}", .0.render())]
    Other(clap::Error),
}

/// Parse command-line arguments, folding clap's error kinds into the
/// utility's taxonomy. Syntax errors are surfaced before the semantic
/// required-option checks, which only ever downgrade to a usage reminder.
pub fn parse<I, T>(args: I) -> Result<ParseOutcome, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = match CmdArgs::try_parse_from(args) {
        Ok(cmd) => cmd,
        Err(err) => {
            return match err.kind() {
                ErrorKind::UnknownArgument => Err(ParseError::InvalidOption(offending_arg(&err))),
                ErrorKind::InvalidValue => Err(ParseError::MissingArgument(offending_arg(&err))),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(ParseOutcome::Usage(err.render().to_string()))
                }
                _ => Err(ParseError::Other(err)),
            };
        }
    };

    match cmd.command {
        Some(command) => Ok(resolve(command)),
        None => Ok(ParseOutcome::Usage(USAGE.to_string())),
    }
}

fn resolve(command: Command) -> ParseOutcome {
    match command {
        Command::Query { field, value, file } => match (required(field), required(value)) {
            (Some(field), Some(value)) => {
                ParseOutcome::Ready(Request::Query { field, value, file })
            }
            _ => ParseOutcome::Usage(QUERY_USAGE.to_string()),
        },
        Command::FindDuplicates { field, file } => match required(field) {
            Some(field) => ParseOutcome::Ready(Request::FindDuplicates { field, file }),
            None => ParseOutcome::Usage(DUPLICATES_USAGE.to_string()),
        },
    }
}

// An empty option value counts as missing.
fn required(opt: Option<String>) -> Option<String> {
    opt.filter(|value| !value.is_empty())
}

fn offending_arg(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
