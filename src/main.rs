use std::env;
use std::process::ExitCode;

use search_client::cmd_handler::{self, ParseOutcome};

/// Sample dataset used when --file is not given.
static DEFAULT_DATASET: &str = include_str!("../data/clients.json");

fn main() -> ExitCode {
    env_logger::init();

    match cmd_handler::parse(env::args()) {
        Ok(ParseOutcome::Usage(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(ParseOutcome::Ready(request)) => match search_client::run(&request, DEFAULT_DATASET) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
        // Option-syntax errors go to stdout so callers capturing output
        // see the diagnostic, matching the usage-reminder behavior.
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
