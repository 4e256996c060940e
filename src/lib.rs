pub mod cmd_handler;
pub mod print;
pub mod record_store;
pub mod search;

use anyhow::{Context, Result};
use log::debug;

use cmd_handler::Request;
use record_store::Record;

/// Execute a resolved request: load the records, run the search, print the
/// rendered result. The bundled dataset text is injected by the caller and
/// used only when the request names no file.
pub fn run(request: &Request, default_dataset: &str) -> Result<()> {
    let records = load_records(request, default_dataset)?;
    debug!("loaded {} records", records.len());

    let output = match request {
        Request::Query { field, value, .. } => {
            let matches = search::find_matches(&records, field, value);
            debug!("{} records match on {field}", matches.len());
            print::render_matches(&matches)
        }
        Request::FindDuplicates { field, .. } => {
            let groups = search::find_duplicates(&records, field);
            debug!("{} duplicate groups on {field}", groups.len());
            print::render_duplicates(&groups)
        }
    };

    println!("{output}");
    Ok(())
}

fn load_records(request: &Request, default_dataset: &str) -> Result<Vec<Record>> {
    match request.file() {
        Some(path) => record_store::load(path),
        None => record_store::parse(default_dataset).context("parsing bundled dataset"),
    }
}
