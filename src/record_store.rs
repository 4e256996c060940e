use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

/// A single client loaded from the input file: an ordered mapping from
/// field name to value. Fields beyond `name` and `email` pass through
/// untouched and keep their file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Value of `name` as a string, or `None` when the key is missing or
    /// the value is not a JSON string. Records without the field are
    /// skipped by the query engine, never treated as an error.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record(fields)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            match value {
                Value::String(text) => write!(f, "{key}: {text}")?,
                other => write!(f, "{key}: {other}")?,
            }
        }
        Ok(())
    }
}

/// Load a record collection from a JSON file. Fails when the file cannot
/// be read or does not hold a JSON array of objects.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("loading {}", path.display()))
}

/// Parse a record collection from in-memory JSON text, preserving the
/// order of records and of the fields within each record.
pub fn parse(text: &str) -> Result<Vec<Record>> {
    let root: Value = serde_json::from_str(text).context("parsing JSON")?;
    let rows = match root {
        Value::Array(rows) => rows,
        other => bail!("expected a top-level JSON array, got {other}"),
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(fields) => Ok(Record(fields)),
            other => bail!("row {i} is not a JSON object: {other}"),
        })
        .collect()
}
