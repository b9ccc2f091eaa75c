use anstream::println;
use serde::Serialize;
use tracing::debug;

use super::{OutputFormat, Result, print_json};

#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct ComparisonEntry<'a> {
    left: &'a str,
    right: &'a str,
    result: i8,
}

/// Prints `-1`, `0` or `1` for how `left` orders against `right`.
pub fn compare(left: &str, right: &str, format: OutputFormat) -> Result<()> {
    let entry = comparison_entry(left, right)?;
    debug!(left, right, result = entry.result, "compared versions");

    match format {
        OutputFormat::Text => println!("{}", entry.result),
        OutputFormat::Json => print_json(&entry)?,
    }

    Ok(())
}

fn comparison_entry<'a>(left: &'a str, right: &'a str) -> Result<ComparisonEntry<'a>> {
    let result = vercmp_version::compare(left, right)? as i8;
    Ok(ComparisonEntry {
        left,
        right,
        result,
    })
}
