use anstream::println;
use serde::Serialize;
use tracing::debug;

use super::{OutputFormat, Result, print_json};

#[derive(Serialize)]
struct MaxEntry<'a> {
    left: &'a str,
    right: &'a str,
    max: &'a str,
}

/// Prints whichever of `left` and `right` is higher, `left` on a tie.
pub fn max(left: &str, right: &str, format: OutputFormat) -> Result<()> {
    let max = vercmp_version::higher_of(left, right)?;
    debug!(left, right, max, "picked higher version");

    match format {
        OutputFormat::Text => println!("{max}"),
        OutputFormat::Json => print_json(&MaxEntry { left, right, max })?,
    }

    Ok(())
}
