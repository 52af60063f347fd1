use std::fs;
use std::path::Path;

use crate::domain::Entry;
use crate::errors::FinFeedResult;

/// Write the entries as a pretty-printed JSON array, overwriting `path`.
/// serde_json leaves non-ASCII text verbatim, matching the UTF-8 contract.
pub fn write_json(entries: &[Entry], path: impl AsRef<Path>) -> FinFeedResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}
