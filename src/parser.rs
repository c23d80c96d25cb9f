//! Parsing of raw status listings into [`StatusEntry`] values.
//!
//! Both `git status --porcelain` and `git show --name-status` produce one
//! entry per line: a kind token, a separator and a path. Only the first
//! separator splits the line, so paths may contain the separator themselves.

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::{ChangeKind, StatusEntry};

/// Parses a single status line.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] if the line is empty, lacks the separator,
/// has an empty path or opens a quote it never closes.
pub fn parse_line(line: &str, separator: char) -> Result<StatusEntry> {
    if line.is_empty() {
        return Err(malformed(line, "empty line"));
    }

    let (token, raw_path) = line
        .split_once(separator)
        .ok_or_else(|| malformed(line, "missing separator between kind and path"))?;

    let path = normalize_path(raw_path).ok_or_else(|| malformed(line, "invalid path"))?;

    Ok(StatusEntry::new(ChangeKind::from_token(token), path))
}

/// Parses a whole listing, one entry per line.
///
/// The trailing newline of the block is dropped before lines are counted, so
/// an empty listing yields no entries.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] for the first line that cannot be parsed,
/// including blank lines inside the block.
#[instrument(skip(raw), fields(raw_length = raw.len(), separator = ?separator))]
pub fn parse_snapshot(raw: &str, separator: char) -> Result<Vec<StatusEntry>> {
    let body = raw.trim_end_matches(['\n', '\r']);
    if body.is_empty() {
        debug!("Empty status listing");
        return Ok(Vec::new());
    }

    let entries = body
        .lines()
        .map(|line| parse_line(line, separator))
        .collect::<Result<Vec<_>>>()?;

    debug!(entries = entries.len(), "Status listing parsed");
    Ok(entries)
}

// Git wraps paths containing whitespace in double quotes.
fn normalize_path(raw: &str) -> Option<&str> {
    let path = raw.trim();
    let path = if path.starts_with('"') {
        path.strip_prefix('"')?.strip_suffix('"')?
    } else {
        path
    };
    (!path.is_empty()).then_some(path)
}

fn malformed(line: &str, reason: &'static str) -> Error {
    Error::MalformedLine {
        line: line.to_string(),
        reason,
    }
}
