//! Parsing of user-supplied history text.

use std::path::Path;

use rulecast_core::errors::{IngestError, SetLiteralError};
use rulecast_core::models::{ItemId, ItemSet};

use crate::set_literal::{looks_like_literal, parse_item_set};

/// Parse a history given either as a set literal (`{'a', 'b'}`) or as bare
/// comma-separated names (`a, b`). Blank input is an empty history.
pub fn parse_history(input: &str) -> Result<ItemSet, SetLiteralError> {
    if input.trim().is_empty() {
        return Ok(ItemSet::new());
    }
    if looks_like_literal(input) {
        return parse_item_set(input);
    }

    let mut history = ItemSet::new();
    let mut offset = 0;
    for piece in input.split(',') {
        let leading = piece.len() - piece.trim_start().len();
        let item = ItemId::parse(piece.trim()).map_err(|_| SetLiteralError::BlankItem {
            offset: offset + leading,
        })?;
        history.insert(item);
        offset += piece.len() + 1;
    }
    Ok(history)
}

/// Build a history from separate names, as passed on a command line.
pub fn history_from_names<I, S>(names: I) -> Result<ItemSet, SetLiteralError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut history = ItemSet::new();
    for name in names {
        history.extend_from(&parse_history(name.as_ref())?);
    }
    Ok(history)
}

/// Parse one history per line. Blank lines and lines starting with `#` are
/// skipped; a bad line is reported with its 1-based line number.
pub fn parse_history_lines(input: &str) -> Result<Vec<ItemSet>, IngestError> {
    let mut histories = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let history = parse_history(trimmed).map_err(|e| IngestError::MalformedRow {
            line: index as u64 + 1,
            reason: e.to_string(),
        })?;
        histories.push(history);
    }
    Ok(histories)
}

/// Read a histories file, one history per line.
pub fn read_histories(path: &Path) -> Result<Vec<ItemSet>, IngestError> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_history_lines(&text)
}
