//! Card file import and export.
//!
//! The format is one `term,definition` record per line with no quoting.
//! Lines are split on every comma and only the first two fields are used,
//! so a definition that contains a comma does not survive a round trip.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::CardStore;
use crate::error::{FlashcardError, Result};
use crate::util::{read_to_string_limited, write_replacing};

/// Separator between term and definition.
pub const DELIMITER: char = ',';

/// What an import read from its file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Every line read, including ones that were skipped.
    pub lines_read: usize,
    /// Lines that produced a card.
    pub cards_loaded: usize,
    /// Lines without a delimiter.
    pub skipped: usize,
}

/// A parsed card line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub term: &'a str,
    pub definition: &'a str,
}

/// Parse one line. Returns `None` when the line has no delimiter.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let mut fields = line.trim().split(DELIMITER);
    let term = fields.next()?;
    let definition = fields.next()?;
    Some(ParsedLine { term, definition })
}

/// Overlay every card in `content` onto a copy of `current`.
///
/// Imported definitions replace existing ones for the same term, and later
/// lines replace earlier ones.
pub fn parse_cards(content: &str, current: &CardStore) -> (CardStore, ImportReport) {
    let mut merged = current.clone();
    let mut report = ImportReport::default();

    for (index, line) in content.lines().enumerate() {
        report.lines_read += 1;
        match parse_line(line) {
            Some(parsed) => {
                merged.upsert(parsed.term, parsed.definition);
                report.cards_loaded += 1;
            }
            None => {
                warn!(line = index + 1, "skipping card line without a delimiter");
                report.skipped += 1;
            }
        }
    }

    (merged, report)
}

/// Render `store` in the card file format.
pub fn serialize_cards(store: &CardStore) -> String {
    let mut out = String::new();
    for (term, definition) in store.iter() {
        out.push_str(term);
        out.push(DELIMITER);
        out.push_str(definition);
        out.push('\n');
    }
    out
}

/// Import cards from `path` on top of `current`.
///
/// Returns the merged store; `current` itself is never modified, so the
/// caller swaps the whole store in one step.
pub fn import_from(path: &Path, current: &CardStore) -> Result<(CardStore, ImportReport)> {
    if !path.exists() {
        return Err(FlashcardError::file_not_found(path));
    }

    let content = read_to_string_limited(path)?;
    let (merged, report) = parse_cards(&content, current);

    debug!(
        path = %path.display(),
        lines = report.lines_read,
        loaded = report.cards_loaded,
        skipped = report.skipped,
        "imported cards"
    );
    Ok((merged, report))
}

/// Export `store` to `path`, replacing the file. Returns the number of cards written.
pub fn export_to(path: &Path, store: &CardStore) -> Result<usize> {
    write_replacing(path, &serialize_cards(store))?;
    debug!(path = %path.display(), cards = store.len(), "exported cards");
    Ok(store.len())
}
