use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EntryParseError;
use crate::models::HistoryEntry;

// [0-9] rather than \d, which also matches non-ASCII digits.
// The command may span several physical lines.
static ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r": (?P<beginning_time>[0-9]{10}):(?P<elapsed_seconds>[0-9]);(?P<command>(?s:.*))",
    )
    .expect("The regex to parse history entries should compile")
});

/// Why a line was skipped during a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The line does not match the entry format
    Parse,
    /// The line is not valid UTF-8
    Decode,
}

/// A recoverable problem with a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the file
    pub line_number: usize,
    /// Line content (lossily decoded for [`WarningKind::Decode`])
    pub raw: String,
    pub kind: WarningKind,
}

/// Result of parsing one line of a history file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(HistoryEntry),
    /// Empty or whitespace-only line, skipped without a warning
    Blank,
    Skipped(LineWarning),
}

/// Parse one history line into an entry
///
/// The pattern is searched, not anchored, so leading whitespace (or other text)
/// before the `:` is tolerated. The command is everything after the first `;`
/// following the elapsed digit, trimmed. For a multi-line command it keeps
/// the embedded newlines.
///
/// # Examples
///
/// ```
/// use zsh_history_cleaner::parse_entry;
///
/// let entry = parse_entry(": 1557138761:0;for d in VWT.*; do l $d; done")?;
/// assert_eq!(entry.command(), "for d in VWT.*; do l $d; done");
/// assert_eq!(entry.beginning_time(), 1557138761);
/// # Ok::<(), zsh_history_cleaner::errors::EntryParseError>(())
/// ```
pub fn parse_entry(line: &str) -> Result<HistoryEntry, EntryParseError> {
    let error = || EntryParseError { line: line.to_string() };

    let captures = ENTRY_REGEX.captures(line).ok_or_else(error)?;
    let beginning_time = captures["beginning_time"].parse::<u64>().map_err(|_| error())?;
    let elapsed_seconds = captures["elapsed_seconds"].parse::<u8>().map_err(|_| error())?;
    let command = captures["command"].trim();

    Ok(HistoryEntry::new(line, beginning_time, elapsed_seconds, command))
}

/// Parse one logical line, as produced by
/// [`HistoryLines`](crate::parsers::lines::HistoryLines), starting at physical
/// line `line_number` (1-based)
///
/// Never fails: undecodable and malformed lines come back as
/// [`ParsedLine::Skipped`] so a bulk load can report them and carry on.
pub fn parse_line(line_number: usize, bytes: &[u8]) -> ParsedLine {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            return ParsedLine::Skipped(LineWarning {
                line_number,
                raw: String::from_utf8_lossy(bytes).into_owned(),
                kind: WarningKind::Decode,
            });
        }
    };

    if text.trim().is_empty() {
        return ParsedLine::Blank;
    }

    match parse_entry(text) {
        Ok(entry) => ParsedLine::Entry(entry),
        Err(e) => {
            ParsedLine::Skipped(LineWarning { line_number, raw: e.line, kind: WarningKind::Parse })
        }
    }
}
