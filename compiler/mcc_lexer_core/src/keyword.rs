//! Reserved words and the keyword boundary rule.
//!
//! Keywords are matched against the raw bytes before identifier scanning,
//! so a reserved word can never come out as an identifier. Whether a keyword
//! may be followed directly by identifier characters is governed by
//! [`KeywordBoundary`].

use crate::raw_scanner::is_ident_continue;
use crate::Cursor;

/// The closed set of reserved words, in match order.
pub const KEYWORDS: [&str; 5] = ["return", "if", "else", "while", "for"];

/// What must follow a keyword for it to count as one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeywordBoundary {
    /// The byte after the keyword must not continue an identifier.
    /// `returns` is a single identifier.
    #[default]
    Strict,
    /// Any text starting with a keyword yields the keyword. `returns` is the
    /// keyword `return` followed by the identifier `s`. Kept for
    /// compatibility with output produced by older builds.
    Prefix,
}

impl KeywordBoundary {
    /// Parse a command-line spelling (`strict` or `prefix`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(KeywordBoundary::Strict),
            "prefix" => Some(KeywordBoundary::Prefix),
            _ => None,
        }
    }
}

/// Length of the keyword at the cursor, if any.
pub(crate) fn match_keyword(cursor: &Cursor<'_>, boundary: KeywordBoundary) -> Option<u32> {
    KEYWORDS.iter().find_map(|kw| {
        if !cursor.starts_with(kw.as_bytes()) {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "keywords are at most 6 bytes"
        )]
        let len = kw.len() as u32;
        match boundary {
            KeywordBoundary::Strict if is_ident_continue(cursor.byte_at_offset(len)) => None,
            KeywordBoundary::Strict | KeywordBoundary::Prefix => Some(len),
        }
    })
}
