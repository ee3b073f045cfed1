//! Field scanner shared by the in-place and copying tokenizers.
//!
//! The scanner rewrites the line it is given and reports each field as a byte
//! span of the rewritten line. Every consumed separator becomes
//! [`TERMINATOR`]. In quote-aware mode the content is compacted towards the
//! front of the line as quotes are dropped, and the bytes freed at the end
//! are set to [`TERMINATOR`] as well.

use std::ops::Range;

use memchr::memchr;

use crate::config::{Dialect, QuotePolicy};
use crate::error::{Error, Result};

/// Byte written over every separator consumed by tokenization.
pub const TERMINATOR: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    InsideQuotes,
}

pub(crate) fn scan_fields(line: &mut [u8], dialect: &Dialect) -> Result<Vec<Range<usize>>> {
    if dialect.quoting() {
        scan_quoted(line, dialect)
    } else {
        Ok(scan_plain(line, dialect.delimiter()))
    }
}

fn scan_plain(line: &mut [u8], delimiter: u8) -> Vec<Range<usize>> {
    let mut fields = Vec::new();
    let mut start = 0;

    while let Some(pos) = memchr(delimiter, &line[start..]) {
        let end = start + pos;
        line[end] = TERMINATOR;
        fields.push(start..end);
        start = end + 1;
    }
    fields.push(start..line.len());

    fields
}

/// Offset of the opening quote of a field left open at end of line.
fn unterminated_quote(line: &[u8], delimiter: u8, quote: u8) -> Option<usize> {
    let mut state = QuoteState::Unquoted;
    let mut at_field_start = true;
    let mut opened_at = 0;
    let mut read = 0;

    while read < line.len() {
        let byte = line[read];
        match state {
            QuoteState::InsideQuotes if byte == quote => {
                if line.get(read + 1) == Some(&quote) {
                    read += 2;
                    continue;
                }
                state = QuoteState::Unquoted;
            }
            QuoteState::InsideQuotes => {}
            QuoteState::Unquoted if byte == delimiter => {
                at_field_start = true;
                read += 1;
                continue;
            }
            QuoteState::Unquoted if byte == quote && at_field_start => {
                state = QuoteState::InsideQuotes;
                opened_at = read;
            }
            QuoteState::Unquoted => {}
        }
        at_field_start = false;
        read += 1;
    }

    (state == QuoteState::InsideQuotes).then_some(opened_at)
}

fn scan_quoted(line: &mut [u8], dialect: &Dialect) -> Result<Vec<Range<usize>>> {
    let delimiter = dialect.delimiter();
    let quote = dialect.quote();
    let len = line.len();

    // Strict mode rejects before rewriting anything.
    if dialect.policy() == QuotePolicy::Strict {
        if let Some(position) = unterminated_quote(line, delimiter, quote) {
            return Err(Error::MalformedRecord { position });
        }
    }

    let mut fields = Vec::new();
    let mut state = QuoteState::Unquoted;
    let mut at_field_start = true;
    let mut field_start = 0;
    let mut write = 0;
    let mut read = 0;

    // write <= read throughout, so compaction never clobbers unread input.
    while read < len {
        let byte = line[read];
        match state {
            QuoteState::InsideQuotes if byte == quote => {
                if read + 1 < len && line[read + 1] == quote {
                    line[write] = quote;
                    write += 1;
                    read += 2;
                    continue;
                }
                state = QuoteState::Unquoted;
            }
            QuoteState::InsideQuotes => {
                line[write] = byte;
                write += 1;
            }
            QuoteState::Unquoted if byte == delimiter => {
                fields.push(field_start..write);
                line[write] = TERMINATOR;
                write += 1;
                field_start = write;
                at_field_start = true;
                read += 1;
                continue;
            }
            QuoteState::Unquoted if byte == quote && at_field_start => {
                state = QuoteState::InsideQuotes;
            }
            QuoteState::Unquoted => {
                line[write] = byte;
                write += 1;
            }
        }
        at_field_start = false;
        read += 1;
    }

    fields.push(field_start..write);
    line[write..].fill(TERMINATOR);

    Ok(fields)
}
