// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Range expansion for free-form serial-number entry.
//!
//! Operators type single values, comma/newline separated lists, and numeric
//! ranges in one text field (e.g. `"0001-0010, SN221, 00200-00205"`). This
//! module expands that text into the flat, ordered list of discrete tokens
//! it denotes.
//!
//! ## Invariants
//!
//! - Expansion is total: malformed ranges degrade to literal tokens, empty
//!   input yields an empty list, and nothing here can fail or panic.
//! - Segment order is preserved in the output (display consistency only;
//!   downstream set operations do not depend on it).
//! - Zero-padding width for generated range members is taken from the
//!   range's start side, never from its end.

use crate::segment::SegmentSpec;
use crate::token::SerialToken;

/// Expands free-form operator text into discrete serial tokens.
///
/// The text is split on commas and newlines; each trimmed, non-empty
/// segment is classified and expanded in order. A segment like
/// `"0001-0004"` contributes `["0001", "0002", "0003", "0004"]`; anything
/// that does not classify as a numeric range contributes itself as one
/// literal token.
///
/// Generated range members are zero-padded to the character length of the
/// range's start side. A member whose decimal digits exceed that width is
/// rendered unpadded at its natural length (`"9-100"` yields `"9"` through
/// `"100"`), which is accepted rather than treated as an error.
///
/// # Arguments
///
/// * `text` - Arbitrary operator input; empty or whitespace-only text
///   yields an empty list
#[must_use]
pub fn expand_serial_text(text: &str) -> Vec<SerialToken> {
    let mut tokens: Vec<SerialToken> = Vec::new();

    for piece in text.split([',', '\n']) {
        match SegmentSpec::classify(piece) {
            Some(SegmentSpec::Literal(token)) => tokens.push(token),
            Some(SegmentSpec::Range { start, end }) => {
                expand_range(&start, &end, &mut tokens);
            }
            None => {}
        }
    }

    tokens
}

/// Expands one classified numeric range into zero-padded member tokens.
///
/// The classifier guarantees both sides parse and `start ≤ end`; a side
/// that no longer parses here contributes nothing rather than panicking.
fn expand_range(start: &str, end: &str, tokens: &mut Vec<SerialToken>) {
    let (Some(start_value), Some(end_value)) =
        (start.parse::<u64>().ok(), end.parse::<u64>().ok())
    else {
        return;
    };

    let width: usize = start.chars().count();
    for value in start_value..=end_value {
        tokens.push(SerialToken::from_trimmed(format!("{value:0width$}")));
    }
}
