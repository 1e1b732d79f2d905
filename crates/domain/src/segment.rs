// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Segment classification for free-form serial-number entry.
//!
//! A segment is one comma/newline-delimited piece of operator input. The
//! classifier is total: input that looks like a range but fails any range
//! requirement degrades to a literal token instead of raising an error, so
//! operator text is never rejected at this layer.

use crate::token::SerialToken;
use serde::{Deserialize, Serialize};

/// The classification of one trimmed input segment.
///
/// ## Invariants
///
/// - `Range` holds only when both sides are non-empty, consist entirely of
///   ASCII digits, fit in a `u64`, and `start ≤ end` numerically.
/// - Splitting happens at the first `-` only; segments with additional
///   hyphens are never re-split.
/// - Everything that is not a valid `Range` is a `Literal` of the whole
///   segment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentSpec {
    /// A single discrete serial-number value.
    Literal(SerialToken),
    /// A bounded numeric range, inclusive on both ends.
    Range {
        /// The range start as typed. Its character length defines the
        /// zero-padding width of every generated member.
        start: String,
        /// The range end as typed.
        end: String,
    },
}

impl SegmentSpec {
    /// Classifies one raw input segment.
    ///
    /// The segment is trimmed first. A trimmed-empty segment yields `None`
    /// (dropped by the caller); everything else classifies to `Some`.
    ///
    /// # Arguments
    ///
    /// * `segment` - One comma/newline-delimited piece of operator input
    #[must_use]
    pub fn classify(segment: &str) -> Option<Self> {
        let trimmed: &str = segment.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some((start, end)) = trimmed.split_once('-') {
            if let (Some(start_value), Some(end_value)) =
                (parse_decimal(start), parse_decimal(end))
            {
                if start_value <= end_value {
                    return Some(Self::Range {
                        start: start.to_owned(),
                        end: end.to_owned(),
                    });
                }
            }
        }

        Some(Self::Literal(SerialToken::from_trimmed(trimmed.to_owned())))
    }
}

/// Parses a range side as an unsigned decimal number.
///
/// Returns `None` unless the text is non-empty, all ASCII digits, and fits
/// in a `u64`. Anything rejected here downgrades the whole segment to a
/// literal token.
fn parse_decimal(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u64>().ok()
}
