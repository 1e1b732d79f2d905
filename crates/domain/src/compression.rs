// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Range compression for serial-token display.
//!
//! The display-only inverse of expansion: an assigned token set is rendered
//! back as the most compact range notation. Compression is not required to
//! losslessly invert expansion as text; it must only denote the same
//! membership when re-expanded.
//!
//! ## Invariants
//!
//! - Tokens group only within a `(width, numeric)` bucket; two numerically
//!   consecutive tokens of different widths (`"9"`, `"10"`) never merge.
//! - A run collapses only strictly consecutive numeric values at constant
//!   padding width; non-numeric tokens always stand alone.
//! - The final output is sorted lexicographically regardless of bucket,
//!   for stable, deterministic display.

use crate::token::SerialToken;
use std::collections::BTreeMap;

/// Compresses a collection of serial tokens into minimal range notation.
///
/// Tokens are bucketed by `(character length, purely-numeric)`, sorted
/// within each bucket, and collapsed into maximal runs of strictly
/// consecutive numeric values. A run of one renders as the bare token; a
/// longer run renders as `"<first>-<last>"`.
///
/// # Arguments
///
/// * `tokens` - The tokens to render; ordering is irrelevant, the output
///   order is normalized lexicographically
#[must_use]
pub fn compress_serial_tokens<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = SerialToken>,
{
    // Within a bucket every token has the same width, so lexicographic
    // order and numeric order coincide for the numeric buckets.
    let mut buckets: BTreeMap<(usize, bool), Vec<SerialToken>> = BTreeMap::new();
    for token in tokens {
        buckets
            .entry((token.width(), token.is_numeric()))
            .or_default()
            .push(token);
    }

    let mut rendered: Vec<String> = Vec::new();
    for ((_, numeric), mut bucket) in buckets {
        bucket.sort_unstable();
        if numeric {
            collapse_runs(&bucket, &mut rendered);
        } else {
            rendered.extend(bucket.iter().map(|token| token.value().to_owned()));
        }
    }

    rendered.sort_unstable();
    rendered
}

/// Collapses a sorted, same-width numeric bucket into range strings.
///
/// A run continues while the next token's value is exactly one more than
/// the previous token's. Tokens whose digits overflow `u64` never join a
/// run and render standalone.
fn collapse_runs(bucket: &[SerialToken], rendered: &mut Vec<String>) {
    let mut run_start: usize = 0;

    for index in 1..=bucket.len() {
        let continues: bool = index < bucket.len()
            && match (bucket[index - 1].numeric_value(), bucket[index].numeric_value()) {
                (Some(previous), Some(next)) => previous.checked_add(1) == Some(next),
                _ => false,
            };
        if continues {
            continue;
        }

        let first: &SerialToken = &bucket[run_start];
        let last: &SerialToken = &bucket[index - 1];
        if run_start == index - 1 {
            rendered.push(first.value().to_owned());
        } else {
            rendered.push(format!("{}-{}", first.value(), last.value()));
        }
        run_start = index;
    }
}
