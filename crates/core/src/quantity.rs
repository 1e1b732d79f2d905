// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quantity compliance reporting.
//!
//! An order line requires exactly `required_quantity` physical units. The
//! functions here report how an assigned (or previewed) token count stands
//! against that requirement. Reporting is advisory only: shortfall and
//! excess are visible, recoverable conditions the caller renders as
//! warnings, never reasons to block an operation.

use serde::{Deserialize, Serialize};
use sernum_domain::expand_serial_text;

/// How an assigned token count stands against the required quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityStatus {
    /// Whether the assigned count meets the required quantity.
    pub is_complete: bool,
    /// Whether the assigned count exceeds the required quantity.
    pub has_excess: bool,
    /// Tokens assigned beyond the requirement.
    pub excess: u32,
    /// Tokens still missing to meet the requirement.
    pub remaining: u32,
}

/// Live preview of what an uncommitted entry would do to the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionPreview {
    /// How many tokens the entry text expands to. Deliberately not
    /// de-duplicated against the current set: repeated entries inflate the
    /// preview even though reconciliation later adds them once.
    pub new_token_count: u32,
    /// Current count plus the parsed token count.
    pub total_after_merge: u32,
    /// Whether committing would exceed the required quantity.
    pub is_exceeding: bool,
    /// Signed distance from the requirement; negative means still short.
    pub difference: i64,
}

/// Reports how an assigned count stands against a required quantity.
///
/// # Arguments
///
/// * `assigned_count` - The number of tokens currently assigned
/// * `required_quantity` - The number of units the order line requires
#[must_use]
pub const fn check_quantity(assigned_count: u32, required_quantity: u32) -> QuantityStatus {
    QuantityStatus {
        is_complete: assigned_count >= required_quantity,
        has_excess: assigned_count > required_quantity,
        excess: assigned_count.saturating_sub(required_quantity),
        remaining: required_quantity.saturating_sub(assigned_count),
    }
}

/// Previews the quantity effect of an entry before it is committed.
///
/// Composes expansion with the quantity check so the caller can warn the
/// operator while they type. The parsed count is a straight token count of
/// the entry text; see `ExpansionPreview::new_token_count`.
///
/// # Arguments
///
/// * `text` - The uncommitted entry text
/// * `current_count` - The number of tokens currently assigned
/// * `required_quantity` - The number of units the order line requires
#[must_use]
pub fn preview_expansion(
    text: &str,
    current_count: u32,
    required_quantity: u32,
) -> ExpansionPreview {
    let expanded_len: usize = expand_serial_text(text).len();
    let new_token_count: u32 = u32::try_from(expanded_len).unwrap_or(u32::MAX);
    let total_after_merge: u32 = current_count.saturating_add(new_token_count);

    ExpansionPreview {
        new_token_count,
        total_after_merge,
        is_exceeding: total_after_merge > required_quantity,
        difference: i64::from(total_after_merge) - i64::from(required_quantity),
    }
}
