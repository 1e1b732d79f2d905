// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use sernum_domain::SerialToken;
use std::collections::BTreeSet;

/// The minimal add/remove delta that moves a current token set to a
/// desired one.
///
/// Constructed fresh for every save action, handed to the storage
/// collaborator, and discarded; deltas are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationDelta {
    /// Tokens desired but not yet assigned.
    pub to_add: BTreeSet<SerialToken>,
    /// Tokens assigned but no longer desired.
    pub to_remove: BTreeSet<SerialToken>,
}

impl ReconciliationDelta {
    /// Returns whether applying this delta would change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Computes the delta between a current and a desired token set.
///
/// Token equality is exact string equality with no normalization, so
/// `"sn01"` and `"SN01"` are distinct. Applying the returned delta and
/// diffing again against the refreshed set yields an empty delta:
/// reconciliation is idempotent.
///
/// # Arguments
///
/// * `current` - The tokens currently assigned to the order line
/// * `desired` - The tokens the operator's entry denotes
#[must_use]
pub fn diff(
    current: &BTreeSet<SerialToken>,
    desired: &BTreeSet<SerialToken>,
) -> ReconciliationDelta {
    ReconciliationDelta {
        to_add: desired.difference(current).cloned().collect(),
        to_remove: current.difference(desired).cloned().collect(),
    }
}
