// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::token::SerialToken;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents an order-line identifier.
///
/// The canonical numeric ID assigned by the surrounding application's
/// database. Opaque to this core; it only scopes an `AllocationState` and
/// keys the single-writer contract of the storage collaborator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OrderLineId {
    /// The canonical numeric identifier.
    value: i64,
}

impl OrderLineId {
    /// Creates a new `OrderLineId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The canonical numeric identifier
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// The serial-number set currently bound to one order line.
///
/// The authoritative copy of this state lives in the storage collaborator;
/// instances here are exclusively-held snapshots obtained from it. The
/// `required_quantity` is supplied by the order line and is immutable from
/// this core's point of view.
///
/// The state can always *report* a quantity violation but cannot prevent
/// one: over-assignment is a visible, recoverable condition, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationState {
    /// The order line this state is scoped to.
    order_line: OrderLineId,
    /// The serial tokens currently assigned.
    tokens: BTreeSet<SerialToken>,
    /// How many physical units the order line requires.
    required_quantity: u32,
}

impl AllocationState {
    /// Creates a new empty allocation state for an order line.
    ///
    /// # Arguments
    ///
    /// * `order_line` - The order line this state is scoped to
    /// * `required_quantity` - How many units the line requires
    #[must_use]
    pub const fn new(order_line: OrderLineId, required_quantity: u32) -> Self {
        Self {
            order_line,
            tokens: BTreeSet::new(),
            required_quantity,
        }
    }

    /// Creates an allocation state with an existing token set.
    ///
    /// # Arguments
    ///
    /// * `order_line` - The order line this state is scoped to
    /// * `tokens` - The currently assigned serial tokens
    /// * `required_quantity` - How many units the line requires
    #[must_use]
    pub const fn with_tokens(
        order_line: OrderLineId,
        tokens: BTreeSet<SerialToken>,
        required_quantity: u32,
    ) -> Self {
        Self {
            order_line,
            tokens,
            required_quantity,
        }
    }

    /// Returns the order line this state is scoped to.
    #[must_use]
    pub const fn order_line(&self) -> OrderLineId {
        self.order_line
    }

    /// Returns the currently assigned token set.
    #[must_use]
    pub const fn tokens(&self) -> &BTreeSet<SerialToken> {
        &self.tokens
    }

    /// Returns the required quantity for the order line.
    #[must_use]
    pub const fn required_quantity(&self) -> u32 {
        self.required_quantity
    }

    /// Returns the number of assigned tokens.
    ///
    /// Saturates at `u32::MAX`; an allocation that large would already have
    /// exhausted the surrounding application's storage.
    #[must_use]
    pub fn assigned_count(&self) -> u32 {
        u32::try_from(self.tokens.len()).unwrap_or(u32::MAX)
    }

    /// Returns whether the assigned count meets the required quantity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned_count() >= self.required_quantity
    }

    /// Returns how many tokens are assigned beyond the required quantity.
    #[must_use]
    pub fn excess(&self) -> u32 {
        self.assigned_count().saturating_sub(self.required_quantity)
    }
}
