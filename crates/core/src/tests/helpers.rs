// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AllocationStore, CollaboratorError, ReconciliationDelta, SerialLookup};
use sernum_domain::{AllocationState, OrderLineId, SerialToken};
use std::collections::BTreeSet;

pub fn token(value: &str) -> SerialToken {
    SerialToken::new(value).unwrap()
}

pub fn token_set(values: &[&str]) -> BTreeSet<SerialToken> {
    values.iter().map(|value| token(value)).collect()
}

/// Lookup fake answering from a fixed set of globally used serials.
pub struct StaticLookup {
    pub existing: BTreeSet<SerialToken>,
}

impl StaticLookup {
    pub const fn empty() -> Self {
        Self {
            existing: BTreeSet::new(),
        }
    }

    pub fn with_existing(values: &[&str]) -> Self {
        Self {
            existing: token_set(values),
        }
    }
}

impl SerialLookup for StaticLookup {
    fn existing_among(
        &self,
        candidates: &[SerialToken],
    ) -> Result<BTreeSet<SerialToken>, CollaboratorError> {
        Ok(candidates
            .iter()
            .filter(|candidate| self.existing.contains(candidate))
            .cloned()
            .collect())
    }
}

/// Lookup fake that always fails.
pub struct FailingLookup;

impl SerialLookup for FailingLookup {
    fn existing_among(
        &self,
        _candidates: &[SerialToken],
    ) -> Result<BTreeSet<SerialToken>, CollaboratorError> {
        Err(CollaboratorError::LookupFailed(String::from(
            "lookup unavailable",
        )))
    }
}

/// Store fake applying deltas to a single in-memory allocation state.
pub struct InMemoryStore {
    pub state: AllocationState,
    pub apply_calls: u32,
}

impl InMemoryStore {
    pub const fn new(state: AllocationState) -> Self {
        Self {
            state,
            apply_calls: 0,
        }
    }
}

impl AllocationStore for InMemoryStore {
    fn apply_delta(
        &mut self,
        order_line: OrderLineId,
        delta: &ReconciliationDelta,
    ) -> Result<AllocationState, CollaboratorError> {
        assert_eq!(order_line, self.state.order_line());
        self.apply_calls += 1;

        let mut tokens: BTreeSet<SerialToken> = self.state.tokens().clone();
        for removed in &delta.to_remove {
            tokens.remove(removed);
        }
        for added in &delta.to_add {
            tokens.insert(added.clone());
        }

        self.state = AllocationState::with_tokens(
            order_line,
            tokens,
            self.state.required_quantity(),
        );
        Ok(self.state.clone())
    }
}

/// Store fake that always fails.
pub struct FailingStore;

impl AllocationStore for FailingStore {
    fn apply_delta(
        &mut self,
        order_line: OrderLineId,
        _delta: &ReconciliationDelta,
    ) -> Result<AllocationState, CollaboratorError> {
        Err(CollaboratorError::ConcurrentModification {
            order_line: order_line.value(),
        })
    }
}
