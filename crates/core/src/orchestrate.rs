// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orchestration of one serial-number entry cycle.
//!
//! The codec and reconciler are pure; everything stateful lives behind the
//! two collaborator traits defined here. The surrounding application
//! implements them on top of its database and must guarantee at most one
//! concurrent writer per order line, so a cycle always diffs against a
//! fresh, exclusively-held snapshot.
//!
//! ## Invariants
//!
//! - A detected duplicate rejects the whole batch before anything is
//!   persisted; there are no partial commits.
//! - Quantity excess or shortfall never fails a cycle; it is reported in
//!   the outcome for the caller to surface as a warning.
//! - An empty delta skips the store round-trip entirely.

use crate::error::{CollaboratorError, CoreError};
use crate::quantity::{QuantityStatus, check_quantity};
use crate::reconcile::{ReconciliationDelta, diff};
use serde::{Deserialize, Serialize};
use sernum_domain::{
    AllocationState, OrderLineId, SerialToken, compress_serial_tokens, expand_serial_text,
};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Duplicate lookup against the global serial-number store.
///
/// Implemented by the surrounding application across all products and
/// orders, not just the order line being edited.
pub trait SerialLookup {
    /// Returns the subset of `candidates` already present anywhere in the
    /// system.
    ///
    /// # Arguments
    ///
    /// * `candidates` - Tokens the operator wants to add
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup could not be answered.
    fn existing_among(
        &self,
        candidates: &[SerialToken],
    ) -> Result<BTreeSet<SerialToken>, CollaboratorError>;
}

/// Persistence of reconciliation deltas.
///
/// The implementation must apply the delta atomically under the
/// at-most-one-concurrent-writer contract and return the refreshed state.
pub trait AllocationStore {
    /// Applies a delta to an order line's assigned set.
    ///
    /// # Arguments
    ///
    /// * `order_line` - The order line to update
    /// * `delta` - The add/remove sets to apply
    ///
    /// # Errors
    ///
    /// Returns an error if the delta could not be applied or a concurrent
    /// writer was detected.
    fn apply_delta(
        &mut self,
        order_line: OrderLineId,
        delta: &ReconciliationDelta,
    ) -> Result<AllocationState, CollaboratorError>;
}

/// The result of one successfully applied serial-number entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialEntryOutcome {
    /// The refreshed allocation state after the delta was applied.
    pub state: AllocationState,
    /// The delta that was applied (possibly empty).
    pub delta: ReconciliationDelta,
    /// Advisory quantity compliance for the refreshed state.
    pub quantity: QuantityStatus,
    /// The refreshed token set rendered as compact range notation.
    pub display: Vec<String>,
}

/// Applies one serial-number entry to an order line.
///
/// Expands the operator's text into the desired token set, computes the
/// delta against the current state, checks the added tokens for duplicates
/// through the lookup collaborator, persists the delta through the store
/// collaborator, and renders the refreshed set for display.
///
/// Only the tokens being added are sent to the duplicate lookup; tokens
/// already assigned to this order line are present in the global store by
/// definition and would always flag as their own duplicates.
///
/// # Arguments
///
/// * `lookup` - Duplicate lookup across the global serial store
/// * `store` - Persistence for the computed delta
/// * `state` - A fresh, exclusively-held snapshot of the order line
/// * `text` - The operator's free-form entry
///
/// # Returns
///
/// * `Ok(SerialEntryOutcome)` with the refreshed state, the applied delta,
///   the advisory quantity status, and the display rendering
/// * `Err(CoreError)` if duplicates were detected or a collaborator failed
///
/// # Errors
///
/// Returns an error if:
/// - Any added token already exists in the system (the whole batch is
///   rejected and nothing is persisted)
/// - The lookup or store collaborator fails
pub fn apply_serial_entry<L, S>(
    lookup: &L,
    store: &mut S,
    state: &AllocationState,
    text: &str,
) -> Result<SerialEntryOutcome, CoreError>
where
    L: SerialLookup + ?Sized,
    S: AllocationStore + ?Sized,
{
    let desired: BTreeSet<SerialToken> = expand_serial_text(text).into_iter().collect();
    let delta: ReconciliationDelta = diff(state.tokens(), &desired);
    debug!(
        "expanded entry for order line {}: {} desired, {} to add, {} to remove",
        state.order_line().value(),
        desired.len(),
        delta.to_add.len(),
        delta.to_remove.len()
    );

    let candidates: Vec<SerialToken> = delta.to_add.iter().cloned().collect();
    let duplicates: BTreeSet<SerialToken> = lookup.existing_among(&candidates)?;
    if !duplicates.is_empty() {
        return Err(CoreError::DuplicateSerials(
            duplicates.into_iter().collect(),
        ));
    }

    let new_state: AllocationState = if delta.is_empty() {
        state.clone()
    } else {
        let refreshed: AllocationState = store.apply_delta(state.order_line(), &delta)?;
        info!(
            "applied serial delta to order line {}: +{} -{}, now {} of {}",
            refreshed.order_line().value(),
            delta.to_add.len(),
            delta.to_remove.len(),
            refreshed.assigned_count(),
            refreshed.required_quantity()
        );
        refreshed
    };

    let quantity: QuantityStatus =
        check_quantity(new_state.assigned_count(), new_state.required_quantity());
    let display: Vec<String> = compress_serial_tokens(new_state.tokens().iter().cloned());

    Ok(SerialEntryOutcome {
        state: new_state,
        delta,
        quantity,
        display,
    })
}
