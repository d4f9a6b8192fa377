// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the element store.
//!
//! Operations are applied with optimistic concurrency (revision checks) and produce a minimal
//! delta that collaborators can use to refresh derived state (rendered shapes, notation text).

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Diagram, Element, ElementId, NodeKind, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    AddNode {
        element_id: ElementId,
        kind: NodeKind,
        label: String,
        position: Point,
    },
    /// Connects two existing boxes center to center. Without a label the connection reads
    /// `"<source label> to <target label>"`.
    Connect {
        element_id: ElementId,
        source_id: ElementId,
        target_id: ElementId,
        label: Option<String>,
    },
    Remove {
        element_id: ElementId,
        cascade: CascadeRule,
    },
    Rename {
        element_id: ElementId,
        label: String,
    },
    Move {
        element_id: ElementId,
        position: Point,
    },
    /// Adds `degrees` to the current rotation.
    Rotate {
        element_id: ElementId,
        degrees: f64,
    },
    Clear,
}

/// Which connections disappear together with a removed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeRule {
    /// Connections anchored to the element by id; connections without endpoint ids fall back to
    /// the label rule.
    #[default]
    Endpoints,
    /// Connections whose label contains the removed element's label, ignoring case.
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which elements changed as the result of applying ops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<ElementId>,
    pub removed: Vec<ElementId>,
    pub updated: Vec<ElementId>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
pub(crate) struct DeltaBuilder {
    added: HashSet<ElementId>,
    removed: HashSet<ElementId>,
    updated: HashSet<ElementId>,
}

impl DeltaBuilder {
    fn record_added(&mut self, element_id: ElementId) {
        self.removed.remove(&element_id);
        self.updated.remove(&element_id);
        self.added.insert(element_id);
    }

    fn record_removed(&mut self, element_id: ElementId) {
        // Added and removed within one batch leaves no trace.
        if self.added.remove(&element_id) {
            self.updated.remove(&element_id);
            return;
        }
        self.updated.remove(&element_id);
        self.removed.insert(element_id);
    }

    fn record_updated(&mut self, element_id: ElementId) {
        if self.added.contains(&element_id) || self.removed.contains(&element_id) {
            return;
        }
        self.updated.insert(element_id);
    }

    pub(crate) fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta { added, removed, updated }
    }
}

/// Applies `ops` to a bare element list, stopping at the first failing op.
///
/// The list may be partially mutated on error; callers that need all-or-nothing semantics
/// work on a copy (as [`apply_ops`] does).
pub fn apply_to_elements(elements: &mut Vec<Element>, ops: &[Op]) -> Result<Delta, ApplyError> {
    let mut delta = DeltaBuilder::default();
    for op in ops {
        apply_op(elements, op, &mut delta)?;
    }
    Ok(delta.finish())
}

pub fn apply_ops(
    diagram: &mut Diagram,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = diagram.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: Delta::default() });
    }

    let mut new_elements = diagram.elements().to_vec();
    let delta = apply_to_elements(&mut new_elements, ops)?;

    diagram.replace_elements(new_elements);
    diagram.bump_rev();
    let new_rev = diagram.rev();
    log::debug!(
        "applied {} op(s) at rev {new_rev}: +{} -{} ~{}",
        ops.len(),
        delta.added.len(),
        delta.removed.len(),
        delta.updated.len()
    );

    Ok(ApplyResult { new_rev, applied: ops.len(), delta })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("stale base_rev (base_rev={base_rev}, current_rev={current_rev})")]
    Conflict { base_rev: u64, current_rev: u64 },
    #[error("element already exists (id={element_id})")]
    AlreadyExists { element_id: ElementId },
    #[error("element not found (id={element_id})")]
    NotFound { element_id: ElementId },
    #[error("element {element_id} is a connection and cannot be a connection endpoint")]
    NotANode { element_id: ElementId },
    #[error("label for element {element_id} must not be empty")]
    EmptyLabel { element_id: ElementId },
    /// NaN and infinities cannot be stored as JSON numbers.
    #[error("{field} for element {element_id} must be a finite number")]
    NonFinite { element_id: ElementId, field: &'static str },
}

// Extracted op-application implementation for element mutations.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
