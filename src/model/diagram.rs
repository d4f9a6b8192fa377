// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::element::Element;
use super::ids::ElementId;

/// The element store: an ordered element list plus a revision counter.
///
/// Order is append-only apart from removals; `rev` advances once per applied batch of ops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagram {
    elements: Vec<Element>,
    rev: u64,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements, rev: 0 }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, element_id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == element_id)
    }

    pub fn contains(&self, element_id: &ElementId) -> bool {
        self.get(element_id).is_some()
    }

    /// Swaps in a whole new list, returning the previous one. The revision is left alone.
    pub fn replace_elements(&mut self, elements: Vec<Element>) -> Vec<Element> {
        std::mem::replace(&mut self.elements, elements)
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}
