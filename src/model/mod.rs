// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core element model.
//!
//! A diagram is an ordered list of typed elements: eight box kinds plus connections that anchor
//! to boxes by id.

pub mod diagram;
pub mod element;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;

pub use diagram::Diagram;
pub use element::{
    labels_equal, Connection, Element, ElementBody, ElementKind, NodeKind, UnknownElementKind,
};
pub use geometry::{Bounds, Point, Size};
pub use ids::{next_element_id, ElementId, ElementIdTag, Id, IdError};
