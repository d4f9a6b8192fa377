// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Default placement for new elements.
//!
//! New boxes land on a fixed grid indexed by how many elements the diagram already holds.

pub mod grid;

pub use grid::{GridCell, GridLayout};
