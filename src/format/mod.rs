// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! External diagram notation.
//!
//! PlantUML is generated one-way from wizard answers or from an element list; the reverse
//! direction only understands the line-oriented `type: Label` subset.

pub mod ident;
pub mod notation;
pub mod plantuml;

pub use notation::{import_notation, ImportReport, NotationLineError};
pub use plantuml::{export_plantuml, generate_plantuml};
