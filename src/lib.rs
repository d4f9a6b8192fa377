// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Archi: command-driven architecture diagrams.
//!
//! Free-text commands ("add a database named Orders", "connect Web to Orders", "delete Orders")
//! become an ordered list of [`model::Element`]s. The list can be generated from wizard answers,
//! imported from a small line notation, stored as JSON, and exported as PlantUML or SVG.

pub mod cli;
pub mod command;
pub mod config;
pub mod export;
pub mod format;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod templates;
pub mod wizard;
pub mod workspace;

pub use command::{interpret, interpret_script, Interpreter};
pub use model::{Element, ElementKind, NodeKind};
