// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over element lists.
//!
//! Queries back the search panel and the "did you mean" hints on failed commands.

pub mod elements;

pub use elements::{search, suggest_label, SUGGESTION_THRESHOLD};
