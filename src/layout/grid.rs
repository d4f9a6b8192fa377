// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Deserialize;

use crate::model::Point;

/// Row/column of a slot in the placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    row: usize,
    column: usize,
}

impl GridCell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

/// Grid parameters; every field can be overridden from the `[layout]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridLayout {
    pub base_x: f64,
    pub base_y: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { base_x: 100.0, base_y: 100.0, spacing_x: 200.0, spacing_y: 150.0, columns: 3 }
    }
}

impl GridLayout {
    /// A zero column count behaves like a single column.
    pub fn cell(&self, count: usize) -> GridCell {
        let columns = self.columns.max(1);
        GridCell { row: count / columns, column: count % columns }
    }

    /// Top-left corner for the element that would become number `count + 1`.
    pub fn position(&self, count: usize) -> Point {
        let cell = self.cell(count);
        Point::new(
            self.base_x + cell.column as f64 * self.spacing_x,
            self.base_y + cell.row as f64 * self.spacing_y,
        )
    }
}
