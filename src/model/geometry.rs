// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A position on the canvas plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Non-negative extents of an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Negative (or NaN) extents clamp to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: clamp_extent(width), height: clamp_extent(height) }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

fn clamp_extent(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Axis-aligned rectangle spanned by a top-left corner and a size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Smallest box containing both points.
    pub fn spanning(a: Point, b: Point) -> Self {
        let origin = a.min(b);
        let corner = a.max(b);
        Self { origin, size: Size::new(corner.x - origin.x, corner.y - origin.y) }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width() / 2.0,
            self.origin.y + self.size.height() / 2.0,
        )
    }

    pub fn max_corner(&self) -> Point {
        Point::new(self.origin.x + self.size.width(), self.origin.y + self.size.height())
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::spanning(self.origin.min(other.origin), self.max_corner().max(other.max_corner()))
    }
}
