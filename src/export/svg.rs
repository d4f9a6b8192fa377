// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ::svg::node::element::{Definitions, Ellipse, Group, Line, Marker, Path, Rectangle, Text};
use ::svg::Document;

use crate::model::{Bounds, Element, NodeKind, Point};

const MARGIN: f64 = 20.0;
const FONT_FAMILY: &str = "Inter, Helvetica, Arial, sans-serif";
const FONT_SIZE: f64 = 14.0;
const STROKE: &str = "#334155";
const ARROW_MARKER_ID: &str = "arrow";

fn fill_for(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Service | NodeKind::Microservice => "#dbeafe",
        NodeKind::Database => "#dcfce7",
        NodeKind::Api => "#fef9c3",
        NodeKind::User => "#fce7f3",
        NodeKind::System => "#f1f5f9",
        NodeKind::Container => "#ede9fe",
        NodeKind::Component => "#ffedd5",
    }
}

fn arrow_marker() -> Definitions {
    Definitions::new().add(
        Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(Path::new().set("d", "M 0 0 L 10 5 L 0 10 z").set("fill", STROKE)),
    )
}

/// Smallest box around every element, grown by the page margin.
fn content_bounds(elements: &[Element]) -> Bounds {
    let bounds = elements
        .iter()
        .map(Element::bounds)
        .reduce(|acc, bounds| acc.union(&bounds))
        .unwrap_or_default();
    Bounds::spanning(
        Point::new(bounds.origin.x - MARGIN, bounds.origin.y - MARGIN),
        Point::new(bounds.max_corner().x + MARGIN, bounds.max_corner().y + MARGIN),
    )
}

/// Cylinder outline: body with the lower rim, plus the visible upper rim.
fn cylinder_path(bounds: Bounds) -> String {
    let Bounds { origin: Point { x, y }, size } = bounds;
    let (w, h) = (size.width(), size.height());
    let rx = w / 2.0;
    let ry = (h * 0.15).min(12.0);
    format!(
        "M {x} {top} A {rx} {ry} 0 0 0 {right} {top} L {right} {bottom} \
         A {rx} {ry} 0 0 1 {x} {bottom} Z M {x} {top} A {rx} {ry} 0 0 1 {right} {top}",
        top = y + ry,
        right = x + w,
        bottom = y + h - ry,
    )
}

fn render_node(element: &Element, kind: NodeKind) -> Group {
    let bounds = element.bounds();
    let center = bounds.center();
    let fill = fill_for(kind);

    let mut group = Group::new()
        .set("id", element.id().as_str())
        .set("class", format!("element {}", kind.keyword()));
    if let Some(rotation) = element.rotation() {
        group = group.set("transform", format!("rotate({rotation} {} {})", center.x, center.y));
    }

    group = match kind {
        NodeKind::Database => group.add(
            Path::new()
                .set("d", cylinder_path(bounds))
                .set("fill", fill)
                .set("stroke", STROKE)
                .set("stroke-width", 1.5),
        ),
        NodeKind::User => group.add(
            Ellipse::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("rx", bounds.size.width() / 2.0)
                .set("ry", bounds.size.height() / 2.0)
                .set("fill", fill)
                .set("stroke", STROKE)
                .set("stroke-width", 1.5),
        ),
        _ => group.add(
            Rectangle::new()
                .set("x", bounds.origin.x)
                .set("y", bounds.origin.y)
                .set("width", bounds.size.width())
                .set("height", bounds.size.height())
                .set("rx", 8)
                .set("fill", fill)
                .set("stroke", STROKE)
                .set("stroke-width", 1.5),
        ),
    };

    let label = element.label().unwrap_or(kind.default_label());
    group.add(
        Text::new(label)
            .set("x", center.x)
            .set("y", center.y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", FONT_SIZE),
    )
}

/// Where the segment from `bounds`' center towards `toward` leaves the box.
fn exit_point(bounds: Bounds, toward: Point) -> Point {
    let center = bounds.center();
    let (dx, dy) = (toward.x - center.x, toward.y - center.y);
    let half_w = bounds.size.width() / 2.0;
    let half_h = bounds.size.height() / 2.0;
    let tx = if dx == 0.0 { f64::INFINITY } else { half_w / dx.abs() };
    let ty = if dy == 0.0 { f64::INFINITY } else { half_h / dy.abs() };
    let t = tx.min(ty);
    if !t.is_finite() || t >= 1.0 {
        return center;
    }
    Point::new(center.x + dx * t, center.y + dy * t)
}

fn render_connection(element: &Element, elements: &[Element]) -> Option<Group> {
    let connection = element.as_connection()?;
    let node_bounds = |id| {
        elements
            .iter()
            .find(|candidate| Some(candidate.id()) == id && !candidate.is_connection())
            .map(Element::bounds)
    };

    let mut start = connection.start_point();
    let mut end = connection.end_point();
    if let Some(bounds) = node_bounds(connection.source_id()) {
        start = exit_point(bounds, end);
    }
    if let Some(bounds) = node_bounds(connection.target_id()) {
        end = exit_point(bounds, start);
    }

    let mut group = Group::new().set("id", element.id().as_str()).set("class", "connection").add(
        Line::new()
            .set("x1", start.x)
            .set("y1", start.y)
            .set("x2", end.x)
            .set("y2", end.y)
            .set("stroke", STROKE)
            .set("stroke-width", 1.5)
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})")),
    );
    if let Some(label) = element.label() {
        group = group.add(
            Text::new(label)
                .set("x", (start.x + end.x) / 2.0)
                .set("y", (start.y + end.y) / 2.0 - 6.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", FONT_SIZE * 0.8)
                .set("fill", STROKE),
        );
    }
    Some(group)
}

/// Standalone SVG document for an element list; connections are drawn above the boxes.
pub fn render_svg(elements: &[Element]) -> Document {
    let view = content_bounds(elements);
    let mut doc = Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                view.origin.x,
                view.origin.y,
                view.size.width(),
                view.size.height()
            ),
        )
        .set("width", view.size.width())
        .set("height", view.size.height())
        .add(arrow_marker());

    for element in elements {
        if let Some(kind) = element.node_kind() {
            doc = doc.add(render_node(element, kind));
        }
    }
    for element in elements {
        if let Some(group) = render_connection(element, elements) {
            doc = doc.add(group);
        }
    }
    doc
}

pub fn export_svg(elements: &[Element]) -> String {
    render_svg(elements).to_string()
}
