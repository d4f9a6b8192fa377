// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{Bounds, Point, Size};
use super::ids::ElementId;

/// The box-like element kinds, in interpreter keyword priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Service,
    Database,
    Api,
    Microservice,
    User,
    System,
    Container,
    Component,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        Self::Service,
        Self::Database,
        Self::Api,
        Self::Microservice,
        Self::User,
        Self::System,
        Self::Container,
        Self::Component,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Database => "database",
            Self::Api => "api",
            Self::Microservice => "microservice",
            Self::User => "user",
            Self::System => "system",
            Self::Container => "container",
            Self::Component => "component",
        }
    }

    /// Capitalized keyword used when a command carries no label.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Database => "Database",
            Self::Api => "Api",
            Self::Microservice => "Microservice",
            Self::User => "User",
            Self::System => "System",
            Self::Container => "Container",
            Self::Component => "Component",
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            Self::Database => Size::new(100.0, 80.0),
            Self::User => Size::new(80.0, 80.0),
            Self::System | Self::Container => Size::new(160.0, 100.0),
            Self::Service | Self::Api | Self::Microservice | Self::Component => {
                Size::new(120.0, 60.0)
            }
        }
    }

    pub fn from_keyword(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| kind.keyword().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Every element kind, including connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Node(NodeKind),
    Connection,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node(kind) => kind.keyword(),
            Self::Connection => "connection",
        }
    }

    pub fn is_connection(self) -> bool {
        matches!(self, Self::Connection)
    }
}

impl From<NodeKind> for ElementKind {
    fn from(kind: NodeKind) -> Self {
        Self::Node(kind)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element kind: {0:?}")]
pub struct UnknownElementKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("connection") {
            return Ok(Self::Connection);
        }
        NodeKind::from_keyword(s).map(Self::Node).ok_or_else(|| UnknownElementKind(s.to_owned()))
    }
}

/// Connection-only data: the drawn endpoints plus the elements they are anchored to.
///
/// Endpoint ids are absent on connections loaded from records that only carried a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    start_point: Point,
    end_point: Point,
    source_id: Option<ElementId>,
    target_id: Option<ElementId>,
}

impl Connection {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self { start_point, end_point, source_id: None, target_id: None }
    }

    pub fn between(
        source_id: ElementId,
        start_point: Point,
        target_id: ElementId,
        end_point: Point,
    ) -> Self {
        Self { start_point, end_point, source_id: Some(source_id), target_id: Some(target_id) }
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    pub fn set_start_point(&mut self, point: Point) {
        self.start_point = point;
    }

    pub fn set_end_point(&mut self, point: Point) {
        self.end_point = point;
    }

    pub fn source_id(&self) -> Option<&ElementId> {
        self.source_id.as_ref()
    }

    pub fn target_id(&self) -> Option<&ElementId> {
        self.target_id.as_ref()
    }

    pub fn set_endpoint_ids(&mut self, source_id: Option<ElementId>, target_id: Option<ElementId>) {
        self.source_id = source_id;
        self.target_id = target_id;
    }

    pub fn touches(&self, element_id: &ElementId) -> bool {
        self.source_id.as_ref() == Some(element_id) || self.target_id.as_ref() == Some(element_id)
    }

    pub fn has_endpoint_ids(&self) -> bool {
        self.source_id.is_some() || self.target_id.is_some()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::spanning(self.start_point, self.end_point)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementBody {
    Node(NodeKind),
    Connection(Connection),
}

/// A single diagram element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    position: Point,
    size: Size,
    rotation: Option<f64>,
    label: Option<String>,
    body: ElementBody,
}

impl Element {
    pub fn node(id: ElementId, kind: NodeKind, position: Point) -> Self {
        Self::node_with_size(id, kind, position, kind.default_size())
    }

    pub fn node_with_size(id: ElementId, kind: NodeKind, position: Point, size: Size) -> Self {
        Self { id, position, size, rotation: None, label: None, body: ElementBody::Node(kind) }
    }

    /// A connection positioned at the bounding box of its two endpoints.
    pub fn connection(id: ElementId, connection: Connection) -> Self {
        let bounds = connection.bounds();
        Self {
            id,
            position: bounds.origin,
            size: bounds.size,
            rotation: None,
            label: None,
            body: ElementBody::Connection(connection),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        match &self.body {
            ElementBody::Node(kind) => ElementKind::Node(*kind),
            ElementBody::Connection(_) => ElementKind::Connection,
        }
    }

    pub fn node_kind(&self) -> Option<NodeKind> {
        match &self.body {
            ElementBody::Node(kind) => Some(*kind),
            ElementBody::Connection(_) => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self.body, ElementBody::Connection(_))
    }

    pub fn as_connection(&self) -> Option<&Connection> {
        match &self.body {
            ElementBody::Connection(connection) => Some(connection),
            ElementBody::Node(_) => None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Option<f64>) {
        self.rotation = rotation;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Moves a node; connections are re-derived from their endpoints instead.
    pub fn set_position(&mut self, position: Point) {
        match &mut self.body {
            ElementBody::Node(_) => self.position = position,
            ElementBody::Connection(connection) => {
                let dx = position.x - self.position.x;
                let dy = position.y - self.position.y;
                let start = connection.start_point();
                let end = connection.end_point();
                connection.set_start_point(Point::new(start.x + dx, start.y + dy));
                connection.set_end_point(Point::new(end.x + dx, end.y + dy));
                self.position = position;
            }
        }
    }

    /// Replaces connection endpoints and refreshes the bounding box.
    pub fn set_connection_points(&mut self, start_point: Point, end_point: Point) {
        if let ElementBody::Connection(connection) = &mut self.body {
            connection.set_start_point(start_point);
            connection.set_end_point(end_point);
            let bounds = connection.bounds();
            self.position = bounds.origin;
            self.size = bounds.size;
        }
    }

    /// Case-insensitive label equality; elements without a label never match.
    pub fn label_matches(&self, needle: &str) -> bool {
        self.label.as_deref().is_some_and(|label| labels_equal(label, needle))
    }
}

pub fn labels_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
