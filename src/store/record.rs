// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    Connection, Element, ElementId, ElementKind, IdError, Point, Size, UnknownElementKind,
};

/// Persisted element shape (camelCase JSON, one object per element).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: PointRecord,
    pub size: SizeRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ConnectionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub start_point: PointRecord,
    pub end_point: PointRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid element id {id:?}: {source}")]
    InvalidId { id: String, source: IdError },
    #[error(transparent)]
    UnknownKind(#[from] UnknownElementKind),
    #[error("connection {id} has no startPoint/endPoint properties")]
    MissingEndpoints { id: String },
}

impl From<Point> for PointRecord {
    fn from(point: Point) -> Self {
        Self { x: point.x, y: point.y }
    }
}

impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        Point::new(record.x, record.y)
    }
}

impl From<Size> for SizeRecord {
    fn from(size: Size) -> Self {
        Self { width: size.width(), height: size.height() }
    }
}

impl From<&Element> for ElementRecord {
    fn from(element: &Element) -> Self {
        let properties = element.as_connection().map(|connection| ConnectionRecord {
            start_point: connection.start_point().into(),
            end_point: connection.end_point().into(),
            source_id: connection.source_id().map(ToString::to_string),
            target_id: connection.target_id().map(ToString::to_string),
        });
        Self {
            id: element.id().to_string(),
            kind: element.kind().as_str().to_owned(),
            position: element.position().into(),
            size: element.size().into(),
            rotation: element.rotation(),
            label: element.label().map(str::to_owned),
            properties,
        }
    }
}

fn parse_id(raw: &str) -> Result<ElementId, RecordError> {
    ElementId::new(raw).map_err(|source| RecordError::InvalidId { id: raw.to_owned(), source })
}

impl TryFrom<ElementRecord> for Element {
    type Error = RecordError;

    /// Connection geometry is re-derived from the stored endpoints; node `properties` are ignored.
    fn try_from(record: ElementRecord) -> Result<Self, Self::Error> {
        let id = parse_id(&record.id)?;
        let mut element = match record.kind.parse::<ElementKind>()? {
            ElementKind::Node(kind) => Element::node_with_size(
                id,
                kind,
                record.position.into(),
                Size::new(record.size.width, record.size.height),
            ),
            ElementKind::Connection => {
                let Some(properties) = record.properties else {
                    return Err(RecordError::MissingEndpoints { id: record.id });
                };
                let mut connection =
                    Connection::new(properties.start_point.into(), properties.end_point.into());
                let source_id = properties.source_id.as_deref().map(parse_id).transpose()?;
                let target_id = properties.target_id.as_deref().map(parse_id).transpose()?;
                connection.set_endpoint_ids(source_id, target_id);
                Element::connection(id, connection)
            }
        };
        element.set_rotation(record.rotation);
        element.set_label(record.label);
        Ok(element)
    }
}
