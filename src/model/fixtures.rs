// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::element::{Connection, Element, NodeKind};
use super::geometry::Point;
use super::ids::ElementId;

pub(crate) fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

pub(crate) fn node(id: &str, kind: NodeKind, label: &str, x: f64, y: f64) -> Element {
    Element::node(eid(id), kind, Point::new(x, y)).with_label(label)
}

pub(crate) fn connection(id: &str, source: &Element, target: &Element) -> Element {
    let label = format!(
        "{} to {}",
        source.label().unwrap_or_default(),
        target.label().unwrap_or_default()
    );
    Element::connection(
        eid(id),
        Connection::between(
            source.id().clone(),
            source.center(),
            target.id().clone(),
            target.center(),
        ),
    )
    .with_label(label)
}

/// Web app, API gateway and orders database wired in a chain.
pub(crate) fn three_tier() -> Vec<Element> {
    let web = node("component-1", NodeKind::Component, "Web App", 100.0, 100.0);
    let api = node("api-2", NodeKind::Api, "Gateway", 300.0, 100.0);
    let db = node("database-3", NodeKind::Database, "Orders", 500.0, 100.0);
    let web_api = connection("connection-4", &web, &api);
    let api_db = connection("connection-5", &api, &db);
    vec![web, api, db, web_api, api_db]
}
