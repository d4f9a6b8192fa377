// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use crate::model::fixtures::{eid, three_tier};
use crate::model::{Connection, Diagram, Element, NodeKind, Point};

use super::{apply_ops, apply_to_elements, ApplyError, CascadeRule, Op};

#[fixture]
fn diagram() -> Diagram {
    Diagram::from_elements(three_tier())
}

fn ids(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(|element| element.id().as_str()).collect()
}

#[test]
fn add_node_bumps_rev_and_reports_added() {
    let mut diagram = Diagram::new();
    let ops = [Op::AddNode {
        element_id: eid("service-1"),
        kind: NodeKind::Service,
        label: "Payments".to_owned(),
        position: Point::new(100.0, 100.0),
    }];

    let result = apply_ops(&mut diagram, 0, &ops).expect("apply");

    assert_eq!(result.new_rev, 1);
    assert_eq!(result.applied, 1);
    assert_eq!(result.delta.added, vec![eid("service-1")]);
    assert!(result.delta.removed.is_empty());
    let element = diagram.get(&eid("service-1")).expect("added element");
    assert_eq!(element.label(), Some("Payments"));
}

#[rstest]
fn stale_base_rev_is_rejected_without_mutation(mut diagram: Diagram) {
    diagram.bump_rev();
    let before = diagram.clone();

    let err = apply_ops(&mut diagram, 0, &[Op::Clear]).expect_err("conflict");

    assert_eq!(err, ApplyError::Conflict { base_rev: 0, current_rev: 1 });
    assert_eq!(diagram, before);
}

#[rstest]
fn empty_batch_keeps_rev(mut diagram: Diagram) {
    let result = apply_ops(&mut diagram, 0, &[]).expect("apply");
    assert_eq!(result.new_rev, 0);
    assert!(result.delta.is_empty());
}

#[rstest]
fn failing_op_leaves_diagram_untouched(mut diagram: Diagram) {
    let before = diagram.clone();
    let ops = [
        Op::Rename { element_id: eid("api-2"), label: "Edge".to_owned() },
        Op::Rename { element_id: eid("missing-9"), label: "Nope".to_owned() },
    ];

    let err = apply_ops(&mut diagram, 0, &ops).expect_err("missing element");

    assert_eq!(err, ApplyError::NotFound { element_id: eid("missing-9") });
    assert_eq!(diagram, before);
}

#[rstest]
fn connect_uses_centers_and_derived_label(mut diagram: Diagram) {
    let ops = [Op::Connect {
        element_id: eid("connection-6"),
        source_id: eid("component-1"),
        target_id: eid("database-3"),
        label: None,
    }];

    apply_ops(&mut diagram, 0, &ops).expect("apply");

    let web_center = diagram.get(&eid("component-1")).expect("web").center();
    let db_center = diagram.get(&eid("database-3")).expect("db").center();
    let added = diagram.get(&eid("connection-6")).expect("connection");
    assert_eq!(added.label(), Some("Web App to Orders"));
    let connection = added.as_connection().expect("connection body");
    assert_eq!(connection.start_point(), web_center);
    assert_eq!(connection.end_point(), db_center);
}

#[rstest]
fn connect_rejects_connection_endpoint(mut diagram: Diagram) {
    let ops = [Op::Connect {
        element_id: eid("connection-6"),
        source_id: eid("connection-4"),
        target_id: eid("database-3"),
        label: None,
    }];

    let err = apply_ops(&mut diagram, 0, &ops).expect_err("not a node");
    assert_eq!(err, ApplyError::NotANode { element_id: eid("connection-4") });
}

#[rstest]
fn duplicate_id_is_rejected(mut diagram: Diagram) {
    let ops = [Op::AddNode {
        element_id: eid("api-2"),
        kind: NodeKind::Api,
        label: "Again".to_owned(),
        position: Point::default(),
    }];

    let err = apply_ops(&mut diagram, 0, &ops).expect_err("duplicate");
    assert_eq!(err, ApplyError::AlreadyExists { element_id: eid("api-2") });
}

#[rstest]
fn remove_cascades_to_attached_connections(mut diagram: Diagram) {
    let ops = [Op::Remove { element_id: eid("api-2"), cascade: CascadeRule::Endpoints }];

    let result = apply_ops(&mut diagram, 0, &ops).expect("apply");

    assert_eq!(ids(diagram.elements()), vec!["component-1", "database-3"]);
    assert_eq!(result.delta.removed, vec![eid("api-2"), eid("connection-4"), eid("connection-5")]);
}

#[test]
fn endpoint_rule_ignores_coincidental_label_overlap() {
    let mut elements = three_tier();
    // "Web App" contains "App"; only the label rule would take connection-4 down with it.
    elements.push(
        Element::node(eid("service-6"), NodeKind::Service, Point::new(100.0, 250.0))
            .with_label("App"),
    );

    let ops = [Op::Remove { element_id: eid("service-6"), cascade: CascadeRule::Endpoints }];
    let mut by_endpoints = elements.clone();
    apply_to_elements(&mut by_endpoints, &ops).expect("apply");
    assert!(by_endpoints.iter().any(|element| element.id() == &eid("connection-4")));

    let ops = [Op::Remove { element_id: eid("service-6"), cascade: CascadeRule::Label }];
    let mut by_label = elements;
    apply_to_elements(&mut by_label, &ops).expect("apply");
    assert!(!by_label.iter().any(|element| element.id() == &eid("connection-4")));
}

#[test]
fn legacy_connection_without_ids_falls_back_to_label() {
    let mut elements = vec![
        Element::node(eid("database-1"), NodeKind::Database, Point::new(100.0, 100.0))
            .with_label("X"),
        Element::node(eid("service-2"), NodeKind::Service, Point::new(300.0, 100.0))
            .with_label("Y"),
        Element::connection(
            eid("connection-3"),
            Connection::new(Point::new(150.0, 140.0), Point::new(360.0, 130.0)),
        )
        .with_label("X to Y"),
    ];

    let delta = apply_to_elements(
        &mut elements,
        &[Op::Remove { element_id: eid("database-1"), cascade: CascadeRule::Endpoints }],
    )
    .expect("apply");

    assert_eq!(ids(&elements), vec!["service-2"]);
    assert_eq!(delta.removed, vec![eid("connection-3"), eid("database-1")]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn rename_rejects_blank_labels(mut diagram: Diagram, #[case] label: &str) {
    let ops = [Op::Rename { element_id: eid("api-2"), label: label.to_owned() }];

    let err = apply_ops(&mut diagram, 0, &ops).expect_err("empty label");

    assert_eq!(err, ApplyError::EmptyLabel { element_id: eid("api-2") });
    assert_eq!(diagram.get(&eid("api-2")).expect("api").label(), Some("Gateway"));
    assert_eq!(diagram.rev(), 0);
}

#[rstest]
fn rename_trims_label(mut diagram: Diagram) {
    let ops = [Op::Rename { element_id: eid("api-2"), label: "  Edge  ".to_owned() }];
    let result = apply_ops(&mut diagram, 0, &ops).expect("apply");
    assert_eq!(diagram.get(&eid("api-2")).expect("api").label(), Some("Edge"));
    assert_eq!(result.delta.updated, vec![eid("api-2")]);
}

#[rstest]
fn move_reanchors_attached_connections(mut diagram: Diagram) {
    let ops = [Op::Move { element_id: eid("api-2"), position: Point::new(300.0, 400.0) }];

    let result = apply_ops(&mut diagram, 0, &ops).expect("apply");

    let api_center = diagram.get(&eid("api-2")).expect("api").center();
    assert_eq!(api_center, Point::new(360.0, 430.0));
    let inbound = diagram.get(&eid("connection-4")).expect("inbound");
    let outbound = diagram.get(&eid("connection-5")).expect("outbound");
    assert_eq!(inbound.as_connection().expect("body").end_point(), api_center);
    assert_eq!(outbound.as_connection().expect("body").start_point(), api_center);
    assert_eq!(
        result.delta.updated,
        vec![eid("api-2"), eid("connection-4"), eid("connection-5")]
    );
}

#[rstest]
fn rotate_accumulates(mut diagram: Diagram) {
    let ops = [
        Op::Rotate { element_id: eid("database-3"), degrees: 90.0 },
        Op::Rotate { element_id: eid("database-3"), degrees: 45.0 },
    ];
    apply_ops(&mut diagram, 0, &ops).expect("apply");
    assert_eq!(diagram.get(&eid("database-3")).expect("db").rotation(), Some(135.0));
}

#[rstest]
#[case(Point::new(f64::NAN, 0.0))]
#[case(Point::new(0.0, f64::INFINITY))]
#[case(Point::new(f64::NEG_INFINITY, f64::NAN))]
fn move_rejects_non_finite_positions(mut diagram: Diagram, #[case] position: Point) {
    let before = diagram.clone();
    let ops = [Op::Move { element_id: eid("api-2"), position }];

    let err = apply_ops(&mut diagram, 0, &ops).expect_err("non-finite position");

    assert_eq!(err, ApplyError::NonFinite { element_id: eid("api-2"), field: "position" });
    assert_eq!(diagram, before);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn rotate_rejects_non_finite_degrees(mut diagram: Diagram, #[case] degrees: f64) {
    let before = diagram.clone();
    let ops = [Op::Rotate { element_id: eid("database-3"), degrees }];

    let err = apply_ops(&mut diagram, 0, &ops).expect_err("non-finite rotation");

    assert_eq!(err, ApplyError::NonFinite { element_id: eid("database-3"), field: "rotation" });
    assert_eq!(diagram, before);
}

#[test]
fn add_node_rejects_non_finite_position() {
    let mut elements = Vec::new();
    let ops = [Op::AddNode {
        element_id: eid("service-1"),
        kind: NodeKind::Service,
        label: "Payments".to_owned(),
        position: Point::new(f64::NAN, 100.0),
    }];

    let err = apply_to_elements(&mut elements, &ops).expect_err("non-finite position");

    assert!(matches!(err, ApplyError::NonFinite { field: "position", .. }));
    assert!(elements.is_empty());
}

#[rstest]
fn clear_removes_everything(mut diagram: Diagram) {
    let result = apply_ops(&mut diagram, 0, &[Op::Clear]).expect("apply");
    assert!(diagram.is_empty());
    assert_eq!(result.delta.removed.len(), 5);
}

#[test]
fn added_then_removed_in_one_batch_leaves_no_delta() {
    let mut elements = Vec::new();
    let ops = [
        Op::AddNode {
            element_id: eid("user-1"),
            kind: NodeKind::User,
            label: "Client".to_owned(),
            position: Point::default(),
        },
        Op::Remove { element_id: eid("user-1"), cascade: CascadeRule::default() },
    ];

    let delta = apply_to_elements(&mut elements, &ops).expect("apply");

    assert!(elements.is_empty());
    assert!(delta.is_empty());
}
