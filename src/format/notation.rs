// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use crate::layout::GridLayout;
use crate::model::{next_element_id, Element, NodeKind};
use crate::ops::{apply_to_elements, Op};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationLineError {
    #[error("line {line_no}: unknown element type `{type_name}`")]
    UnknownType { line_no: usize, type_name: String },
    #[error("line {line_no}: expected `type: Label`, got `{line}`")]
    MalformedLine { line_no: usize, line: String },
    #[error("line {line_no}: label must not be empty")]
    EmptyLabel { line_no: usize },
    #[error("line {line_no}: `connect` needs two elements before it")]
    NotEnoughElements { line_no: usize },
}

impl NotationLineError {
    pub fn line_no(&self) -> usize {
        match self {
            Self::UnknownType { line_no, .. }
            | Self::MalformedLine { line_no, .. }
            | Self::EmptyLabel { line_no }
            | Self::NotEnoughElements { line_no } => *line_no,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportReport {
    pub elements: Vec<Element>,
    pub added: usize,
    pub errors: Vec<NotationLineError>,
}

/// Imports `type: Label` and `connect: Label` lines on top of `elements`.
///
/// Blank lines, `'` comments and `@startuml`/`@enduml` markers are skipped. A `connect` line joins
/// the two most recent boxes. Bad lines are reported with their 1-based line number and the
/// import carries on with the next line.
pub fn import_notation(input: &str, elements: &[Element], layout: &GridLayout) -> ImportReport {
    let mut report = ImportReport { elements: elements.to_vec(), ..ImportReport::default() };

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('\'') || line.starts_with('@') {
            continue;
        }
        match line_op(&report.elements, line, line_no, layout) {
            Ok(op) => match apply_to_elements(&mut report.elements, &[op]) {
                Ok(_) => report.added += 1,
                Err(err) => {
                    log::warn!("notation line {line_no} could not be applied: {err}");
                    report.errors.push(NotationLineError::MalformedLine {
                        line_no,
                        line: line.to_owned(),
                    });
                }
            },
            Err(err) => {
                log::debug!("{err}");
                report.errors.push(err);
            }
        }
    }
    report
}

fn line_op(
    elements: &[Element],
    line: &str,
    line_no: usize,
    layout: &GridLayout,
) -> Result<Op, NotationLineError> {
    let Some((type_name, label)) = line.split_once(':') else {
        return Err(NotationLineError::MalformedLine { line_no, line: line.to_owned() });
    };
    let type_name = type_name.trim();
    let label = label.trim();
    if type_name.is_empty() {
        return Err(NotationLineError::MalformedLine { line_no, line: line.to_owned() });
    }
    if label.is_empty() {
        return Err(NotationLineError::EmptyLabel { line_no });
    }

    let existing = || elements.iter().map(Element::id);
    if type_name.eq_ignore_ascii_case("connect") {
        let mut nodes = elements.iter().rev().filter(|element| !element.is_connection());
        let (Some(target), Some(source)) = (nodes.next(), nodes.next()) else {
            return Err(NotationLineError::NotEnoughElements { line_no });
        };
        return Ok(Op::Connect {
            element_id: next_element_id(existing(), "connection"),
            source_id: source.id().clone(),
            target_id: target.id().clone(),
            label: Some(label.to_owned()),
        });
    }

    let Some(kind) = NodeKind::from_keyword(type_name) else {
        return Err(NotationLineError::UnknownType { line_no, type_name: type_name.to_owned() });
    };
    Ok(Op::AddNode {
        element_id: next_element_id(existing(), kind.keyword()),
        kind,
        label: label.to_owned(),
        position: layout.position(elements.len()),
    })
}

#[cfg(test)]
mod tests {
    use crate::layout::GridLayout;
    use crate::model::fixtures::three_tier;
    use crate::model::{ElementKind, NodeKind, Point};

    use super::{import_notation, NotationLineError};

    #[test]
    fn imports_nodes_and_connects_last_two() {
        let input = "@startuml\n' shop\nservice: Orders\n\nDatabase: Orders DB\nconnect: stores\n@enduml\n";

        let report = import_notation(input, &[], &GridLayout::default());

        assert!(report.errors.is_empty());
        assert_eq!(report.added, 3);
        let elements = &report.elements;
        assert_eq!(elements[0].kind(), ElementKind::Node(NodeKind::Service));
        assert_eq!(elements[1].kind(), ElementKind::Node(NodeKind::Database));
        assert_eq!(elements[1].position(), Point::new(300.0, 100.0));
        let connection = elements[2].as_connection().expect("connection");
        assert_eq!(elements[2].label(), Some("stores"));
        assert_eq!(connection.source_id(), Some(elements[0].id()));
        assert_eq!(connection.target_id(), Some(elements[1].id()));
    }

    #[test]
    fn continues_after_bad_lines() {
        let input = "service: A\nwall: North\njust text\nuser:   \nconnect: too early?\napi: B\n";

        let report = import_notation(input, &[], &GridLayout::default());

        assert_eq!(report.added, 2);
        assert_eq!(
            report.errors,
            vec![
                NotationLineError::UnknownType { line_no: 2, type_name: "wall".to_owned() },
                NotationLineError::MalformedLine { line_no: 3, line: "just text".to_owned() },
                NotationLineError::EmptyLabel { line_no: 4 },
                NotationLineError::NotEnoughElements { line_no: 5 },
            ]
        );
        assert_eq!(report.errors[0].line_no(), 2);
        assert_eq!(report.elements.len(), 2);
    }

    #[test]
    fn appends_to_existing_elements_with_fresh_ids() {
        let existing = three_tier();
        let report = import_notation("container: Cluster", &existing, &GridLayout::default());

        assert_eq!(report.elements.len(), existing.len() + 1);
        let added = report.elements.last().expect("added");
        assert_eq!(added.id().as_str(), "container-6");
        assert_eq!(&report.elements[..existing.len()], existing.as_slice());
    }
}
