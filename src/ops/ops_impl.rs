// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn apply_op(
    elements: &mut Vec<Element>,
    op: &Op,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        Op::AddNode { element_id, kind, label, position } => {
            ensure_absent(elements, element_id)?;
            ensure_finite_point(element_id, *position)?;
            let node = Element::node(element_id.clone(), *kind, *position);
            elements.push(node.with_label(label.clone()));
            delta.record_added(element_id.clone());
            Ok(())
        }
        Op::Connect { element_id, source_id, target_id, label } => {
            ensure_absent(elements, element_id)?;
            let source = endpoint(elements, source_id)?;
            let target = endpoint(elements, target_id)?;
            let label = match label {
                Some(label) => label.clone(),
                None => format!(
                    "{} to {}",
                    source.label().unwrap_or_default(),
                    target.label().unwrap_or_default()
                ),
            };
            let connection = crate::model::Connection::between(
                source_id.clone(),
                source.center(),
                target_id.clone(),
                target.center(),
            );
            elements.push(Element::connection(element_id.clone(), connection).with_label(label));
            delta.record_added(element_id.clone());
            Ok(())
        }
        Op::Remove { element_id, cascade } => {
            let Some(index) = index_of(elements, element_id) else {
                return Err(ApplyError::NotFound { element_id: element_id.clone() });
            };
            let removed = elements.remove(index);
            let victims = elements
                .iter()
                .filter(|candidate| cascades_from(&removed, candidate, *cascade))
                .map(|candidate| candidate.id().clone())
                .collect::<HashSet<_>>();
            elements.retain(|candidate| !victims.contains(candidate.id()));
            for victim in victims {
                delta.record_removed(victim);
            }
            delta.record_removed(element_id.clone());
            Ok(())
        }
        Op::Rename { element_id, label } => {
            let label = label.trim();
            if label.is_empty() {
                return Err(ApplyError::EmptyLabel { element_id: element_id.clone() });
            }
            let element = element_mut(elements, element_id)?;
            element.set_label(Some(label));
            delta.record_updated(element_id.clone());
            Ok(())
        }
        Op::Move { element_id, position } => {
            ensure_finite_point(element_id, *position)?;
            let element = element_mut(elements, element_id)?;
            element.set_position(*position);
            if element.is_connection() {
                delta.record_updated(element_id.clone());
                return Ok(());
            }
            let center = element.center();
            delta.record_updated(element_id.clone());
            reanchor_connections(elements, element_id, center, delta);
            Ok(())
        }
        Op::Rotate { element_id, degrees } => {
            let element = element_mut(elements, element_id)?;
            let rotation = element.rotation().unwrap_or(0.0) + degrees;
            if !rotation.is_finite() {
                return Err(ApplyError::NonFinite {
                    element_id: element_id.clone(),
                    field: "rotation",
                });
            }
            element.set_rotation(Some(rotation));
            delta.record_updated(element_id.clone());
            Ok(())
        }
        Op::Clear => {
            for element in elements.drain(..) {
                delta.record_removed(element.id().clone());
            }
            Ok(())
        }
    }
}

fn index_of(elements: &[Element], element_id: &ElementId) -> Option<usize> {
    elements.iter().position(|element| element.id() == element_id)
}

fn ensure_absent(elements: &[Element], element_id: &ElementId) -> Result<(), ApplyError> {
    if index_of(elements, element_id).is_some() {
        return Err(ApplyError::AlreadyExists { element_id: element_id.clone() });
    }
    Ok(())
}

fn ensure_finite_point(element_id: &ElementId, position: Point) -> Result<(), ApplyError> {
    if position.is_finite() {
        return Ok(());
    }
    Err(ApplyError::NonFinite { element_id: element_id.clone(), field: "position" })
}

fn element_mut<'a>(
    elements: &'a mut [Element],
    element_id: &ElementId,
) -> Result<&'a mut Element, ApplyError> {
    elements
        .iter_mut()
        .find(|element| element.id() == element_id)
        .ok_or_else(|| ApplyError::NotFound { element_id: element_id.clone() })
}

fn endpoint<'a>(
    elements: &'a [Element],
    element_id: &ElementId,
) -> Result<&'a Element, ApplyError> {
    let Some(element) = elements.iter().find(|element| element.id() == element_id) else {
        return Err(ApplyError::NotFound { element_id: element_id.clone() });
    };
    if element.is_connection() {
        return Err(ApplyError::NotANode { element_id: element_id.clone() });
    }
    Ok(element)
}

/// Whether `candidate` goes away together with `removed`.
fn cascades_from(removed: &Element, candidate: &Element, rule: CascadeRule) -> bool {
    let Some(connection) = candidate.as_connection() else {
        return false;
    };
    match rule {
        CascadeRule::Endpoints if connection.has_endpoint_ids() => connection.touches(removed.id()),
        CascadeRule::Endpoints | CascadeRule::Label => label_references(candidate, removed),
    }
}

fn label_references(connection: &Element, removed: &Element) -> bool {
    let (Some(connection_label), Some(removed_label)) = (connection.label(), removed.label()) else {
        return false;
    };
    let removed_label = removed_label.trim().to_lowercase();
    !removed_label.is_empty() && connection_label.to_lowercase().contains(&removed_label)
}

/// Moves the endpoints of id-anchored connections onto the moved node's new center.
fn reanchor_connections(
    elements: &mut [Element],
    node_id: &ElementId,
    center: Point,
    delta: &mut DeltaBuilder,
) {
    for element in elements.iter_mut() {
        let Some(connection) = element.as_connection() else {
            continue;
        };
        let from_node = connection.source_id() == Some(node_id);
        let to_node = connection.target_id() == Some(node_id);
        if !from_node && !to_node {
            continue;
        }
        let start = if from_node { center } else { connection.start_point() };
        let end = if to_node { center } else { connection.end_point() };
        element.set_connection_points(start, end);
        delta.record_updated(element.id().clone());
    }
}
