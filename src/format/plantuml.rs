// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, HashSet};

use super::ident::{escape_label, plantuml_alias, AliasTable};
use crate::model::{labels_equal, Element, ElementId, NodeKind};
use crate::wizard::WizardAnswers;

/// Accumulates declarations and relationships, skipping repeated and self-pointing arrows.
#[derive(Debug, Default)]
struct PlantUmlWriter {
    declarations: String,
    relations: Vec<(String, String)>,
    seen: HashSet<(String, String)>,
}

impl PlantUmlWriter {
    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.declarations.push_str("  ");
        }
        self.declarations.push_str(text);
        self.declarations.push('\n');
    }

    fn relate(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        let pair = (from.to_owned(), to.to_owned());
        if self.seen.insert(pair.clone()) {
            self.relations.push(pair);
        }
    }

    fn finish(self, title: Option<&str>) -> String {
        let mut out = String::new();
        out.push_str("@startuml\n");
        out.push_str("!theme plain\n");
        if let Some(title) = title {
            out.push_str("title ");
            out.push_str(&escape_label(title));
            out.push('\n');
        }
        out.push_str(&self.declarations);
        for (from, to) in &self.relations {
            out.push_str(from);
            out.push_str(" --> ");
            out.push_str(to);
            out.push('\n');
        }
        out.push_str("@enduml\n");
        out
    }
}

/// PlantUML component diagram for a set of wizard answers.
///
/// The system is a `rectangle` holding one `[Name]` per component. Components are chained in
/// list order, the last one points at the database, every client entry point (`interface`)
/// points at the first component (or the system), and the auth `node` and deployment `cloud`
/// point back at the system.
pub fn generate_plantuml(answers: &WizardAnswers) -> String {
    let mut aliases = AliasTable::default();
    let mut writer = PlantUmlWriter::default();

    let system_name = answers.system_name();
    let system = aliases.fresh_alias(system_name);
    let title = match answers.system_type {
        Some(system_type) => format!("{system_name} ({})", system_type.title()),
        None => system_name.to_owned(),
    };

    let components = answers
        .components
        .iter()
        .map(|component| {
            let declared = aliases.contains(component);
            (aliases.alias_for(component), component.as_str(), declared)
        })
        .collect::<Vec<_>>();

    if components.is_empty() {
        writer.line(0, &format!("rectangle \"{}\" as {system}", escape_label(system_name)));
    } else {
        writer.line(0, &format!("rectangle \"{}\" as {system} {{", escape_label(system_name)));
        for (alias, name, declared) in &components {
            if !declared {
                writer.line(1, &format!("[{}] as {alias}", escape_label(name)));
            }
        }
        writer.line(0, "}");
    }

    let database = answers.database.map(|database| {
        let alias = aliases.fresh_alias(database.name());
        writer.line(0, &format!("database \"{}\" as {alias}", database.name()));
        alias
    });

    let interfaces = answers
        .user_interface
        .map(|interface| interface.entry_points())
        .unwrap_or_default()
        .iter()
        .map(|name| {
            let alias = aliases.fresh_alias(name);
            writer.line(0, &format!("interface \"{name}\" as {alias}"));
            alias
        })
        .collect::<Vec<_>>();

    let auth = answers.auth().map(|name| {
        let alias = aliases.fresh_alias(name);
        writer.line(0, &format!("node \"{}\" as {alias}", escape_label(name)));
        alias
    });
    let deployment = answers.deployment().map(|name| {
        let alias = aliases.fresh_alias(name);
        writer.line(0, &format!("cloud \"{}\" as {alias}", escape_label(name)));
        alias
    });

    for pair in components.windows(2) {
        writer.relate(&pair[0].0, &pair[1].0);
    }
    if let (Some((last, _, _)), Some(database)) = (components.last(), &database) {
        writer.relate(last, database);
    }
    let entry_target = components.first().map_or(system.as_str(), |(alias, _, _)| alias.as_str());
    for interface in &interfaces {
        writer.relate(interface, entry_target);
    }
    for addon in auth.iter().chain(deployment.iter()) {
        writer.relate(addon, &system);
    }

    writer.finish(Some(&title))
}

fn declaration(kind: NodeKind, label: &str, alias: &str) -> String {
    let label = escape_label(label);
    match kind {
        NodeKind::Service | NodeKind::Api | NodeKind::Microservice | NodeKind::Component => {
            format!("[{label}] as {alias}")
        }
        NodeKind::Database => format!("database \"{label}\" as {alias}"),
        NodeKind::User => format!("actor \"{label}\" as {alias}"),
        NodeKind::System => format!("rectangle \"{label}\" as {alias}"),
        NodeKind::Container => format!("node \"{label}\" as {alias}"),
    }
}

/// PlantUML rendition of an element list.
///
/// Boxes are declared in list order under aliases derived from their ids; each connection
/// becomes an arrow when both ends resolve (by endpoint id, or by its `"A to B"` label for
/// connections stored without ids).
pub fn export_plantuml(elements: &[Element]) -> String {
    let mut writer = PlantUmlWriter::default();
    let mut aliases: BTreeMap<&ElementId, String> = BTreeMap::new();

    for element in elements {
        let Some(kind) = element.node_kind() else {
            continue;
        };
        let alias = plantuml_alias(element.id().as_str());
        let label = element.label().unwrap_or(kind.default_label());
        writer.line(0, &declaration(kind, label, &alias));
        aliases.insert(element.id(), alias);
    }

    for element in elements {
        let Some(connection) = element.as_connection() else {
            continue;
        };
        let endpoints = match (connection.source_id(), connection.target_id()) {
            (Some(source), Some(target)) => Some((source, target)),
            _ => element.label().and_then(|label| endpoints_from_label(elements, label)),
        };
        let Some((source, target)) = endpoints else {
            log::debug!("skipping unresolved connection {}", element.id());
            continue;
        };
        if let (Some(from), Some(to)) = (aliases.get(source), aliases.get(target)) {
            writer.relate(from, to);
        }
    }

    writer.finish(None)
}

fn endpoints_from_label<'a>(
    elements: &'a [Element],
    label: &str,
) -> Option<(&'a ElementId, &'a ElementId)> {
    let (source, target) = label.split_once(" to ")?;
    let find = |wanted: &str| {
        elements
            .iter()
            .filter(|element| !element.is_connection())
            .find(|element| element.label().is_some_and(|label| labels_equal(label, wanted)))
            .map(Element::id)
    };
    Some((find(source)?, find(target)?))
}
