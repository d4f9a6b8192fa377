// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Free-text command interpreter.
//!
//! Commands are classified by keyword ([`parse_command`]), resolved against the current element
//! list into [`Op`]s, and applied to a copy of the list. The input list is never mutated, and the
//! same list plus the same command always yields the same result.

pub mod parse;

use crate::layout::GridLayout;
use crate::model::{next_element_id, Element, ElementId, NodeKind};
use crate::ops::{apply_to_elements, CascadeRule, Delta, Op};

pub use parse::{parse_command, Intent};

/// What a command did, for phrasing notifications and chat replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { element_id: ElementId, kind: NodeKind, label: String },
    Connected { element_id: ElementId, label: String },
    Removed { element_id: ElementId, label: Option<String> },
    Reset { removed: usize },
    /// Labels named by the command that match no element.
    Unresolved { labels: Vec<String> },
    Ignored,
}

/// Ops to apply plus the outcome they produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub ops: Vec<Op>,
    pub outcome: Outcome,
}

impl Plan {
    fn unchanged(outcome: Outcome) -> Self {
        Self { ops: Vec::new(), outcome }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub elements: Vec<Element>,
    pub outcome: Outcome,
    pub delta: Delta,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interpreter {
    layout: GridLayout,
    cascade: CascadeRule,
}

impl Interpreter {
    pub fn new(layout: GridLayout, cascade: CascadeRule) -> Self {
        Self { layout, cascade }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn cascade(&self) -> CascadeRule {
        self.cascade
    }

    /// Resolves `command` against `elements` without touching them.
    pub fn plan(&self, command: &str, elements: &[Element]) -> Plan {
        let intent = parse_command(command);
        log::debug!("command {command:?} parsed as {intent:?}");
        match intent {
            Intent::Reset => Plan {
                ops: vec![Op::Clear],
                outcome: Outcome::Reset { removed: elements.len() },
            },
            Intent::Add { kind, label } => {
                let element_id = next_id(elements, kind.keyword());
                let position = self.layout.position(elements.len());
                Plan {
                    ops: vec![Op::AddNode {
                        element_id: element_id.clone(),
                        kind,
                        label: label.clone(),
                        position,
                    }],
                    outcome: Outcome::Added { element_id, kind, label },
                }
            }
            Intent::Connect { source, target } => self.plan_connect(elements, source, target),
            Intent::Delete { label } => self.plan_delete(elements, label),
            Intent::MalformedConnect | Intent::Unrecognized => Plan::unchanged(Outcome::Ignored),
        }
    }

    fn plan_connect(&self, elements: &[Element], source: String, target: String) -> Plan {
        let resolve = |label: &str| {
            elements
                .iter()
                .filter(|element| !element.is_connection())
                .find(|element| element.label_matches(label))
        };
        let resolved = (resolve(&source), resolve(&target));
        match resolved {
            (Some(from), Some(to)) => {
                let element_id = next_id(elements, "connection");
                let label = format!(
                    "{} to {}",
                    from.label().unwrap_or_default(),
                    to.label().unwrap_or_default()
                );
                Plan {
                    ops: vec![Op::Connect {
                        element_id: element_id.clone(),
                        source_id: from.id().clone(),
                        target_id: to.id().clone(),
                        label: Some(label.clone()),
                    }],
                    outcome: Outcome::Connected { element_id, label },
                }
            }
            (from, to) => {
                let mut labels = Vec::new();
                if from.is_none() {
                    labels.push(source);
                }
                if to.is_none() {
                    labels.push(target);
                }
                Plan::unchanged(Outcome::Unresolved { labels })
            }
        }
    }

    fn plan_delete(&self, elements: &[Element], label: Option<String>) -> Plan {
        let victim = match &label {
            Some(label) => elements.iter().find(|element| element.label_matches(label)),
            None => elements.last(),
        };
        match (victim, label) {
            (Some(victim), _) => Plan {
                ops: vec![Op::Remove { element_id: victim.id().clone(), cascade: self.cascade }],
                outcome: Outcome::Removed {
                    element_id: victim.id().clone(),
                    label: victim.label().map(str::to_owned),
                },
            },
            (None, Some(label)) => Plan::unchanged(Outcome::Unresolved { labels: vec![label] }),
            (None, None) => Plan::unchanged(Outcome::Ignored),
        }
    }

    pub fn interpret(&self, command: &str, elements: &[Element]) -> Vec<Element> {
        self.interpret_detailed(command, elements).elements
    }

    pub fn interpret_detailed(&self, command: &str, elements: &[Element]) -> Interpretation {
        let Plan { ops, outcome } = self.plan(command, elements);
        let mut next = elements.to_vec();
        match apply_to_elements(&mut next, &ops) {
            Ok(delta) => Interpretation { elements: next, outcome, delta },
            Err(err) => {
                log::warn!("command {command:?} planned an inapplicable op: {err}");
                Interpretation {
                    elements: elements.to_vec(),
                    outcome: Outcome::Ignored,
                    delta: Delta::default(),
                }
            }
        }
    }

    /// Folds `commands` left to right, starting from `elements`.
    pub fn interpret_script<I, S>(&self, commands: I, elements: &[Element]) -> Vec<Element>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        commands
            .into_iter()
            .fold(elements.to_vec(), |current, command| self.interpret(command.as_ref(), &current))
    }
}

fn next_id(elements: &[Element], prefix: &str) -> ElementId {
    next_element_id(elements.iter().map(Element::id), prefix)
}

/// [`Interpreter::interpret`] with the default grid and cascade rule.
pub fn interpret(command: &str, elements: &[Element]) -> Vec<Element> {
    Interpreter::default().interpret(command, elements)
}

pub fn interpret_detailed(command: &str, elements: &[Element]) -> Interpretation {
    Interpreter::default().interpret_detailed(command, elements)
}

pub fn interpret_script<I, S>(commands: I, elements: &[Element]) -> Vec<Element>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Interpreter::default().interpret_script(commands, elements)
}
