// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Owned application state.
//!
//! A [`Workspace`] holds the diagram and the last PlantUML text, and changes only through
//! [`Workspace::dispatch`]. Every action answers with a [`Notification`] suitable for a status
//! line or a chat reply.

use crate::command::{Interpreter, Outcome};
use crate::format::{generate_plantuml, import_notation};
use crate::model::{Diagram, Element, ElementId, Point};
use crate::ops::{apply_ops, ApplyError, ApplyResult, Op};
use crate::query::suggest_label;
use crate::templates::Template;
use crate::wizard::WizardAnswers;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// One free-text command.
    Command(String),
    /// Commands run one after another, each seeing the previous result.
    Script(Vec<String>),
    Rename { element_id: ElementId, label: String },
    Move { element_id: ElementId, position: Point },
    Rotate { element_id: ElementId, degrees: f64 },
    Remove { element_id: ElementId },
    Reset,
    Wizard(WizardAnswers),
    /// `type: Label` notation, optionally wrapped in `@startuml`/`@enduml`.
    Import(String),
    Template(Template),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: Level::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    diagram: Diagram,
    interpreter: Interpreter,
    plantuml: Option<String>,
}

impl Workspace {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter, ..Self::default() }
    }

    pub fn with_elements(interpreter: Interpreter, elements: Vec<Element>) -> Self {
        Self { diagram: Diagram::from_elements(elements), interpreter, plantuml: None }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn elements(&self) -> &[Element] {
        self.diagram.elements()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// PlantUML produced by the last wizard run or imported verbatim.
    pub fn plantuml(&self) -> Option<&str> {
        self.plantuml.as_deref()
    }

    pub fn dispatch(&mut self, action: Action) -> Notification {
        let notification = match action {
            Action::Command(command) => self.run_command(&command),
            Action::Script(commands) => self.run_script(&commands),
            Action::Rename { element_id, label } => {
                let op = Op::Rename { element_id: element_id.clone(), label };
                self.apply_single(op, |workspace, _| {
                    let label = workspace
                        .diagram
                        .get(&element_id)
                        .and_then(Element::label)
                        .unwrap_or_default();
                    format!("Renamed {element_id} to \"{label}\"")
                })
            }
            Action::Move { element_id, position } => {
                let op = Op::Move { element_id: element_id.clone(), position };
                self.apply_single(op, |_, _| {
                    format!("Moved {element_id} to ({}, {})", position.x, position.y)
                })
            }
            Action::Rotate { element_id, degrees } => {
                let op = Op::Rotate { element_id: element_id.clone(), degrees };
                self.apply_single(op, |_, _| format!("Rotated {element_id} by {degrees} degrees"))
            }
            Action::Remove { element_id } => {
                let cascade = self.interpreter.cascade();
                let op = Op::Remove { element_id: element_id.clone(), cascade };
                self.apply_single(op, |_, result| {
                    with_cascade(format!("Removed {element_id}"), result.delta.removed.len())
                })
            }
            Action::Reset => {
                let removed = self.diagram.len();
                match self.apply(&[Op::Clear]) {
                    Ok(_) => {
                        self.plantuml = None;
                        Notification::info(format!("Diagram reset ({removed} element(s) removed)"))
                    }
                    Err(err) => Notification::error(err.to_string()),
                }
            }
            Action::Wizard(answers) => self.run_wizard(&answers),
            Action::Import(text) => self.run_import(text),
            Action::Template(template) => {
                let Notification { level, message } = self.run_command(template.command);
                let message = format!("Applied template: {}. {message}", template.name);
                Notification { level, message }
            }
        };
        log::debug!(
            "rev {}: {:?} {}",
            self.diagram.rev(),
            notification.level,
            notification.message
        );
        notification
    }

    fn apply(&mut self, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
        let rev = self.diagram.rev();
        apply_ops(&mut self.diagram, rev, ops)
    }

    fn apply_single(
        &mut self,
        op: Op,
        describe: impl FnOnce(&Self, &ApplyResult) -> String,
    ) -> Notification {
        match self.apply(std::slice::from_ref(&op)) {
            Ok(result) => Notification::success(describe(self, &result)),
            Err(err) => Notification::error(err.to_string()),
        }
    }

    fn run_command(&mut self, command: &str) -> Notification {
        let plan = self.interpreter.plan(command, self.diagram.elements());
        let result = match self.apply(&plan.ops) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("command {command:?} planned an inapplicable op: {err}");
                return Notification::error(err.to_string());
            }
        };

        match plan.outcome {
            Outcome::Added { kind, label, .. } => {
                Notification::success(format!("Added {} \"{label}\"", kind.keyword()))
            }
            Outcome::Connected { label, .. } => Notification::success(format!("Connected {label}")),
            Outcome::Removed { element_id, label } => {
                let name =
                    label.map_or_else(|| element_id.to_string(), |label| format!("\"{label}\""));
                let message = with_cascade(format!("Removed {name}"), result.delta.removed.len());
                Notification::success(message)
            }
            Outcome::Reset { removed } => {
                self.plantuml = None;
                Notification::info(format!("Diagram reset ({removed} element(s) removed)"))
            }
            Outcome::Unresolved { labels } => {
                let missing = labels
                    .iter()
                    .map(|label| match suggest_label(self.diagram.elements(), label) {
                        Some(suggestion) => {
                            format!("\"{label}\" not found (did you mean \"{suggestion}\"?)")
                        }
                        None => format!("\"{label}\" not found"),
                    })
                    .collect::<Vec<_>>();
                Notification::error(missing.join("; "))
            }
            Outcome::Ignored => Notification::info(format!("Nothing to do for {command:?}")),
        }
    }

    fn run_script(&mut self, commands: &[String]) -> Notification {
        let failed = commands
            .iter()
            .filter(|command| self.run_command(command).is_error())
            .count();
        match failed {
            0 => Notification::success(format!("Ran {} command(s)", commands.len())),
            failed => {
                Notification::error(format!("Ran {} command(s), {failed} failed", commands.len()))
            }
        }
    }

    fn run_wizard(&mut self, answers: &WizardAnswers) -> Notification {
        if let Err(err) = answers.validate() {
            return Notification::error(err.to_string());
        }
        let before = self.diagram.len();
        let script = self.run_script(&answers.commands());
        self.plantuml = Some(generate_plantuml(answers));

        let added = self.diagram.len().saturating_sub(before);
        let message =
            format!("Generated architecture for \"{}\": {added} element(s)", answers.system_name());
        if script.is_error() {
            return Notification::error(format!("{message}; {}", script.message));
        }
        Notification::success(message)
    }

    fn run_import(&mut self, text: String) -> Notification {
        let report = import_notation(&text, self.diagram.elements(), self.interpreter.layout());
        if report.added > 0 {
            self.diagram.replace_elements(report.elements);
            self.diagram.bump_rev();
        }
        if text.contains("@startuml") {
            self.plantuml = Some(text);
        }

        let message = format!("Imported {} element(s)", report.added);
        match report.errors.first() {
            None => Notification::success(message),
            Some(first) => Notification::error(format!(
                "{message}; {} line(s) skipped, first at {first}",
                report.errors.len()
            )),
        }
    }
}

/// Appends the number of connections that went along with a removed element.
fn with_cascade(message: String, removed: usize) -> String {
    match removed.saturating_sub(1) {
        0 => message,
        cascaded => format!("{message} and {cascaded} connection(s)"),
    }
}
