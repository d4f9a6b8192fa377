// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! CLI driver: loads the stored list, runs one subcommand through a [`Workspace`], and saves the
//! list again when the subcommand changed it.

mod args;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{load_config, AppConfig, ConfigError};
use crate::export::{export, ExportError};
use crate::model::{Element, ElementId, IdError, Point};
use crate::query::search;
use crate::store::{load_elements, save_elements, DirStore, StoreError, WriteDurability};
use crate::templates::{find_template, templates_in, TemplateCategory, UnknownTemplate};
use crate::wizard::{WizardAnswers, WizardError};
use crate::workspace::{Action, Notification, Workspace};

pub use args::{Args, Command};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Template(#[from] UnknownTemplate),
    #[error("invalid element id {id:?}: {source}")]
    InvalidId { id: String, source: IdError },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    /// An action was refused; the diagram keeps whatever earlier steps changed.
    #[error("{0}")]
    Rejected(String),
}

/// Runs `args` against stdin and stdout.
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, &mut stdin.lock(), &mut stdout.lock())
}

pub fn run_with(args: &Args, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let mut store = open_store(args, &config);
    let elements = load_elements(&store)?;
    log::info!("loaded {} element(s) from {}", elements.len(), store.root().display());

    let mut workspace = Workspace::with_elements(config.interpreter(), elements);
    let base_rev = workspace.diagram().rev();
    let rejected = execute(&args.command, &mut workspace, input, out)?;

    if workspace.diagram().rev() != base_rev {
        save_elements(&mut store, workspace.elements())?;
        log::info!("saved {} element(s) to {}", workspace.elements().len(), store.root().display());
    }

    match rejected {
        Some(notification) => Err(CliError::Rejected(notification.message)),
        None => Ok(()),
    }
}

fn open_store(args: &Args, config: &AppConfig) -> DirStore {
    let root = args
        .store
        .clone()
        .or_else(|| config.store.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let durability = if args.durable_writes || config.store.durable {
        WriteDurability::Durable
    } else {
        WriteDurability::BestEffort
    };
    DirStore::new(root).with_durability(durability)
}

/// Runs one subcommand; returns the first refused action, if any.
fn execute(
    command: &Command,
    workspace: &mut Workspace,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<Notification>, CliError> {
    let mut report = Report::new(out);
    match command {
        Command::Run { commands } => {
            for text in commands {
                report.notify(workspace.dispatch(Action::Command(text.clone())))?;
            }
        }
        Command::Repl => {
            let mut line = String::new();
            loop {
                line.clear();
                let read = input.read_line(&mut line).map_err(|source| CliError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
                let text = line.trim();
                let quit = text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit");
                if read == 0 || quit {
                    break;
                }
                if text.is_empty() {
                    continue;
                }
                // Refusals are shown but do not end the session.
                let notification = workspace.dispatch(Action::Command(text.to_owned()));
                report.print(&notification.message)?;
            }
        }
        Command::Wizard { answers } => {
            let answers = WizardAnswers::from_toml_str(&read_file(answers)?)?;
            report.notify(workspace.dispatch(Action::Wizard(answers)))?;
            if let Some(plantuml) = workspace.plantuml() {
                report.print(plantuml.trim_end())?;
            }
        }
        Command::Import { file } => {
            report.notify(workspace.dispatch(Action::Import(read_file(file)?)))?;
        }
        Command::Export { format, output } => {
            let text = export(*format, workspace.elements())?;
            match output {
                Some(path) => {
                    fs::write(path, &text)
                        .map_err(|source| CliError::Write { path: path.clone(), source })?;
                    log::info!("wrote {} to {}", format.extension(), path.display());
                }
                None => report.print(text.trim_end())?,
            }
        }
        Command::List { search: term } => {
            let listed: Vec<&Element> = match term {
                Some(term) => search(workspace.elements(), term),
                None => workspace.elements().iter().collect(),
            };
            for element in listed {
                report.print(&list_line(element))?;
            }
        }
        Command::Rename { id, label } => {
            let element_id = parse_id(id)?;
            let label = label.clone();
            report.notify(workspace.dispatch(Action::Rename { element_id, label }))?;
        }
        Command::Move { id, x, y } => {
            let element_id = parse_id(id)?;
            let position = Point::new(*x, *y);
            report.notify(workspace.dispatch(Action::Move { element_id, position }))?;
        }
        Command::Rotate { id, degrees } => {
            let element_id = parse_id(id)?;
            let degrees = *degrees;
            report.notify(workspace.dispatch(Action::Rotate { element_id, degrees }))?;
        }
        Command::Remove { id } => {
            let element_id = parse_id(id)?;
            report.notify(workspace.dispatch(Action::Remove { element_id }))?;
        }
        Command::Reset => report.notify(workspace.dispatch(Action::Reset))?,
        Command::Template { id: Some(id) } => {
            let template = *find_template(id)?;
            report.notify(workspace.dispatch(Action::Template(template)))?;
        }
        Command::Template { id: None } => {
            for category in TemplateCategory::ALL {
                for template in templates_in(category) {
                    let line = format!("{}\t{}\t{}", template.id, category.name(), template.name);
                    report.print(&line)?;
                }
            }
        }
    }
    Ok(report.rejected)
}

/// Prints notifications and remembers the first refusal.
struct Report<'a> {
    out: &'a mut dyn Write,
    rejected: Option<Notification>,
}

impl<'a> Report<'a> {
    fn new(out: &'a mut dyn Write) -> Self {
        Self { out, rejected: None }
    }

    fn print(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{text}").map_err(CliError::Output)
    }

    fn notify(&mut self, notification: Notification) -> Result<(), CliError> {
        self.print(&notification.message)?;
        if notification.is_error() && self.rejected.is_none() {
            self.rejected = Some(notification);
        }
        Ok(())
    }
}

fn list_line(element: &Element) -> String {
    let position = element.position();
    format!(
        "{}\t{}\t{}\t({}, {})",
        element.id(),
        element.kind().as_str(),
        element.label().unwrap_or("-"),
        position.x,
        position.y
    )
}

fn parse_id(raw: &str) -> Result<ElementId, CliError> {
    ElementId::new(raw).map_err(|source| CliError::InvalidId { id: raw.to_owned(), source })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}
