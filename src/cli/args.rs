// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "archi", author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding `elements.json` (default: `[store] dir` from the config, else `.`)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// fsync the stored list and its directory after saving
    #[arg(long, global = true)]
    pub durable_writes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interpret free-text commands in order
    Run {
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Read commands from stdin, one per line, until EOF or `quit`
    Repl,
    /// Draw an architecture from wizard answers (TOML) and print its PlantUML
    Wizard { answers: PathBuf },
    /// Append `type: Label` notation from a file
    Import { file: PathBuf },
    /// Write the diagram as JSON, SVG or PlantUML
    Export {
        #[arg(short, long, value_enum)]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List elements, optionally only boxes whose label or kind contains a term
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    Rename { id: String, label: String },
    #[command(allow_negative_numbers = true)]
    Move { id: String, x: f64, y: f64 },
    /// Add to an element's rotation
    #[command(allow_negative_numbers = true)]
    Rotate { id: String, degrees: f64 },
    /// Remove an element and the connections attached to it
    Remove { id: String },
    /// Remove every element
    Reset,
    /// List the built-in templates, or apply the one with the given id
    Template { id: Option<String> },
}
