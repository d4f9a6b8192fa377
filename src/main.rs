// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Archi CLI entrypoint.
//!
//! The element list lives in `<store>/elements.json`; every subcommand loads it, applies its
//! change and writes it back.

use std::error::Error;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, LevelFilter};

use archi::cli::Args;

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default()).filter_level(log_level).init();
    debug!("parsed arguments: {args:?}");

    if let Err(err) = archi::cli::run(&args) {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        error!("{message}");
        process::exit(1);
    }
}
