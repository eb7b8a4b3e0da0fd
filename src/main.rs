// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Socrates - AI-powered coding assistant CLI
//!
//! Entry point for the Socrates CLI application.

use std::io;

use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;

use socrates::cli::{Cli, Commands};
use socrates::commands;
use socrates::config::Settings;
use socrates::error::Result;
use socrates::logging;

fn main() -> Result<()> {
    // Parse CLI arguments; clap exits non-zero on usage errors
    let cli = Cli::parse();

    // Settings problems must not stop the CLI, fall back to defaults
    let (settings, settings_error) = match load_settings(&cli) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    let base_level = settings.log_level().unwrap_or(LevelFilter::WARN);

    logging::init(base_level, cli.verbose);

    if let Some(err) = settings_error {
        let path = cli.config.clone().unwrap_or_else(Settings::default_path);
        tracing::warn!(path = %path.display(), "{}; using default settings", err);
    }
    tracing::debug!(command = ?cli.command, format = ?cli.format, "dispatching");

    match cli.command {
        None => {
            Cli::command().print_long_help()?;
        }
        Some(Commands::Version) => {
            commands::version::execute(cli.format, &mut io::stdout().lock())?;
        }
        Some(Commands::Completion(args)) => {
            commands::completion::execute(&args, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}
