// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::error::ErrorKind;
use clap::Parser;
use socrates::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_version_command() {
    let args = vec!["socrates", "version"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Version)));
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn test_parse_version_json() {
    let args = vec!["socrates", "--format", "json", "version"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Version)));
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_parse_no_command_defaults_to_none() {
    let args = vec!["socrates"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_unknown_subcommand_rejected() {
    let err = Cli::try_parse_from(["socrates", "badcommand"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
}

#[test]
fn test_version_takes_no_arguments() {
    let err = Cli::try_parse_from(["socrates", "version", "extra"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["socrates", "version", "--bogus"]).is_err());
}

#[test]
fn test_version_flag_displays_version() {
    let err = Cli::try_parse_from(["socrates", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    assert!(err
        .to_string()
        .contains(&format!("socrates {}", socrates::build_info::VERSION)));
}

#[test]
fn test_global_verbose_flag() {
    let args = vec!["socrates", "-vvv", "version"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(cli.verbose, 3);
}
