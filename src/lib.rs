// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Socrates - AI-powered coding assistant CLI.
//!
//! This crate exposes the pieces used by the `socrates` binary (`src/main.rs`):
//! - `cli`: root command, global flags and subcommand registry
//! - `commands`: subcommand handlers (`version`, `completion`)
//! - `build_info`: version/commit/date metadata compiled into the binary
//! - `config`: settings loaded from `~/.socrates/settings.json`
//! - `logging`: tracing subscriber setup

pub mod build_info;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use build_info::BuildMetadata;
pub use error::{Result, SocratesError};
