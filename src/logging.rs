// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tracing subscriber setup
//!
//! Events go to stderr so that command output on stdout stays exact.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Directive applied to the `socrates` target for a `-v` count
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("socrates=info"),
        2 => Some("socrates=debug"),
        _ => Some("socrates=trace"),
    }
}

/// Build the filter: base level, then `-v`, then `RUST_LOG` directives.
///
/// Later directives for the same target replace earlier ones. Invalid
/// directives are reported and skipped.
pub fn build_env_filter(base: LevelFilter, verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let base = base.to_string();
    let directives = [Some(base.as_str()), verbosity_directive(verbose), rust_log]
        .into_iter()
        .flatten()
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::builder().parse_lossy(directives)
}

/// Install the global subscriber
pub fn init(base: LevelFilter, verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(base, verbose, rust_log.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
