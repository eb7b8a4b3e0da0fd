// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Build metadata compiled into the binary
//!
//! Values come from the `SOCRATES_VERSION`, `SOCRATES_COMMIT` and
//! `SOCRATES_BUILD_DATE` environment variables at compile time. Anything
//! left unset (or set to an empty string) keeps its sentinel.

use std::fmt;

use serde::Serialize;

/// Program name used in banners and completion scripts
pub const PROGRAM_NAME: &str = "socrates";

/// Version identifier, `"dev"` unless overridden at build time
pub const VERSION: &str = or_sentinel(option_env!("SOCRATES_VERSION"), "dev");

/// Commit identifier, `"none"` unless overridden at build time
pub const COMMIT: &str = or_sentinel(option_env!("SOCRATES_COMMIT"), "none");

/// Build timestamp, `"unknown"` unless overridden at build time
pub const BUILD_DATE: &str = or_sentinel(option_env!("SOCRATES_BUILD_DATE"), "unknown");

const fn or_sentinel(value: Option<&'static str>, sentinel: &'static str) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel,
    }
}

/// The version/commit/date triple reported by `socrates version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
}

impl BuildMetadata {
    /// Metadata of the running binary
    pub const fn current() -> Self {
        Self {
            version: VERSION,
            commit: COMMIT,
            build_date: BUILD_DATE,
        }
    }

    /// Whether every field still carries its sentinel
    pub fn is_dev_build(&self) -> bool {
        self.version == "dev" && self.commit == "none" && self.build_date == "unknown"
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", PROGRAM_NAME, self.version)?;
        writeln!(f, "  commit: {}", self.commit)?;
        write!(f, "  built:  {}", self.build_date)
    }
}
