// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use tracing::level_filters::LevelFilter;

use crate::error::{Result, SocratesError};

use super::Settings;

impl Settings {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        Ok(())
    }

    /// Parse the configured base log level.
    pub fn log_level(&self) -> Result<LevelFilter> {
        self.logging.level.trim().parse::<LevelFilter>().map_err(|_| {
            SocratesError::Config(format!(
                "invalid logging.level '{}' (expected off, error, warn, info, debug or trace)",
                self.logging.level
            ))
        })
    }
}
