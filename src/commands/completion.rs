// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shell completion command

use std::io::Write;

use clap::CommandFactory;

use crate::build_info::PROGRAM_NAME;
use crate::cli::args::{Cli, CompletionArgs};
use crate::error::Result;

/// Execute the completion command
pub fn execute(args: &CompletionArgs, out: &mut impl Write) -> Result<()> {
    tracing::debug!(shell = %args.shell, "generating completions");

    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, PROGRAM_NAME, out);
    out.flush()?;
    Ok(())
}
