// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand handlers
//!
//! Each handler writes to the sink it is given; `main` passes stdout.

pub mod completion;
pub mod version;
