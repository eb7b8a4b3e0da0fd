// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Build script for socrates.
//!
//! Build metadata is injected by the release pipeline through compile-time
//! environment variables, e.g.
//!
//! ```sh
//! SOCRATES_VERSION=v0.2.0 \
//! SOCRATES_COMMIT=$(git rev-parse --short HEAD) \
//! SOCRATES_BUILD_DATE=$(date -u +%Y-%m-%dT%H:%M:%SZ) \
//!     cargo build --release
//! ```
//!
//! Unset variables leave the sentinels in `src/build_info.rs` in place.

const METADATA_VARS: [&str; 3] = ["SOCRATES_VERSION", "SOCRATES_COMMIT", "SOCRATES_BUILD_DATE"];

fn main() {
    for var in METADATA_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
