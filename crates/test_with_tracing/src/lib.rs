// Copyright (C) Microsoft Corporation. All rights reserved.

//! Tracing output for tests.
//!
//! Call [`init`] at the top of a test to route `tracing` events from the
//! code under test to the test harness writer. `RUST_LOG` narrows the targets;
//! without it everything at `DEBUG` and above is shown.

// This is only used by test code; we allow `expect` usage (but not `unwrap`) here.
#![allow(clippy::expect_used)]

use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Initializes `tracing` for tests. Safe to call from every test.
pub fn init() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let targets = if let Ok(var) = std::env::var("RUST_LOG") {
            var.parse()
                .expect("Failed to parse RUST_LOG environment variable")
        } else {
            Targets::new().with_default(LevelFilter::DEBUG)
        };
        tracing_subscriber::fmt()
            .pretty()
            .with_ansi(false) // avoid polluting logs with escape sequences
            .log_internal_errors(true)
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .with_thread_ids(true)
            .finish()
            .with(targets)
            .init();
    });
}
