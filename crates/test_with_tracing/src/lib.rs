// Copyright (C) Microsoft Corporation. All rights reserved.

//! `#[test]` replacement that routes `tracing` output into the test harness.
//!
//! ```ignore
//! use test_with_tracing::test;
//! ```
//!
//! Without `RUST_LOG`, events from the workspace crates are shown down to
//! `TRACE` and everything else from `WARN` up. `RUST_LOG` replaces that
//! filter entirely, e.g. `RUST_LOG=azihsm_sha2=debug`.

#[cfg(test)]
extern crate self as test_with_tracing;

pub use test_with_tracing_macro::test;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Crates whose events are shown in full by default.
const WORKSPACE_TARGETS: &[&str] = &["azihsm_sha2", "test_with_tracing"];

/// Builds the event filter from `RUST_LOG`, falling back to
/// [`default_targets`] when it is unset or does not parse.
fn targets() -> Targets {
    match std::env::var("RUST_LOG") {
        Ok(var) => var.parse().unwrap_or_else(|err| {
            eprintln!("ignoring RUST_LOG={var:?}: {err}");
            default_targets()
        }),
        Err(_) => default_targets(),
    }
}

fn default_targets() -> Targets {
    WORKSPACE_TARGETS
        .iter()
        .fold(Targets::new().with_default(LevelFilter::WARN), |t, name| {
            t.with_target(*name, LevelFilter::TRACE)
        })
}

/// Installs the test subscriber. Called by every `#[test]` generated by the
/// attribute; only the first call in a process has an effect.
#[doc(hidden)]
pub fn init() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let installed = tracing_subscriber::fmt()
            .compact()
            .with_ansi(false)
            .with_test_writer()
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_max_level(LevelFilter::TRACE)
            .finish()
            .with(targets())
            .try_init();

        // Another subscriber may already be global if a test set one up.
        if let Err(err) = installed {
            eprintln!("test subscriber not installed: {err}");
        }
    });
}
