// Copyright (C) Microsoft Corporation. All rights reserved.

//! Xtask to run all repo checks

use clap::Parser;

use crate::Xtask;
use crate::XtaskCtx;
use crate::clippy;
use crate::fmt;
use crate::nextest;

/// Xtask to run all repo checks
#[derive(Parser)]
#[clap(about = "Run fmt, clippy and the test suite")]
pub struct Precheck {
    /// Skip TOML formatting
    #[clap(long)]
    pub skip_toml: bool,
}

impl Xtask for Precheck {
    fn run(self, ctx: XtaskCtx) -> anyhow::Result<()> {
        log::trace!("running precheck");

        let fmt = fmt::Fmt {
            fix: false,
            skip_toml: self.skip_toml,
            toolchain: Some("nightly".to_string()),
        };
        fmt.run(ctx.clone())?;

        let clippy = clippy::Clippy {};
        clippy.run(ctx.clone())?;

        // Default backend, then again with the OpenSSL backend built next to
        // CommonCrypto so the cross-backend tests run on Apple hosts.
        for features in [None, Some("azihsm_sha2/openssl".to_string())] {
            let nextest = nextest::Nextest {
                features,
                package: None,
                filterset: None,
            };
            nextest.run(ctx.clone())?;
        }

        log::trace!("done precheck");
        Ok(())
    }
}
