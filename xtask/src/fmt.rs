// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Xtask to run formatting checks

use clap::Parser;
use xshell::cmd;

use crate::Xtask;
use crate::XtaskCtx;

/// Xtask to run formatting checks
#[derive(Parser)]
#[clap(about = "Run Rust and TOML formatting checks")]
pub struct Fmt {
    /// Attempt to fix any formatting issues
    #[clap(long)]
    pub fix: bool,

    /// Skip TOML formatting
    #[clap(long)]
    pub skip_toml: bool,

    /// Override toolchain to use for formatting
    #[clap(long)]
    pub toolchain: Option<String>,
}

impl Xtask for Fmt {
    fn run(self, _ctx: XtaskCtx) -> anyhow::Result<()> {
        log::trace!("running fmt");
        let sh = xshell::Shell::new()?;
        let rust_toolchain = self
            .toolchain
            .or_else(|| sh.var("RUST_TOOLCHAIN").ok())
            .map(|s| format!("+{s}"));

        let fmt_check = (!self.fix).then_some("--check");

        cmd!(sh, "cargo {rust_toolchain...} fmt --all -- {fmt_check...}")
            .quiet()
            .run()?;

        if !self.skip_toml {
            log::trace!("running taplo fmt");
            cmd!(sh, "taplo fmt {fmt_check...}").quiet().run()?;
        }

        log::trace!("done fmt");
        Ok(())
    }
}
