// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Xtask to run clippy

use clap::Parser;
use xshell::cmd;
use xshell::Shell;

use crate::Xtask;
use crate::XtaskCtx;

/// Xtask to run clippy
#[derive(Parser)]
#[clap(about = "Run clippy with and without the openssl feature")]
pub struct Clippy {}

impl Xtask for Clippy {
    fn run(self, _ctx: XtaskCtx) -> anyhow::Result<()> {
        log::trace!("running clippy");

        let sh = Shell::new()?;
        let rust_toolchain = sh.var("RUST_TOOLCHAIN").map(|s| format!("+{s}")).ok();

        for feature_args in [&[][..], &["--features", "azihsm_sha2/openssl"][..]] {
            let rust_toolchain = &rust_toolchain;
            cmd!(
                sh,
                "cargo {rust_toolchain...} clippy --workspace --all-targets {feature_args...} -- -D warnings"
            )
            .quiet()
            .run()?;
        }

        log::trace!("done clippy");
        Ok(())
    }
}
