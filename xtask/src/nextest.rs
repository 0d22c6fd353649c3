// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Xtask to run nextest

use clap::Parser;
use xshell::cmd;
use xshell::Shell;

use crate::Xtask;
use crate::XtaskCtx;

/// Xtask to run nextest
#[derive(Parser)]
#[clap(about = "Run nextest")]
pub struct Nextest {
    /// Features to include in nextest run
    #[clap(long)]
    pub features: Option<String>,

    /// Package argument to run nextest command with
    #[clap(long)]
    pub package: Option<String>,

    /// Test filterset (see https://nexte.st/docs/filtersets)
    #[clap(long, short = 'E')]
    pub filterset: Option<String>,
}

impl Xtask for Nextest {
    fn run(self, _ctx: XtaskCtx) -> anyhow::Result<()> {
        log::trace!("running nextest");

        let sh = Shell::new()?;
        let rust_toolchain = sh.var("RUST_TOOLCHAIN").map(|s| format!("+{s}")).ok();

        // Check nextest version
        let rust_toolchain_version = rust_toolchain.clone();
        cmd!(sh, "cargo {rust_toolchain_version...} nextest --version")
            .quiet()
            .run()?;

        // convert xtask parameters into cargo command arguments
        let mut command_args: Vec<&str> = Vec::new();
        if let Some(features) = &self.features {
            command_args.push("--features");
            command_args.push(features);
        }
        if let Some(package) = &self.package {
            command_args.push("--package");
            command_args.push(package);
        }
        if let Some(filterset) = &self.filterset {
            command_args.push("--filterset");
            command_args.push(filterset);
        }

        cmd!(
            sh,
            "cargo {rust_toolchain...} nextest run --workspace --no-fail-fast {command_args...}"
        )
        .quiet()
        .run()?;

        log::trace!("done nextest");
        Ok(())
    }
}
