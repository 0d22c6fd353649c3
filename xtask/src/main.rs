// Copyright (C) Microsoft Corporation. All rights reserved.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! azihsm_sha2 repo-specific automation.
//!
//! Follows the xtask workflow/convention, as described at
//! <https://github.com/matklad/cargo-xtask>

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;

mod clippy;
mod fmt;
mod nextest;
mod precheck;

/// Common context passed into every Xtask
#[derive(Clone)]
pub struct XtaskCtx {
    /// Project root directory
    pub root: PathBuf,
}

/// Common trait implemented by all Xtask subcommands.
pub trait Xtask: Parser {
    /// Run the Xtask.
    ///
    /// Implementations may assume they run from the root of the repo;
    /// `try_main` sets the current directory before dispatching.
    fn run(self, ctx: XtaskCtx) -> anyhow::Result<()>;
}

#[derive(Parser)]
#[clap(name = "xtask", about = "azihsm_sha2 repo automation")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Clippy(clippy::Clippy),
    Fmt(fmt::Fmt),
    Nextest(nextest::Nextest),
    Precheck(precheck::Precheck),
}

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        log::error!("Error: {:#}", e);
        std::process::exit(-1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .context("xtask must live one level below the workspace root")?
        .to_path_buf();

    // for consistency, always run xtasks as though they were run from the root
    std::env::set_current_dir(&root)?;

    let ctx = XtaskCtx { root };

    match cli.command {
        Commands::Clippy(task) => task.run(ctx),
        Commands::Fmt(task) => task.run(ctx),
        Commands::Nextest(task) => task.run(ctx),
        Commands::Precheck(task) => task.run(ctx),
    }
}
