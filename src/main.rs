// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;

use anyhow::{Context, Result};

use hello_bounds::run;

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr and only when asked for; stdout is the program's output
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::from_args_os(std::env::args_os());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, cli.name_bytes()).context("failed to write to stdout")?;

    Ok(())
}
