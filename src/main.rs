// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! PartScout - hardware sourcing assistant for your terminal
//!
//! Entry point for the partscout CLI application.

use anyhow::{Context, Result};
use clap::Parser;

use partscout::api::PartScout;
use partscout::catalog::Catalog;
use partscout::cli::Cli;
use partscout::commands;
use partscout::config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output and `serve`.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if cli.verbose > 0 {
        if let Ok(directive) = "partscout=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load().context("Failed to load settings")?,
    };
    tracing::debug!(config = ?cli.config, "settings loaded");

    let scout = PartScout::new(Catalog::builtin(), settings);
    commands::run(&scout, &cli.command, cli.format)
        .with_context(|| format!("{} command failed", cli.command.name()))
}
